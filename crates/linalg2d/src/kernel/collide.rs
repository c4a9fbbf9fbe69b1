use crate::cfg::AXIS_ALIGN_SLACK;
use crate::types::{Point, Wide};

/// Does segment `b` touch or cross segment `a`?
///
/// Pre: the caller has transformed both segments so that `a` lies on a
/// horizontal line and points in +x (`a_from.y ≈ a_to.y`, `a_from.x <= a_to.x`).
/// Checked by debug assertions only.
///
/// Boundary inclusive: touching an endpoint of `a`, or `b` ending on `a`'s
/// line, counts as a collision.
pub fn segments_collide(a_from: Point, a_to: Point, b_from: Point, b_to: Point) -> bool {
    debug_assert!(
        (a_from.y - a_to.y).abs() < AXIS_ALIGN_SLACK,
        "segment a must be aligned with the x axis"
    );
    debug_assert!(
        a_from.x - AXIS_ALIGN_SLACK <= a_to.x,
        "segment a must point in +x"
    );
    let y = a_from.y;
    let straddles = (b_from.y >= y && b_to.y <= y) || (b_to.y >= y && b_from.y <= y);
    if !straddles {
        return false;
    }
    if b_from.y == b_to.y {
        let (lo, hi) = if b_to.x < b_from.x {
            (b_to.x, b_from.x)
        } else {
            (b_from.x, b_to.x)
        };
        return lo <= a_to.x && hi >= a_from.x;
    }
    let dx = Wide::from(b_to.x - b_from.x);
    let dy = Wide::from(b_to.y - b_from.y);
    let x = Wide::from(b_from.x) + dx * Wide::from(y - b_from.y) / dy;
    (Wide::from(a_from.x)..=Wide::from(a_to.x)).contains(&x)
}
