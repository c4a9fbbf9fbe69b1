//! Point on a segment at an exact distance from a query point.
//!
//! ```text
//!         r           (result, at distance `dist` from p)
//!   a-----r------x---------b
//!          '-.   :
//!             '-.: px
//!                p
//! ```
//! `x` is the foot of `p` on line `ab`, `ax` its signed offset from `a`,
//! `px` the perpendicular distance and `xr = sqrt(dist² - px²)`.
//!
//! Offsets along the line are kept as numerators over `|ab|²`, so nothing
//! divides by a truncated `|ab|`:
//! - `ax·|ab| = ab · ap`
//! - `px·|ab| = ab × ap`
//! - `xr·|ab| = sqrt(dist²·|ab|² - (ab × ap)²)`
//!
//! The only rounding is the square root and the final step onto the grid.

use crate::types::{cross, dot, isqrt, mul_div_round, v_size, v_size2, Coord, Point, Wide};

/// Point `r` on segment `a–b` with `|p - r| == dist`, rounded to the grid.
///
/// When two such points exist the one closer to `a` is returned. `None` when
/// the circle of radius `dist` around `p` misses the segment. `r` is the grid
/// point nearest the exact solution, so `|p - r|` is within one unit of `dist`
/// for segments at least 4 long and within 1.25 for shorter ones. A
/// degenerate segment yields `a` when `|p - a|` truncates to `dist`.
pub fn point_on_line_with_dist(p: Point, a: Point, b: Point, dist: Coord) -> Option<Point> {
    let ab = b - a;
    let ap = p - a;
    let ab_size2 = v_size2(ab);
    if ab_size2 == 0 {
        return (v_size(ap) == dist).then_some(a);
    }
    let ax = dot(ab, ap);
    let xr = half_chord(dist, ab_size2, cross(ab, ap))?;

    let within = |ar: Wide| (0..=ab_size2).contains(&ar);
    let ar = if ax <= 0 {
        // foot before a: only the forward solution can reach the segment
        Some(ax.saturating_add(xr)).filter(|&ar| within(ar))
    } else if ax >= ab_size2 {
        // foot beyond b: only the backward solution can
        Some(ax.saturating_sub(xr)).filter(|&ar| within(ar))
    } else if ax >= xr {
        Some(ax - xr)
    } else {
        Some(ax.saturating_add(xr)).filter(|&ar| ar <= ab_size2)
    };
    ar.map(|ar| a + mul_div_round(ab, ar, ab_size2))
}

/// `xr·|ab|` rounded to the nearest integer, or `None` when the line through
/// `a` and `b` is farther than `dist` from `p`.
fn half_chord(dist: Coord, ab_size2: Wide, ab_cross_ap: Wide) -> Option<Wide> {
    let dist2 = Wide::from(dist) * Wide::from(dist);
    let exact = dist2
        .checked_mul(ab_size2)
        .zip(ab_cross_ap.checked_mul(ab_cross_ap))
        .map(|(reach2, px2)| reach2 - px2);
    match exact {
        Some(q) => (q >= 0).then(|| round_sqrt(q)),
        None => {
            let q = dist2 as f64 * ab_size2 as f64 - (ab_cross_ap as f64).powi(2);
            (q >= 0.0).then(|| q.sqrt().round() as Wide)
        }
    }
}

/// Square root rounded to the nearest integer.
fn round_sqrt(q: Wide) -> Wide {
    let s = isqrt(q);
    // sqrt(q) >= s + 1/2  <=>  q > s² + s
    if q - s * s > s {
        s + 1
    } else {
        s
    }
}
