use crate::types::{cross, mul_div, narrow, widen, LineSegment, Point};

/// Intersection of the infinite lines through `a` and `b`.
///
/// Solves `b.from + t·b_vec` on line `a` with `t = (b.from - a.from) × a_vec / (a_vec × b_vec)`;
/// the division truncates toward zero per component. Beyond `COORD_LIMIT` the
/// step along `b_vec` is formed in `f64` (see [`mul_div`]).
///
/// Parallel or collinear lines have no single intersection. The centroid of the
/// four endpoints is returned instead. This is only an approximation and callers
/// that care must test `are_parallel` first.
pub fn intersection(a: LineSegment, b: LineSegment) -> Point {
    let a_vec = a.vector();
    let b_vec = b.vector();
    let num = cross(b.from - a.from, a_vec);
    let den = cross(a_vec, b_vec);
    if den == 0 {
        let sum = widen(a.from) + widen(a.to) + widen(b.from) + widen(b.to);
        return narrow(sum / 4);
    }
    b.from + mul_div(b_vec, num, den)
}
