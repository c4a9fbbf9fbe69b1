use crate::types::{dot, isqrt, v_size2, Coord, LineSegment, Wide};

/// Are `a` and `b` parallel (same or opposite direction) within `allowed_error`?
///
/// Compares `|a · b|` with `|a|·|b|`; the two agree exactly for parallel
/// vectors. The admissible gap scales with the segment lengths as
/// `allowed_error · sqrt(|a · b|)` and must be undercut, except that an exact
/// match always passes. A zero-length segment has no direction and is parallel
/// to anything.
pub fn are_parallel(a: LineSegment, b: LineSegment, allowed_error: Coord) -> bool {
    let a_vec = a.vector();
    let b_vec = b.vector();
    let (a_size2, b_size2) = (v_size2(a_vec), v_size2(b_vec));
    if a_size2 == 0 || b_size2 == 0 {
        return true;
    }
    let dot_size = dot(a_vec, b_vec).abs();
    let size_product = length_product(a_size2, b_size2);
    let dot_diff = (dot_size - size_product).abs();
    let allowed_dot_error = (allowed_error as f64 * (dot_size as f64).sqrt()) as Wide;
    dot_diff < allowed_dot_error || dot_diff == 0
}

/// Are `a` and `b` on one line within `allowed_error`?
///
/// Both endpoints of `b` are anchored to `a.from` and the resulting segments
/// checked against `b` with the same tolerance rule.
pub fn are_collinear(a: LineSegment, b: LineSegment, allowed_error: Coord) -> bool {
    let lines_are_parallel = are_parallel(a, b, allowed_error);
    let b_from_is_on_line = are_parallel(LineSegment::new(a.from, b.from), b, allowed_error);
    let b_to_is_on_line = are_parallel(LineSegment::new(a.from, b.to), b, allowed_error);
    lines_are_parallel && b_from_is_on_line && b_to_is_on_line
}

/// `|a|·|b|` from the squared lengths; exact (floor) while the product fits.
fn length_product(a_size2: Wide, b_size2: Wide) -> Wide {
    match a_size2.checked_mul(b_size2) {
        Some(p) => isqrt(p),
        None => isqrt(a_size2) * isqrt(b_size2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> LineSegment {
        LineSegment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn self_and_scaled_copies_are_parallel_exactly() {
        let a = seg(0, 0, 7, 3);
        assert!(are_parallel(a, a, 0));
        assert!(are_parallel(a, seg(10, 10, 10 + 21, 10 + 9), 0));
        assert!(are_parallel(a, a.reversed(), 0));
    }

    #[test]
    fn perpendicular_is_never_parallel() {
        let a = seg(0, 0, 100, 0);
        let b = seg(0, 0, 0, 100);
        assert!(!are_parallel(a, b, 1000));
    }

    #[test]
    fn tolerance_admits_small_deviation() {
        let a = seg(0, 0, 1000, 0);
        let b = seg(0, 0, 1000, 10);
        assert!(!are_parallel(a, b, 0));
        assert!(are_parallel(a, b, 1));
    }

    #[test]
    fn tolerance_bound_is_exclusive() {
        // |a·b| = 16, |a||b| = 20, bound = tolerance · 4
        let a = seg(0, 0, 4, 0);
        let b = seg(0, 0, 4, 3);
        assert!(!are_parallel(a, b, 1));
        assert!(are_parallel(a, b, 2));
    }

    #[test]
    fn zero_length_is_parallel_to_anything() {
        let a = seg(5, 5, 5, 5);
        assert!(are_parallel(a, seg(0, 0, 0, 9), 0));
        assert!(are_parallel(seg(0, 0, 0, 9), a, 0));
    }

    #[test]
    fn collinear_points() {
        let a = seg(0, 0, 5, 0);
        let b = seg(5, 0, 10, 0);
        assert!(are_collinear(a, b, 0));
        // parallel but offset
        assert!(!are_collinear(a, seg(5, 3, 10, 3), 0));
        assert!(!are_collinear(a, seg(5, 30, 10, 30), 1));
        // kinked
        assert!(!are_collinear(a, seg(5, 0, 10, 5), 1));
    }
}
