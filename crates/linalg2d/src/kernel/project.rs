//! Projections onto lines and nearest-point queries.
//!
//! The line a point or segment is projected onto must have non-zero length;
//! this is a caller contract checked with debug assertions only.

use crate::types::{cross, dot, mul_div, resize, v_size, v_size2, Coord, LineSegment, Point, Wide};

/// Signed length of `to_project` measured along the direction of `onto`.
///
/// Positive when `to_project` runs the same way as `onto`, negative when it
/// runs against it.
pub fn projected_length(to_project: LineSegment, onto: LineSegment) -> Coord {
    let a = to_project.from;
    let b = to_project.to;
    let c = onto.from;
    let cd = onto.vector();
    let cd_size = v_size(cd);
    debug_assert!(cd_size > 0, "cannot project onto a degenerate segment");
    let a_projected = dot(a - c, cd);
    let b_projected = dot(b - c, cd);
    ((b_projected - a_projected) / Wide::from(cd_size)) as Coord
}

/// Foot of the perpendicular from `p` onto the infinite line through `onto`.
pub fn project_point(p: Point, onto: LineSegment) -> Point {
    let ab = onto.vector();
    let ab_size = v_size(ab);
    debug_assert!(ab_size > 0, "cannot project onto a degenerate segment");
    let projected_length = (dot(ab, p - onto.from) / Wide::from(ab_size)) as Coord;
    onto.from + resize(ab, projected_length)
}

/// Both endpoints of `segment` projected onto the line through `onto`.
pub fn project_segment(segment: LineSegment, onto: LineSegment) -> LineSegment {
    LineSegment::new(project_point(segment.from, onto), project_point(segment.to, onto))
}

/// Which side of the directed line `a → b` is `p` on?
///
/// Positive: left. Zero: on the line. Negative: right. The magnitude is twice
/// the area of triangle `a, b, p`.
#[inline]
pub fn point_is_left_of_line(p: Point, a: Point, b: Point) -> Wide {
    cross(b - a, p - a)
}

/// Point of the closed segment nearest to `p`.
///
/// A degenerate segment collapses to `segment.from`.
pub fn closest_on_segment(p: Point, segment: LineSegment) -> Point {
    let ab = segment.vector();
    let ab_size2 = v_size2(ab);
    if ab_size2 == 0 {
        return segment.from;
    }
    let t = dot(p - segment.from, ab);
    if t <= 0 {
        return segment.from;
    }
    if t >= ab_size2 {
        return segment.to;
    }
    segment.from + mul_div(ab, t, ab_size2)
}

/// Squared perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Falls back to the squared distance to `a` when `a == b`.
pub fn dist2_from_line(p: Point, a: Point, b: Point) -> Wide {
    let ab_size2 = v_size2(b - a);
    if ab_size2 == 0 {
        return v_size2(p - a);
    }
    let area2 = point_is_left_of_line(p, a, b);
    match area2.checked_mul(area2) {
        Some(sq) => sq / ab_size2,
        None => ((area2 as f64) * (area2 as f64) / ab_size2 as f64) as Wide,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> LineSegment {
        LineSegment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn projected_length_sign_follows_direction() {
        let onto = seg(0, 0, 100, 0);
        let s = seg(10, 5, 40, 50);
        assert_eq!(projected_length(s, onto), 30);
        assert_eq!(projected_length(s.reversed(), onto), -30);
        assert_eq!(projected_length(s, onto.reversed()), -30);
    }

    #[test]
    fn project_point_onto_diagonal() {
        let onto = seg(0, 0, 30, 40);
        // (50, 0) projects to length 30 along (3,4)/5
        assert_eq!(project_point(Point::new(50, 0), onto), Point::new(18, 24));
        // points already on the line stay put
        assert_eq!(project_point(Point::new(60, 80), onto), Point::new(60, 80));
        // beyond the start of the segment
        assert_eq!(project_point(Point::new(-3, -4), onto), Point::new(-3, -4));
    }

    #[test]
    fn project_segment_lands_on_line() {
        let onto = seg(0, 0, 100, 0);
        let s = project_segment(seg(10, 7, -20, -9), onto);
        assert_eq!(s, seg(10, 0, -20, 0));
    }

    #[test]
    fn side_of_line() {
        let (a, b) = (Point::new(0, 0), Point::new(10, 0));
        assert!(point_is_left_of_line(Point::new(5, 3), a, b) > 0);
        assert!(point_is_left_of_line(Point::new(5, -3), a, b) < 0);
        assert_eq!(point_is_left_of_line(Point::new(50, 0), a, b), 0);
    }

    #[test]
    fn closest_point_is_clamped() {
        let s = seg(0, 0, 100, 0);
        assert_eq!(closest_on_segment(Point::new(-10, 5), s), Point::new(0, 0));
        assert_eq!(closest_on_segment(Point::new(150, 5), s), Point::new(100, 0));
        assert_eq!(closest_on_segment(Point::new(40, -5), s), Point::new(40, 0));
        let dot_seg = seg(3, 3, 3, 3);
        assert_eq!(closest_on_segment(Point::new(9, 9), dot_seg), Point::new(3, 3));
    }

    #[test]
    fn closest_point_far_from_origin() {
        let k: i64 = 1 << 42;
        let s = seg(-k, -k, k, k);
        assert_eq!(closest_on_segment(Point::new(k, -k), s), Point::new(0, 0));
        assert_eq!(closest_on_segment(Point::new(k, k - 2), s), Point::new(k - 1, k - 1));
    }

    #[test]
    fn squared_distance_to_line() {
        let (a, b) = (Point::new(0, 0), Point::new(30, 40));
        assert_eq!(dist2_from_line(Point::new(40, -30), a, b), 2500);
        assert_eq!(dist2_from_line(Point::new(60, 80), a, b), 0);
        assert_eq!(dist2_from_line(Point::new(3, 4), a, a), 25);
    }
}
