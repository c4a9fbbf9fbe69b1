use std::f64::consts::TAU;

use crate::types::{cross, dot, Coord, Point, Wide};

/// Angle at `b` between rays `b→a` and `b→c`, taken on the left-hand side of
/// the path `a → b → c`.
///
/// Computed as `-atan2(ba × bc, ba · bc)` wrapped into `[0, 2π)`: a straight
/// continuation gives `π`, a right turn more than `π`, a left turn less.
/// Coincident inputs give a meaningless angle; callers must not pass `a == b`
/// or `c == b`.
pub fn angle_left(a: Point, b: Point, c: Point) -> f64 {
    let ba = a - b;
    let bc = c - b;
    let det = cross(ba, bc) as f64;
    let dott = dot(ba, bc) as f64;
    let angle = -det.atan2(dott);
    if angle >= 0.0 {
        return angle;
    }
    let wrapped = TAU + angle;
    // a negative angle too small to register against 2π
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Area of the triangle `(origin, a, b)`: `|a × b| / 2`, never negative.
///
/// Fits in `Coord` for coordinates within `COORD_LIMIT`; far beyond it the area
/// itself is not representable.
#[inline]
pub fn triangle_area(a: Point, b: Point) -> Coord {
    let area = cross(a, b).abs() / 2;
    debug_assert!(area <= Wide::from(Coord::MAX), "triangle area exceeds Coord");
    area as Coord
}
