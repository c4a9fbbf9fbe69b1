//! Integer point and segment types plus the vector primitives the kernel builds on.
//!
//! - `Coord`: coordinate/length unit (fixed point, `i64`).
//! - `Wide`: accumulator for products of two coordinates (`i128`); every dot
//!   product, determinant and squared length is formed in it.
//! - `Point`: `nalgebra::Vector2<Coord>`; arithmetic comes from nalgebra,
//!   scalar division truncates toward zero.
//! - `LineSegment`: directed `from → to`.
//!
//! Narrowing back to `Coord` happens only after the wide comparison or root.
//! Within [`COORD_LIMIT`] every intermediate is exact. Past it, the products of
//! three coordinates in [`mul_div`] fall back to `f64` instead of overflowing.

use nalgebra::Vector2;

/// Fixed-point coordinate and distance unit.
pub type Coord = i64;
/// Wide accumulator for coordinate products.
pub type Wide = i128;
/// 2D integer point / vector.
pub type Point = Vector2<Coord>;

/// Largest coordinate magnitude for which every kernel operation stays exact.
pub const COORD_LIMIT: Coord = 1 << 30;

#[inline]
pub(crate) fn widen(p: Point) -> Vector2<Wide> {
    p.map(Wide::from)
}

#[inline]
pub(crate) fn narrow(p: Vector2<Wide>) -> Point {
    p.map(|c| c as Coord)
}

/// Dot product, formed in `Wide`.
#[inline]
pub fn dot(a: Point, b: Point) -> Wide {
    let (a, b) = (widen(a), widen(b));
    a.x * b.x + a.y * b.y
}

/// 2D determinant `a.x*b.y - a.y*b.x`; positive when `b` turns left of `a`.
#[inline]
pub fn cross(a: Point, b: Point) -> Wide {
    let (a, b) = (widen(a), widen(b));
    a.x * b.y - a.y * b.x
}

/// Squared length.
#[inline]
pub fn v_size2(a: Point) -> Wide {
    dot(a, a)
}

/// Length, truncated to a whole coordinate.
///
/// Only vectors with both components near `Coord::MAX` are too long to fit.
#[inline]
pub fn v_size(a: Point) -> Coord {
    let size = isqrt(v_size2(a));
    debug_assert!(size <= Wide::from(Coord::MAX), "length of {a:?} exceeds Coord");
    size as Coord
}

/// Floor of the square root; non-positive input yields 0.
pub fn isqrt(v: Wide) -> Wide {
    if v <= 0 {
        return 0;
    }
    // f64 gets within a few units; settle the rest exactly.
    let mut r = (v as f64).sqrt() as Wide;
    while r.checked_mul(r).map_or(true, |sq| sq > v) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= v) {
        r += 1;
    }
    r
}

/// `a` rescaled to length `len` along its own direction.
///
/// Lets callers step a given distance along `a` without going through a unit
/// vector. A vector shorter than one unit has no usable direction and maps to
/// `(len, 0)`.
#[inline]
pub fn resize(a: Point, len: Coord) -> Point {
    let size = v_size(a);
    if size < 1 {
        return Point::new(len, 0);
    }
    mul_div(a, Wide::from(len), Wide::from(size))
}

/// `v * num / den` per component, truncating toward zero.
///
/// Exact while `v * num` fits in `Wide`. Beyond that the ratio is taken in
/// `f64`, which keeps the magnitude but may be off in the last units. Results
/// outside `Coord` saturate.
pub fn mul_div(v: Point, num: Wide, den: Wide) -> Point {
    debug_assert!(den != 0, "mul_div by zero");
    v.map(|c| match Wide::from(c).checked_mul(num) {
        Some(n) => saturate(n / den),
        None => (c as f64 * (num as f64 / den as f64)) as Coord,
    })
}

/// Like [`mul_div`], rounding each component to the nearest integer.
pub fn mul_div_round(v: Point, num: Wide, den: Wide) -> Point {
    debug_assert!(den != 0, "mul_div_round by zero");
    v.map(|c| match Wide::from(c).checked_mul(num) {
        Some(n) => saturate(div_round(n, den)),
        None => (c as f64 * (num as f64 / den as f64)).round() as Coord,
    })
}

/// Integer division rounding half away from zero.
fn div_round(n: Wide, d: Wide) -> Wide {
    let (q, r) = (n / d, n % d);
    if r.abs() >= d.abs() - r.abs() {
        q + n.signum() * d.signum()
    } else {
        q
    }
}

#[inline]
fn saturate(v: Wide) -> Coord {
    v.clamp(Wide::from(Coord::MIN), Wide::from(Coord::MAX)) as Coord
}

/// Directed line segment `from → to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
    /// Direction vector `to - from`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.to - self.from
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
    #[inline]
    pub fn length(&self) -> Coord {
        v_size(self.vector())
    }
    #[inline]
    pub fn length2(&self) -> Wide {
        v_size2(self.vector())
    }
}
