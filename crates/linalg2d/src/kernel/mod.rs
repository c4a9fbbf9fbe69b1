//! Integer 2D geometry kernel (pure functions over `Point` / `LineSegment`).
//!
//! Purpose
//! - Answer the small geometric questions path processing keeps asking:
//!   angles at a vertex, the point on a segment at a given distance, crossing
//!   and intersection of segments, parallel/collinear tests, projections.
//!
//! Conventions
//! - Exact integer comparisons wherever possible (signs, equality); tolerances
//!   only where a square root or an angle is involved.
//! - Products of coordinates are formed in `Wide` before comparing or rooting.
//! - "No answer" is `None`/`false`. Caller contracts (aligned input for the
//!   collision test, non-degenerate projection target) are `debug_assert!`s.
//! - Parallel lines in `intersection` yield the endpoint centroid, which is an
//!   approximation and not a point on both lines.

mod angle;
mod collide;
mod distance;
mod intersect;
mod parallel;
mod project;

pub use angle::{angle_left, triangle_area};
pub use collide::segments_collide;
pub use distance::point_on_line_with_dist;
pub use intersect::intersection;
pub use parallel::{are_collinear, are_parallel};
pub use project::{
    closest_on_segment, dist2_from_line, point_is_left_of_line, project_point, project_segment,
    projected_length,
};

#[cfg(test)]
mod tests;
