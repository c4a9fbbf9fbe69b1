//! Integer 2D geometry kernel for path and shape processing.
//!
//! Points carry fixed-point `i64` coordinates; every product of two
//! coordinates is formed in `i128`, so comparisons never see a truncated
//! intermediate. All operations are pure functions over `Copy` values and can
//! be called from any thread.
//!
//! Layout
//! - `types`: `Coord`, `Wide`, `Point`, `LineSegment` and the vector primitives
//!   (`dot`, `cross`, `v_size`, `resize`).
//! - `kernel`: angles, point-at-distance, collision, intersection,
//!   parallel/collinear tests, projections.

mod cfg;
pub mod kernel;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use kernel::{
    angle_left, are_collinear, are_parallel, closest_on_segment, dist2_from_line, intersection,
    point_is_left_of_line, point_on_line_with_dist, project_point, project_segment,
    projected_length, segments_collide, triangle_area,
};
pub use types::{Coord, LineSegment, Point, Wide, COORD_LIMIT};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::kernel::*;
    pub use crate::types::{
        cross, dot, resize, v_size, v_size2, Coord, LineSegment, Point, Wide, COORD_LIMIT,
    };
    pub use nalgebra::vector;
}
