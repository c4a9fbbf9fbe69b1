//! Numeric constants of the kernel (internal).
//!
//! Policy
//! - Fixed constants, not a runtime config. Callers that need a tolerance
//!   (parallel/collinear tests) pass it explicitly.

use crate::types::Coord;

/// Slack allowed by the axis-alignment assertions of the collision test.
pub(crate) const AXIS_ALIGN_SLACK: Coord = 2;
