//! Kernel queries as data: one variant per kernel operation.
//!
//! Single-shot subcommands and JSON batch files both go through `Query`, so
//! caller contracts the kernel only debug-asserts are checked here once and
//! reported as errors instead of panics.

use anyhow::{bail, Result};
use linalg2d::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_TOLERANCE: Coord = 10;

fn default_tolerance() -> Coord {
    DEFAULT_TOLERANCE
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    AngleLeft {
        a: Point,
        b: Point,
        c: Point,
    },
    TriangleArea {
        a: Point,
        b: Point,
    },
    PointOnLineWithDist {
        p: Point,
        a: Point,
        b: Point,
        dist: Coord,
    },
    /// `a` must already be aligned with +x.
    SegmentsCollide {
        a: LineSegment,
        b: LineSegment,
    },
    Intersection {
        a: LineSegment,
        b: LineSegment,
    },
    AreParallel {
        a: LineSegment,
        b: LineSegment,
        #[serde(default = "default_tolerance")]
        tolerance: Coord,
    },
    AreCollinear {
        a: LineSegment,
        b: LineSegment,
        #[serde(default = "default_tolerance")]
        tolerance: Coord,
    },
    ProjectedLength {
        to_project: LineSegment,
        onto: LineSegment,
    },
    ProjectPoint {
        p: Point,
        onto: LineSegment,
    },
    ProjectSegment {
        segment: LineSegment,
        onto: LineSegment,
    },
    ClosestOnSegment {
        p: Point,
        segment: LineSegment,
    },
    PointIsLeftOfLine {
        p: Point,
        a: Point,
        b: Point,
    },
}

impl Query {
    pub fn name(&self) -> &'static str {
        match self {
            Query::AngleLeft { .. } => "angle_left",
            Query::TriangleArea { .. } => "triangle_area",
            Query::PointOnLineWithDist { .. } => "point_on_line_with_dist",
            Query::SegmentsCollide { .. } => "segments_collide",
            Query::Intersection { .. } => "intersection",
            Query::AreParallel { .. } => "are_parallel",
            Query::AreCollinear { .. } => "are_collinear",
            Query::ProjectedLength { .. } => "projected_length",
            Query::ProjectPoint { .. } => "project_point",
            Query::ProjectSegment { .. } => "project_segment",
            Query::ClosestOnSegment { .. } => "closest_on_segment",
            Query::PointIsLeftOfLine { .. } => "point_is_left_of_line",
        }
    }

    /// Every point and segment endpoint the query carries.
    fn points(&self) -> Vec<Point> {
        match *self {
            Query::AngleLeft { a, b, c } => vec![a, b, c],
            Query::TriangleArea { a, b } => vec![a, b],
            Query::PointOnLineWithDist { p, a, b, .. } | Query::PointIsLeftOfLine { p, a, b } => {
                vec![p, a, b]
            }
            Query::SegmentsCollide { a, b }
            | Query::Intersection { a, b }
            | Query::AreParallel { a, b, .. }
            | Query::AreCollinear { a, b, .. }
            | Query::ProjectedLength {
                to_project: a,
                onto: b,
            }
            | Query::ProjectSegment {
                segment: a,
                onto: b,
            } => vec![a.from, a.to, b.from, b.to],
            Query::ProjectPoint { p, onto: s } | Query::ClosestOnSegment { p, segment: s } => {
                vec![p, s.from, s.to]
            }
        }
    }

    /// Reject inputs outside the kernel's preconditions.
    pub fn validate(&self) -> Result<()> {
        let limit = COORD_LIMIT.unsigned_abs();
        if let Some(p) = self
            .points()
            .into_iter()
            .find(|p| p.x.unsigned_abs() > limit || p.y.unsigned_abs() > limit)
        {
            bail!("point ({}, {}) is outside ±{COORD_LIMIT}", p.x, p.y);
        }
        match self {
            Query::AngleLeft { a, b, c } => {
                if a == b || c == b {
                    bail!("angle_left needs a and c distinct from the vertex b");
                }
            }
            Query::PointOnLineWithDist { dist, .. } => {
                if *dist < 0 {
                    bail!("distance must be non-negative, got {dist}");
                }
            }
            Query::SegmentsCollide { a, .. } => {
                if (a.from.y - a.to.y).abs() >= 2 || a.from.x - 2 > a.to.x {
                    bail!("segment a must lie on a horizontal line pointing in +x");
                }
            }
            Query::ProjectedLength { onto, .. }
            | Query::ProjectPoint { onto, .. }
            | Query::ProjectSegment { onto, .. } => {
                if onto.length() == 0 {
                    bail!("cannot project onto a degenerate segment");
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate, then run the kernel operation and render its result as JSON.
    pub fn evaluate(&self) -> Result<Value> {
        self.validate()?;
        let result = match *self {
            Query::AngleLeft { a, b, c } => {
                let angle = angle_left(a, b, c);
                json!({ "radians": angle, "degrees": angle.to_degrees() })
            }
            Query::TriangleArea { a, b } => json!(triangle_area(a, b)),
            Query::PointOnLineWithDist { p, a, b, dist } => {
                match point_on_line_with_dist(p, a, b, dist) {
                    Some(r) => json!({ "found": true, "point": r }),
                    None => json!({ "found": false }),
                }
            }
            Query::SegmentsCollide { a, b } => json!(segments_collide(a.from, a.to, b.from, b.to)),
            Query::Intersection { a, b } => {
                // the kernel answers parallel lines with an endpoint centroid
                let exact = cross(a.vector(), b.vector()) != 0;
                json!({ "point": intersection(a, b), "exact": exact })
            }
            Query::AreParallel { a, b, tolerance } => json!(are_parallel(a, b, tolerance)),
            Query::AreCollinear { a, b, tolerance } => json!(are_collinear(a, b, tolerance)),
            Query::ProjectedLength { to_project, onto } => {
                json!(projected_length(to_project, onto))
            }
            Query::ProjectPoint { p, onto } => json!(project_point(p, onto)),
            Query::ProjectSegment { segment, onto } => json!(project_segment(segment, onto)),
            Query::ClosestOnSegment { p, segment } => json!(closest_on_segment(p, segment)),
            Query::PointIsLeftOfLine { p, a, b } => wide(point_is_left_of_line(p, a, b)),
        };
        Ok(result)
    }
}

/// JSON numbers stop at 64 bits; wider values are emitted as strings.
fn wide(v: Wide) -> Value {
    match i64::try_from(v) {
        Ok(n) => json!(n),
        Err(_) => json!(v.to_string()),
    }
}
