//! Command-line literals for points (`X,Y`) and segments (`X,Y:X,Y`).

use anyhow::{bail, Context, Result};
use linalg2d::{Coord, LineSegment, Point};

pub fn point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected a point as X,Y, got {s:?}");
    };
    let x: Coord = x.trim().parse().with_context(|| format!("x coordinate of {s:?}"))?;
    let y: Coord = y.trim().parse().with_context(|| format!("y coordinate of {s:?}"))?;
    Ok(Point::new(x, y))
}

pub fn segment(s: &str) -> Result<LineSegment> {
    let Some((from, to)) = s.split_once(':') else {
        bail!("expected a segment as X,Y:X,Y, got {s:?}");
    };
    Ok(LineSegment::new(point(from)?, point(to)?))
}
