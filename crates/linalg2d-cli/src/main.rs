use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use linalg2d::{Coord, LineSegment, Point};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod parse;
mod provenance;
mod query;

use query::{Query, DEFAULT_TOLERANCE};

#[derive(Parser)]
#[command(name = "linalg2d")]
#[command(about = "Integer 2D geometry queries (point X,Y; segment X,Y:X,Y; e.g. --a=-3,4)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Angle at b on the left-hand side of the path a → b → c
    Angle {
        #[arg(long, value_parser = parse::point)]
        a: Point,
        #[arg(long, value_parser = parse::point)]
        b: Point,
        #[arg(long, value_parser = parse::point)]
        c: Point,
    },
    /// Area of the triangle (origin, a, b)
    Area {
        #[arg(long, value_parser = parse::point)]
        a: Point,
        #[arg(long, value_parser = parse::point)]
        b: Point,
    },
    /// Point on segment a–b at distance `dist` from p (closest to a)
    Dist {
        #[arg(long, value_parser = parse::point)]
        p: Point,
        #[arg(long, value_parser = parse::point)]
        a: Point,
        #[arg(long, value_parser = parse::point)]
        b: Point,
        #[arg(long)]
        dist: Coord,
    },
    /// Does b cross a? `a` must lie on a horizontal line pointing in +x
    Collide {
        #[arg(long, value_parser = parse::segment)]
        a: LineSegment,
        #[arg(long, value_parser = parse::segment)]
        b: LineSegment,
    },
    /// Intersection of the lines through a and b
    Intersect {
        #[arg(long, value_parser = parse::segment)]
        a: LineSegment,
        #[arg(long, value_parser = parse::segment)]
        b: LineSegment,
    },
    /// Parallel (or, with --collinear, collinear) test within a tolerance
    Parallel {
        #[arg(long, value_parser = parse::segment)]
        a: LineSegment,
        #[arg(long, value_parser = parse::segment)]
        b: LineSegment,
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: Coord,
        #[arg(long)]
        collinear: bool,
    },
    /// Project a point or a segment onto the line through `onto`
    Project {
        #[arg(long, value_parser = parse::point, conflicts_with = "segment")]
        point: Option<Point>,
        #[arg(long, value_parser = parse::segment)]
        segment: Option<LineSegment>,
        #[arg(long, value_parser = parse::segment)]
        onto: LineSegment,
    },
    /// Run a JSON query file and write answers plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let query = match cmd.action {
        Action::Angle { a, b, c } => Query::AngleLeft { a, b, c },
        Action::Area { a, b } => Query::TriangleArea { a, b },
        Action::Dist { p, a, b, dist } => Query::PointOnLineWithDist { p, a, b, dist },
        Action::Collide { a, b } => Query::SegmentsCollide { a, b },
        Action::Intersect { a, b } => Query::Intersection { a, b },
        Action::Parallel {
            a,
            b,
            tolerance,
            collinear,
        } => {
            if collinear {
                Query::AreCollinear { a, b, tolerance }
            } else {
                Query::AreParallel { a, b, tolerance }
            }
        }
        Action::Project {
            point,
            segment,
            onto,
        } => match (point, segment) {
            (Some(p), None) => Query::ProjectPoint { p, onto },
            (None, Some(segment)) => Query::ProjectSegment { segment, onto },
            _ => bail!("project needs exactly one of --point or --segment"),
        },
        Action::Batch { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "batch");
            batch::run(&input, &out)?;
            return Ok(());
        }
        Action::Report => return report(),
    };
    single(&query)
}

fn single(query: &Query) -> Result<()> {
    tracing::info!(op = query.name(), "query");
    let result = query.evaluate()?;
    let doc = serde_json::json!({ "op": query.name(), "result": result });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::Provenance::new(serde_json::json!({})).to_json();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
