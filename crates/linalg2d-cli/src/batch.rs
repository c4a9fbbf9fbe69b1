//! JSON batch runs: `{"queries": [...]}` in, `[{"op", "result"}, ...]` out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::provenance::{write_sidecar, Provenance};
use crate::query::Query;

#[derive(Debug, Deserialize)]
pub struct QueryFile {
    pub queries: Vec<Query>,
}

#[derive(Debug, Serialize)]
pub struct Answer {
    pub op: &'static str,
    pub result: Value,
}

/// Evaluate every query in order; the first invalid one aborts the run.
pub fn evaluate_all(file: &QueryFile) -> Result<Vec<Answer>> {
    file.queries
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let result = q
                .evaluate()
                .with_context(|| format!("query #{i} ({})", q.name()))?;
            tracing::debug!(index = i, op = q.name(), %result, "query");
            Ok(Answer {
                op: q.name(),
                result,
            })
        })
        .collect()
}

/// Read `input`, write answers to `out` plus a provenance sidecar.
pub fn run(input: &Path, out: &Path) -> Result<usize> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let file: QueryFile = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing queries from {}", input.display()))?;
    let answers = evaluate_all(&file)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(out, serde_json::to_vec_pretty(&answers)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let provenance = Provenance::new(json!({
        "input": input.to_string_lossy(),
        "queries": answers.len(),
    }))
    .with_output(out);
    let sidecar = write_sidecar(out, &provenance)?;
    tracing::info!(
        queries = answers.len(),
        out = %out.display(),
        provenance = %sidecar.display(),
        "batch done"
    );
    Ok(answers.len())
}
