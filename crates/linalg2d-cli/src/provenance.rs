//! Provenance sidecars for batch outputs.
//!
//! Every artifact `foo.json` gets a `foo.provenance.json` next to it recording
//! the code revision, kernel version, the call site that wrote it, the run
//! parameters, and the outputs.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run description stored in a sidecar.
pub struct Provenance {
    pub params: Value,
    pub outputs: Vec<PathBuf>,
}

impl Provenance {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            outputs: Vec::new(),
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(path.into());
        self
    }

    /// The JSON block written to disk (and printed by `report`).
    #[track_caller]
    pub fn to_json(&self) -> Value {
        let callsite = Location::caller();
        json!({
            "code_rev": current_git_rev(),
            "kernel": linalg2d::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "params": self.params,
            "outputs": self
                .outputs
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        })
    }
}

/// Write `<artifact-stem>.provenance.json` beside `artifact`; returns its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, provenance: &Provenance) -> Result<PathBuf> {
    let doc = provenance.to_json();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating provenance dir {}", parent.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit the binary was built from, else the working tree's HEAD, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
