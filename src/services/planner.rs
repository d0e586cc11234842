//! Work-list planning by diffing the input tree against the output tree.
//!
//! An input is done when any artifact for it exists under the output root.
//! Only path existence is consulted: artifact contents and timestamps are
//! never compared.

use crate::domain::constants::FAILURE_SUFFIX;
use crate::domain::models::WorkItem;
use anyhow::Context;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct WorkPlan {
    /// Number of inputs matching the selection, done or not.
    pub total: usize,
    pub items: Vec<WorkItem>,
}

impl WorkPlan {
    pub fn skipped(&self) -> usize {
        self.total - self.items.len()
    }
}

/// Relative paths of every file under `root` for which `keep` holds, sorted.
pub fn relative_files(root: &Path, keep: impl Fn(&Path) -> bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() || !keep(entry.path()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("{} escaped {}", entry.path().display(), root.display()))?;
        out.push(rel.to_path_buf());
    }
    Ok(out)
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|e| e == extension)
}

/// Relative input paths that already have an artifact under `output_root`.
///
/// Each artifact loses its last suffix (`x.smt2.out` -> `x.smt2`). With
/// `retry_failed`, failure artifacts are ignored so those inputs run again.
pub fn completed_inputs(
    output_root: &Path,
    retry_failed: bool,
) -> anyhow::Result<HashSet<PathBuf>> {
    let failure_ext = FAILURE_SUFFIX.trim_start_matches('.');
    let artifacts = relative_files(output_root, |p| {
        !(retry_failed && has_extension(p, failure_ext))
    })?;
    Ok(artifacts
        .into_iter()
        .map(|rel| rel.with_extension(""))
        .collect())
}

/// Creates `output_root` if needed and returns the inputs still to process.
pub fn plan_work(
    input_root: &Path,
    output_root: &Path,
    extension: &str,
    retry_failed: bool,
) -> anyhow::Result<WorkPlan> {
    std::fs::create_dir_all(output_root)
        .with_context(|| format!("failed to create output dir {}", output_root.display()))?;

    let inputs = relative_files(input_root, |p| has_extension(p, extension))?;
    let done = completed_inputs(output_root, retry_failed)?;
    let total = inputs.len();

    let items: Vec<WorkItem> = inputs
        .into_iter()
        .filter(|rel| !done.contains(rel))
        .map(|relative_path| WorkItem {
            relative_path,
            input_root: input_root.to_path_buf(),
            output_root: output_root.to_path_buf(),
        })
        .collect();

    tracing::info!(
        total,
        remaining = items.len(),
        input = %input_root.display(),
        output = %output_root.display(),
        "planned trace batch"
    );
    Ok(WorkPlan { total, items })
}
