//! Rule-firing tallies over captured proof traces.

use crate::domain::constants::SUCCESS_SUFFIX;
use crate::domain::models::{RuleCount, RuleCountEntry};
use crate::services::dispatcher::dispatch;
use crate::services::planner::{has_extension, relative_files};
use crate::services::priority::lower_current_thread;
use crate::services::rules::{extract_rule_name, ExtractMode};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn count_rules_in_text(text: &str) -> RuleCount {
    let mut counts = RuleCount::new();
    for line in text.lines() {
        if let Some(rule) = extract_rule_name(line.trim_end(), ExtractMode::ProofTrace) {
            *counts.entry(rule.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Runs on a worker thread, which it drops to background priority first.
pub fn count_rules_in_file(path: &Path) -> anyhow::Result<RuleCount> {
    lower_current_thread();
    let raw = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(count_rules_in_text(&String::from_utf8_lossy(&raw)))
}

/// Adds `other` into `into`; keys missing on either side count as zero.
pub fn merge_counts(into: &mut RuleCount, other: RuleCount) {
    for (rule, n) in other {
        *into.entry(rule).or_insert(0) += n;
    }
}

/// Every success artifact under `root`, as full paths.
pub fn trace_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let ext = SUCCESS_SUFFIX.trim_start_matches('.');
    Ok(relative_files(root, |p| has_extension(p, ext))?
        .into_iter()
        .map(|rel| root.join(rel))
        .collect())
}

/// Counts per file on `threads` workers, then reduces into one tally.
pub fn aggregate_traces(root: &Path, threads: usize) -> anyhow::Result<RuleCount> {
    let files = trace_files(root)?;
    tracing::info!(files = files.len(), threads, root = %root.display(), "counting rules");
    let partials = dispatch(&files, threads, |path| count_rules_in_file(path))?;
    Ok(partials.into_iter().fold(RuleCount::new(), |mut acc, part| {
        merge_counts(&mut acc, part);
        acc
    }))
}

pub fn sorted_entries(counts: &RuleCount) -> Vec<RuleCountEntry> {
    counts
        .iter()
        .map(|(rule, count)| RuleCountEntry {
            rule: rule.clone(),
            count: *count,
        })
        .collect()
}
