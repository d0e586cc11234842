//! Regression cases: problem files stripped of assertions, paired with the
//! rewrite steps their trace recorded.

use crate::domain::constants::{ALL_SIMPLIFY_MARKER, ASSERT_PREFIX, SUCCESS_SUFFIX};
use crate::domain::models::{append_suffix, RegressionConfig, RegressionSummary, WorkItem};
use crate::services::dispatcher::dispatch;
use crate::services::planner::{has_extension, relative_files};
use crate::services::priority::lower_current_thread;
use anyhow::Context;
use std::path::Path;

/// One case per success artifact under `trace_root` (`p.smt2.out` -> `p.smt2`).
pub fn plan_cases(config: &RegressionConfig) -> anyhow::Result<Vec<WorkItem>> {
    let ext = SUCCESS_SUFFIX.trim_start_matches('.');
    Ok(relative_files(&config.trace_root, |p| has_extension(p, ext))?
        .into_iter()
        .map(|rel| WorkItem {
            relative_path: rel.with_extension(""),
            input_root: config.input_root.clone(),
            output_root: config.output_root.clone(),
        })
        .collect())
}

pub fn strip_assertions(problem: &str) -> String {
    problem
        .split_inclusive('\n')
        .filter(|line| !line.starts_with(ASSERT_PREFIX))
        .collect()
}

pub fn rewrite_steps(trace: &str) -> String {
    trace
        .split_inclusive('\n')
        .filter(|line| line.contains(ALL_SIMPLIFY_MARKER))
        .collect()
}

pub fn build_case(item: &WorkItem, trace_root: &Path) -> anyhow::Result<()> {
    lower_current_thread();
    let problem_path = item.input_path();
    let trace_path = append_suffix(&trace_root.join(&item.relative_path), SUCCESS_SUFFIX);
    let out_problem = item.output_stem();
    let out_trace = item.success_path();

    if let Some(parent) = out_problem.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let problem = std::fs::read_to_string(&problem_path)
        .with_context(|| format!("failed to read {}", problem_path.display()))?;
    std::fs::write(&out_problem, strip_assertions(&problem))
        .with_context(|| format!("failed to write {}", out_problem.display()))?;

    let trace = std::fs::read_to_string(&trace_path)
        .with_context(|| format!("failed to read {}", trace_path.display()))?;
    std::fs::write(&out_trace, rewrite_steps(&trace))
        .with_context(|| format!("failed to write {}", out_trace.display()))?;
    Ok(())
}

pub fn build_regressions(config: &RegressionConfig) -> anyhow::Result<RegressionSummary> {
    std::fs::create_dir_all(&config.output_root)
        .with_context(|| format!("failed to create {}", config.output_root.display()))?;
    let cases = plan_cases(config)?;
    tracing::info!(cases = cases.len(), threads = config.threads, "building regressions");
    dispatch(&cases, config.threads, |item| build_case(item, &config.trace_root))?;
    Ok(RegressionSummary {
        cases: cases.len(),
        threads: config.threads,
    })
}
