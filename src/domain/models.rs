use crate::domain::constants::{FAILURE_SUFFIX, SUCCESS_SUFFIX};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Rule name to number of firings. Ordered so reports come out sorted.
pub type RuleCount = BTreeMap<String, u64>;

/// One input file queued for a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub relative_path: PathBuf,
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

impl WorkItem {
    pub fn input_path(&self) -> PathBuf {
        self.input_root.join(&self.relative_path)
    }

    /// Output location without an artifact suffix.
    pub fn output_stem(&self) -> PathBuf {
        self.output_root.join(&self.relative_path)
    }

    pub fn success_path(&self) -> PathBuf {
        append_suffix(&self.output_stem(), SUCCESS_SUFFIX)
    }

    pub fn failure_path(&self) -> PathBuf {
        append_suffix(&self.output_stem(), FAILURE_SUFFIX)
    }
}

/// `a/b.smt2` + `.out` => `a/b.smt2.out`; unlike `with_extension` this keeps
/// the existing extension.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[derive(Debug, Clone)]
pub struct ProcessInvocation {
    pub argv: Vec<String>,
    pub input_file: PathBuf,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Succeeded,
    /// Non-zero exit, or `-signal` when the child was killed.
    Failed { exit_code: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub total: usize,
    pub skipped: usize,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub threads: usize,
}

impl TraceSummary {
    pub fn record(&mut self, outcome: &ItemOutcome) {
        self.processed += 1;
        match outcome {
            ItemOutcome::Succeeded => self.succeeded += 1,
            ItemOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleCountEntry {
    pub rule: String,
    pub count: u64,
}

/// One rule-sheet row paired with its count; `None` when the rule never fired.
#[derive(Debug, Clone, Serialize)]
pub struct SheetCount {
    pub rule: String,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegressionSummary {
    pub cases: usize,
    pub threads: usize,
}

/// Everything the `trace` pipeline needs, resolved up front by the CLI layer.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub extension: String,
    pub solver: PathBuf,
    pub timeout_ms: u64,
    pub threads: usize,
    pub retry_failed: bool,
}

#[derive(Debug, Clone)]
pub struct RegressionConfig {
    pub input_root: PathBuf,
    pub trace_root: PathBuf,
    pub output_root: PathBuf,
    pub threads: usize,
}
