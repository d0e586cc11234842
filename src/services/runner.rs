//! One solver run per work item, routed to a `.out` or `.err` artifact.

use crate::domain::constants::SOLVER_FLAGS;
use crate::domain::models::{ItemOutcome, ProcessInvocation, ProcessResult, WorkItem};
use crate::services::priority::lower_current_thread;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("failed to launch solver {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write artifact {}: {source}", .path.display())]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to remove stale artifact {}: {source}", .path.display())]
    RemoveStale {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The fixed part of every solver command line.
#[derive(Debug, Clone)]
pub struct SolverCommand {
    pub binary: PathBuf,
    pub timeout_ms: u64,
}

impl SolverCommand {
    pub fn new(binary: impl Into<PathBuf>, timeout_ms: u64) -> Self {
        Self {
            binary: binary.into(),
            timeout_ms,
        }
    }

    /// Binary, proof flags and time limit; the input file goes last.
    pub fn argv_stem(&self) -> Vec<String> {
        let mut argv = vec![self.binary.to_string_lossy().into_owned()];
        argv.extend(SOLVER_FLAGS.iter().map(|f| f.to_string()));
        argv.push(format!("--tlimit={}", self.timeout_ms));
        argv
    }

    pub fn invocation(&self, item: &WorkItem) -> ProcessInvocation {
        ProcessInvocation {
            argv: self.argv_stem(),
            input_file: item.input_path(),
            timeout_ms: self.timeout_ms,
        }
    }

    /// Shell-style rendering used in the batch banner.
    pub fn display(&self) -> String {
        format!("$ {} $IN > $OUT", self.argv_stem().join(" "))
    }
}

/// Runs the solver on `item` and records the result on disk.
///
/// A non-zero exit is an ordinary outcome. A solver that cannot be launched
/// is an error, as are filesystem failures while recording; either one
/// leaves the item without an artifact so the next run picks it up again.
pub fn run_item(solver: &SolverCommand, item: &WorkItem) -> Result<ItemOutcome, RunError> {
    lower_current_thread();

    let stem = item.output_stem();
    if let Some(parent) = stem.parent() {
        std::fs::create_dir_all(parent).map_err(|source| RunError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let invocation = solver.invocation(item);
    let result = execute(&invocation).map_err(|source| {
        tracing::error!(
            input = %invocation.input_file.display(),
            solver = %solver.binary.display(),
            error = %source,
            "solver could not be launched"
        );
        RunError::Spawn {
            program: solver.binary.display().to_string(),
            source,
        }
    })?;

    record_result(item, &result)
}

pub fn execute(invocation: &ProcessInvocation) -> std::io::Result<ProcessResult> {
    let (program, args) = invocation
        .argv
        .split_first()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty argv"))?;
    tracing::debug!(
        input = %invocation.input_file.display(),
        timeout_ms = invocation.timeout_ms,
        "running solver"
    );
    let output = Command::new(program)
        .args(args)
        .arg(&invocation.input_file)
        .stdin(Stdio::null())
        .output()?;
    Ok(ProcessResult {
        exit_code: exit_code(output.status),
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// Exit code, or the negated signal number when the child was killed.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

/// Writes exactly one artifact for `result` and removes the other kind.
pub fn record_result(item: &WorkItem, result: &ProcessResult) -> Result<ItemOutcome, RunError> {
    let (written, stale, outcome) = if result.exit_code == 0 {
        let path = item.success_path();
        write_artifact(&path, &normalize_line_endings(&result.stdout))?;
        (path, item.failure_path(), ItemOutcome::Succeeded)
    } else {
        let path = item.failure_path();
        write_artifact(&path, &failure_report(&result.stderr, result.exit_code))?;
        tracing::warn!(
            input = %item.relative_path.display(),
            exit_code = result.exit_code,
            "solver failed"
        );
        (
            path,
            item.success_path(),
            ItemOutcome::Failed {
                exit_code: result.exit_code,
            },
        )
    };
    remove_if_exists(&stale)?;
    tracing::debug!(artifact = %written.display(), "recorded");
    Ok(outcome)
}

/// Solver output uses CRLF; artifacts are stored with plain LF.
pub fn normalize_line_endings(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).replace("\r\n", "\n")
}

/// Normalized stderr followed by the exit code on its own line.
pub fn failure_report(stderr: &[u8], exit_code: i32) -> String {
    let mut report = normalize_line_endings(stderr);
    if !report.is_empty() && !report.ends_with('\n') {
        report.push('\n');
    }
    report.push_str(&exit_code.to_string());
    report.push('\n');
    report
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), RunError> {
    std::fs::write(path, contents).map_err(|source| RunError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_if_exists(path: &Path) -> Result<(), RunError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(RunError::RemoveStale {
            path: path.to_path_buf(),
            source,
        }),
    }
}
