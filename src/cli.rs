use crate::domain::constants::{
    CVC5_ENV, DEFAULT_CVC5_PATH, DEFAULT_PROBLEM_EXTENSION, DEFAULT_TIMEOUT_MS,
};
use clap::Parser;
use std::path::{Path, PathBuf};

const MODES_HELP: &str = "Modes:
  read-rules       Read rules from -f <rewrite source> and print them sorted
  read-sheets      Read the RARE column of -f <rule sheet csv> and print it sorted
  read-counts      Map rule counts from -f <count listing> onto the rows of -a <rule sheet csv>
  trace            Run cvc5 on every problem under -f and store traces under -o
  trace-count      Count rule occurrences in traces (-f) produced by trace
  make-regression  Pair problems under -f with traces under -a into regression cases under -o";

#[derive(Parser, Debug)]
#[command(
    name = "rulestat",
    version,
    about = "Runs cvc5 over problem sets and tabulates rewrite-rule usage",
    after_help = MODES_HELP
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(help = "Mode of execution (see Modes below)")]
    pub mode: String,
    #[arg(short = 'f', long, help = "Input file or directory")]
    pub file: Option<PathBuf>,
    #[arg(short = 'a', long, help = "Auxiliary file/directory")]
    pub auxiliary: Option<PathBuf>,
    #[arg(short = 'o', long, help = "Output directory")]
    pub output: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS, help = "Solver time limit (milliseconds)")]
    pub timeout: u64,
    #[arg(long, env = CVC5_ENV, default_value = DEFAULT_CVC5_PATH, help = "cvc5 path")]
    pub cvc5: PathBuf,
    #[arg(long, default_value_t = 0, help = "Number of worker threads (0 = auto)")]
    pub threads: usize,
    #[arg(long = "ext", default_value = DEFAULT_PROBLEM_EXTENSION, help = "Problem file extension")]
    pub extension: String,
    #[arg(long, help = "Run inputs again whose previous attempt left a .err artifact")]
    pub retry_failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ReadRules,
    ReadSheets,
    ReadCounts,
    Trace,
    TraceCount,
    MakeRegression,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::ReadRules,
        Mode::ReadSheets,
        Mode::ReadCounts,
        Mode::Trace,
        Mode::TraceCount,
        Mode::MakeRegression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::ReadRules => "read-rules",
            Mode::ReadSheets => "read-sheets",
            Mode::ReadCounts => "read-counts",
            Mode::Trace => "trace",
            Mode::TraceCount => "trace-count",
            Mode::MakeRegression => "make-regression",
        }
    }

    /// Accepts the canonical name and the underscore spelling.
    pub fn from_name(raw: &str) -> Option<Mode> {
        let normalized = raw.replace('_', "-");
        Mode::ALL.into_iter().find(|m| m.name() == normalized)
    }
}

impl Cli {
    pub fn input(&self) -> anyhow::Result<&Path> {
        required(self.file.as_deref(), "-f/--file")
    }

    pub fn aux(&self) -> anyhow::Result<&Path> {
        required(self.auxiliary.as_deref(), "-a/--auxiliary")
    }

    pub fn output_dir(&self) -> anyhow::Result<&Path> {
        required(self.output.as_deref(), "-o/--output")
    }
}

fn required<'a>(value: Option<&'a Path>, flag: &str) -> anyhow::Result<&'a Path> {
    match value {
        Some(p) if !p.as_os_str().is_empty() => Ok(p),
        _ => anyhow::bail!("missing required argument {}", flag),
    }
}
