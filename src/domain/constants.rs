/// Default solver location when neither `--cvc5` nor `$CVC5` is given.
pub const DEFAULT_CVC5_PATH: &str = "build/bin/cvc5";

/// Environment variable consulted for the solver location.
pub const CVC5_ENV: &str = "CVC5";

pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

pub const DEFAULT_PROBLEM_EXTENSION: &str = "smt2";

/// Flags passed to the solver ahead of `--tlimit` and the input file.
pub const SOLVER_FLAGS: [&str; 5] = [
    "--produce-proofs",
    "--proof-granularity=dsl-rewrite",
    "--dump-proofs",
    "--proof-format-mode=alethe",
    "--dag-thres=0",
];

pub const SUCCESS_SUFFIX: &str = ".out";
pub const FAILURE_SUFFIX: &str = ".err";

/// Cores kept free when the worker count is auto-detected.
pub const RESERVED_CORES: usize = 2;

/// Niceness applied to worker threads and inherited by solver children.
pub const WORKER_NICENESS: i32 = 19;

/// Column of the rule sheet that holds canonical rule names.
pub const RULE_COLUMN: &str = "RARE";

/// Marker present on every proof step produced by a rewrite rule.
pub const ALL_SIMPLIFY_MARKER: &str = ":rule all_simplify";

/// Problem lines dropped when building regression inputs.
pub const ASSERT_PREFIX: &str = "(assert";
