//! Service layer containing the batch pipeline and tabulation logic.
//!
//! ## Service map
//! - `rules.rs` — rule-name extraction (definition and proof-trace lines).
//! - `planner.rs` — input/output tree diff producing the work list.
//! - `runner.rs` — one solver invocation per item, `.out`/`.err` routing.
//! - `dispatcher.rs` — bounded worker pool, thread-count policy, progress.
//! - `priority.rs` — lowered scheduling priority for workers and children.
//! - `aggregate.rs` — per-file rule tallies and their reduction.
//! - `regression.rs` — regression case extraction from traces.
//! - `sheets.rs` — rule sheet CSV reading and derived count column.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Configuration arrives as arguments; nothing here reads the environment.

pub mod aggregate;
pub mod dispatcher;
pub mod output;
pub mod planner;
pub mod priority;
pub mod regression;
pub mod rules;
pub mod runner;
pub mod sheets;
