//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep work-item, outcome and report structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — work items, process records, summaries, configs.
//! - `constants.rs` — solver flags, artifact suffixes, defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or process side effects
//! beyond pure path arithmetic.
//!
//! ## Compatibility note
//! `TraceSummary` and `RuleCount` are emitted by `--json`; keep them in sync
//! with `docs/contracts/*`.

pub mod constants;
pub mod models;
