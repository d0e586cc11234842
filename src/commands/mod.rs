//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `tabulate.rs` — read-rules/read-sheets/read-counts.
//! - `trace.rs` — trace/trace-count/make-regression.
//!
//! ## Principles
//! - Resolve CLI inputs into explicit configs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod tabulate;
pub mod trace;

pub use tabulate::handle_tabulate_commands;
pub use trace::handle_trace_commands;
