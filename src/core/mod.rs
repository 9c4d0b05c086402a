//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Operator definitions and arithmetic via [`Op`]
//! - The single state record [`CalcState`]
//! - The pure reducer [`step`] and its imperative shell [`Calculator`]
//! - Immutable history tracking via [`History`]
//!
//! All transition logic is pure (no side effects), following the
//! "pure core, imperative shell" philosophy.

mod engine;
mod history;
mod op;
mod state;

pub use engine::{step, Action, Calculator, Outcome};
pub use history::{History, HistoryEntry};
pub use op::{format_number, Op, UnknownOp};
pub use state::CalcState;
