//! Reckoner: a pure functional four-function calculator engine
//!
//! Reckoner implements the arithmetic state machine behind a classic
//! four-function calculator: digit entry, decimal entry, sign toggle,
//! left-to-right operation chaining, equals, and clear, plus an immutable
//! history log of completed calculations.
//!
//! The crate follows a "pure core, imperative shell" design. Every transition
//! is a pure `(state, action) -> state` function with no side effects; the
//! [`Calculator`](core::Calculator) wrapper is the thin shell that holds the
//! current state and records finished calculations into history. A rendering
//! layer (not part of this crate) binds buttons and labels to the action set
//! and re-reads the state after each press.
//!
//! # Core Concepts
//!
//! - **State**: a single [`CalcState`](core::CalcState) record replaced
//!   wholesale on every transition
//! - **Actions**: the five button families as a plain
//!   [`Action`](core::Action) enum
//! - **History**: immutable, most-recent-first log of completed calculations
//!
//! Transitions are total: there is no error state, and invalid input is
//! coerced rather than rejected. The one deliberate quirk is that division by
//! zero yields `0`, not an error or infinity.
//!
//! # Example
//!
//! ```rust
//! use reckoner::core::{Calculator, Op};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(5);
//! calc.apply_operation(Op::Add);
//! calc.input_digit(3);
//! calc.apply_operation(Op::Equals);
//!
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.history().latest().map(|e| e.summary.as_str()), Some("5 + 3 = 8"));
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{Action, CalcState, Calculator, History, HistoryEntry, Op, Outcome, UnknownOp};
