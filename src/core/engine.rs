//! The calculator reducer and its imperative shell.
//!
//! [`step`] is the pure core: it maps `(state, action)` to a new state plus
//! an optional completed-calculation summary. [`Calculator`] is the shell
//! that owns the current state and records summaries into [`History`].

use super::history::{History, HistoryEntry};
use super::op::{format_number, Op};
use super::state::CalcState;
use serde::{Deserialize, Serialize};

/// One button press.
///
/// Every keypad button maps to exactly one action. Actions carry no state;
/// they are plain values, so a session is just a fold of actions over the
/// initial state.
///
/// # Example
///
/// ```rust
/// use reckoner::core::{step, Action, CalcState, Op};
///
/// let keys = [
///     Action::Digit(5),
///     Action::Operation(Op::Add),
///     Action::Digit(3),
///     Action::Operation(Op::Equals),
/// ];
///
/// let outcome = keys
///     .iter()
///     .fold(step(&CalcState::new(), Action::Clear), |acc, &a| step(&acc.state, a));
///
/// assert_eq!(outcome.state.display, "8");
/// assert_eq!(outcome.completed.as_deref(), Some("5 + 3 = 8"));
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, `0`-`9`
    Digit(u8),
    /// The `.` key
    DecimalPoint,
    /// The `C` key; resets state, never history
    Clear,
    /// The `±` key
    ToggleSign,
    /// One of the operator keys, including `=`
    Operation(Op),
}

/// Result of one pure transition.
///
/// `completed` carries the summary text of a finished calculation; it is
/// `Some` only when `=` resolves a pending operation. The caller decides
/// how to record it.
#[derive(Clone, PartialEq, Debug)]
pub struct Outcome {
    /// The replacement state
    pub state: CalcState,
    /// Summary of a calculation completed by this transition, if any
    pub completed: Option<String>,
}

impl Outcome {
    fn state_only(state: CalcState) -> Self {
        Self {
            state,
            completed: None,
        }
    }
}

/// Apply one action to a state, producing the next state.
///
/// This is a pure, total function: every action is accepted and mapped to a
/// defined transition. Digits above 9 are coerced modulo 10 rather than
/// rejected.
pub fn step(state: &CalcState, action: Action) -> Outcome {
    match action {
        Action::Digit(d) => Outcome::state_only(input_digit(state, d % 10)),
        Action::DecimalPoint => Outcome::state_only(input_decimal_point(state)),
        Action::Clear => Outcome::state_only(CalcState::default()),
        Action::ToggleSign => Outcome::state_only(toggle_sign(state)),
        Action::Operation(op) => apply_operation(state, op),
    }
}

fn input_digit(state: &CalcState, digit: u8) -> CalcState {
    let mut next = state.clone();
    if state.awaiting_fresh_entry {
        next.display = digit.to_string();
        next.awaiting_fresh_entry = false;
    } else if state.display == "0" {
        next.display = digit.to_string();
    } else {
        next.display.push((b'0' + digit) as char);
    }
    next
}

fn input_decimal_point(state: &CalcState) -> CalcState {
    let mut next = state.clone();
    if state.awaiting_fresh_entry {
        next.display = "0.".to_string();
        next.awaiting_fresh_entry = false;
    } else if !state.has_decimal_point() {
        next.display.push('.');
    }
    next
}

fn toggle_sign(state: &CalcState) -> CalcState {
    let mut next = state.clone();
    if state.display != "0" {
        next.display = match state.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", state.display),
        };
    }
    next
}

/// The central transition: operator and equals handling.
///
/// With no chain active the displayed value is captured as the first
/// operand. With a pending operation the displayed value is folded into the
/// running result; `=` then closes the calculation and emits its summary,
/// while any other operator keeps the chain going left-to-right. Pressing
/// `=` with no pending operation captures the operand without starting a
/// chain.
fn apply_operation(state: &CalcState, op: Op) -> Outcome {
    let mut next = state.clone();
    let mut completed = None;
    let current = state.display_value();

    if state.previous_value.is_none() {
        next.previous_value = Some(current);
        next.equation = format!("{} {}", format_number(current), op);
    } else if let Some(pending) = state.pending_op {
        let previous = state.previous_value.unwrap_or(0.0);
        let result = pending.combine(previous, current);

        next.display = format_number(result);
        next.previous_value = Some(result);

        if op == Op::Equals {
            completed = Some(format!(
                "{} {} = {}",
                state.equation,
                format_number(current),
                format_number(result)
            ));
            next.equation.clear();
            next.previous_value = None;
            next.pending_op = None;
            next.awaiting_fresh_entry = true;
        } else {
            next.equation = format!("{} {}", format_number(result), op);
        }
    }

    if op != Op::Equals {
        next.awaiting_fresh_entry = true;
        next.pending_op = Some(op);
    }

    Outcome {
        state: next,
        completed,
    }
}

/// A calculator session: current state plus completed-calculation history.
///
/// The imperative shell around [`step`]. Each method applies one action and
/// records any completed calculation. Rendering layers consume the read
/// accessors only and stay independent of one another.
///
/// # Example
///
/// ```rust
/// use reckoner::core::{Calculator, Op};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(7);
/// calc.apply_operation(Op::Divide);
/// calc.input_digit(0);
/// calc.apply_operation(Op::Equals);
///
/// // division by zero is defined to yield 0
/// assert_eq!(calc.display(), "0");
/// assert_eq!(calc.history().latest().map(|e| e.summary.as_str()), Some("7 / 0 = 0"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Calculator {
    state: CalcState,
    history: History,
}

impl Calculator {
    /// Create a calculator in the initial state with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply any action.
    pub fn apply(&mut self, action: Action) {
        let outcome = step(&self.state, action);
        self.state = outcome.state;
        if let Some(summary) = outcome.completed {
            self.history = self.history.record(HistoryEntry::new(summary));
        }
    }

    /// Press a digit key. Values above 9 are coerced modulo 10.
    pub fn input_digit(&mut self, digit: u8) {
        self.apply(Action::Digit(digit));
    }

    /// Press the `.` key.
    pub fn input_decimal_point(&mut self) {
        self.apply(Action::DecimalPoint);
    }

    /// Press `C`: reset the state. History is untouched.
    pub fn clear(&mut self) {
        self.apply(Action::Clear);
    }

    /// Press `±`: flip the sign of the displayed number. No-op on `"0"`.
    pub fn toggle_sign(&mut self) {
        self.apply(Action::ToggleSign);
    }

    /// Press an operator key, including `=`.
    pub fn apply_operation(&mut self, op: Op) {
        self.apply(Action::Operation(op));
    }

    /// Empty the history log. This is the presentation-level "clear
    /// history" action; `C` never does this.
    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
    }

    /// The displayed numeric text.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// The in-progress equation text shown above the display.
    pub fn equation(&self) -> &str {
        &self.state.equation
    }

    /// The full state record.
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }
}
