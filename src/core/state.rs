//! The calculator state record.
//!
//! A single record holds everything the keypad mutates: the display text,
//! the in-progress equation text, the captured operand, the pending
//! operation, and the fresh-entry flag. Transitions replace the record
//! wholesale; there is no partial update.

use super::op::Op;
use serde::{Deserialize, Serialize};

/// Snapshot of the calculator between button presses.
///
/// `display` is always a valid decimal numeral (optionally one leading `-`
/// and at most one `.`) because it is only ever constructed by the engine
/// itself. `previous_value` and `pending_op` are set and cleared together,
/// except transiently when `=` is pressed with no chain active.
///
/// # Example
///
/// ```rust
/// use reckoner::core::CalcState;
///
/// let state = CalcState::default();
/// assert_eq!(state.display, "0");
/// assert_eq!(state.equation, "");
/// assert!(state.previous_value.is_none());
/// assert!(state.pending_op.is_none());
/// assert!(!state.awaiting_fresh_entry);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalcState {
    /// The numeric text currently shown
    pub display: String,
    /// Human-readable in-progress expression, e.g. `"5 +"`; empty when no
    /// operation is pending
    pub equation: String,
    /// Operand captured before the pending operation; `None` when no chain
    /// is active
    pub previous_value: Option<f64>,
    /// Operator awaiting its second operand
    pub pending_op: Option<Op>,
    /// When true, the next digit press starts a new number instead of
    /// appending to `display`
    pub awaiting_fresh_entry: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
            previous_value: None,
            pending_op: None,
            awaiting_fresh_entry: false,
        }
    }
}

impl CalcState {
    /// Create the initial state (`display == "0"`, nothing pending).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `display` as a number.
    ///
    /// Total by construction: the engine only ever writes well-formed
    /// numerals into `display`, so the fallback to `0.0` is unreachable in
    /// practice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::core::CalcState;
    ///
    /// let mut state = CalcState::new();
    /// state.display = "-3.5".to_string();
    /// assert_eq!(state.display_value(), -3.5);
    /// ```
    pub fn display_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Whether `display` already contains a decimal point.
    pub fn has_decimal_point(&self) -> bool {
        self.display.contains('.')
    }

    /// Whether an operation chain is active (a first operand was captured).
    pub fn is_chaining(&self) -> bool {
        self.previous_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_initial_state() {
        let state = CalcState::default();
        assert_eq!(state.display, "0");
        assert_eq!(state.equation, "");
        assert!(state.previous_value.is_none());
        assert!(state.pending_op.is_none());
        assert!(!state.awaiting_fresh_entry);
    }

    #[test]
    fn display_value_parses_display_text() {
        let mut state = CalcState::new();
        assert_eq!(state.display_value(), 0.0);

        state.display = "42".to_string();
        assert_eq!(state.display_value(), 42.0);

        state.display = "-3.5".to_string();
        assert_eq!(state.display_value(), -3.5);

        // a trailing point is still a valid numeral
        state.display = "7.".to_string();
        assert_eq!(state.display_value(), 7.0);
    }

    #[test]
    fn has_decimal_point_inspects_display() {
        let mut state = CalcState::new();
        assert!(!state.has_decimal_point());

        state.display = "0.".to_string();
        assert!(state.has_decimal_point());
    }

    #[test]
    fn is_chaining_tracks_previous_value() {
        let mut state = CalcState::new();
        assert!(!state.is_chaining());

        state.previous_value = Some(5.0);
        assert!(state.is_chaining());
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = CalcState::new();
        state.display = "3.5".to_string();
        state.equation = "2 +".to_string();
        state.previous_value = Some(2.0);
        state.pending_op = Some(Op::Add);
        state.awaiting_fresh_entry = false;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalcState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable_and_comparable() {
        let state = CalcState::new();
        let cloned = state.clone();
        assert_eq!(state, cloned);

        let mut other = state.clone();
        other.display = "1".to_string();
        assert_ne!(state, other);
    }
}
