//! Calculator operators and arithmetic.
//!
//! Defines the five operator buttons and the pure `combine` step that folds
//! the next operand into a running value. Division by zero is defined to
//! yield `0` rather than an error or infinity; the engine is total and this
//! is its one deliberate arithmetic quirk.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the five operator buttons on the keypad.
///
/// `Equals` closes out a calculation; the other four are binary operations
/// applied left-to-right with no precedence.
///
/// # Example
///
/// ```rust
/// use reckoner::core::Op;
///
/// assert_eq!(Op::Add.combine(5.0, 3.0), 8.0);
/// assert_eq!(Op::Divide.combine(7.0, 0.0), 0.0); // never NaN/inf
/// assert_eq!(Op::Multiply.to_string(), "*");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Op {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`, keypad `×`)
    Multiply,
    /// Division (`/`, keypad `÷`)
    Divide,
    /// Equals (`=`), completing the pending calculation
    Equals,
}

impl Op {
    /// The ASCII symbol used in equation and history text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
        }
    }

    /// Fold `input` into the running value `acc`.
    ///
    /// This is a pure, total function. Dividing by zero yields `0.0`
    /// exactly. `Equals` combines to `input` unchanged; it is never stored
    /// as a pending operation, so that arm only matters for totality.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::core::Op;
    ///
    /// assert_eq!(Op::Subtract.combine(10.0, 4.0), 6.0);
    /// assert_eq!(Op::Divide.combine(9.0, 3.0), 3.0);
    /// assert_eq!(Op::Divide.combine(9.0, 0.0), 0.0);
    /// assert_eq!(Op::Equals.combine(9.0, 3.0), 3.0);
    /// ```
    pub fn combine(&self, acc: f64, input: f64) -> f64 {
        match self {
            Self::Add => acc + input,
            Self::Subtract => acc - input,
            Self::Multiply => acc * input,
            Self::Divide => {
                if input != 0.0 {
                    acc / input
                } else {
                    0.0
                }
            }
            Self::Equals => input,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a character does not name an operator button.
///
/// This is the only fallible surface in the crate; it exists for frontends
/// that map raw key or button input onto [`Op`].
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("unrecognized operator: {0:?}")]
pub struct UnknownOp(pub char);

impl TryFrom<char> for Op {
    type Error = UnknownOp;

    /// Parse an operator button character.
    ///
    /// Accepts the unicode glyphs a keypad typically shows (`×`, `÷`) as
    /// well as the ASCII forms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::core::Op;
    ///
    /// assert_eq!(Op::try_from('+'), Ok(Op::Add));
    /// assert_eq!(Op::try_from('÷'), Ok(Op::Divide));
    /// assert!(Op::try_from('%').is_err());
    /// ```
    fn try_from(c: char) -> Result<Self, UnknownOp> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' | '×' => Ok(Self::Multiply),
            '/' | '÷' => Ok(Self::Divide),
            '=' => Ok(Self::Equals),
            other => Err(UnknownOp(other)),
        }
    }
}

/// Format a numeric value for the display and for equation text.
///
/// Integral values print without a fractional part and negative zero is
/// normalized to `"0"`, matching how the display is expected to read.
///
/// # Example
///
/// ```rust
/// use reckoner::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0, which would otherwise render with a sign
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_applies_each_operator() {
        assert_eq!(Op::Add.combine(5.0, 3.0), 8.0);
        assert_eq!(Op::Subtract.combine(5.0, 3.0), 2.0);
        assert_eq!(Op::Multiply.combine(5.0, 3.0), 15.0);
        assert_eq!(Op::Divide.combine(6.0, 3.0), 2.0);
    }

    #[test]
    fn divide_by_zero_yields_zero() {
        assert_eq!(Op::Divide.combine(7.0, 0.0), 0.0);
        assert_eq!(Op::Divide.combine(-7.0, 0.0), 0.0);
        assert_eq!(Op::Divide.combine(0.0, 0.0), 0.0);
    }

    #[test]
    fn equals_combines_to_input() {
        assert_eq!(Op::Equals.combine(5.0, 3.0), 3.0);
    }

    #[test]
    fn display_matches_symbol() {
        for op in [Op::Add, Op::Subtract, Op::Multiply, Op::Divide, Op::Equals] {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn try_from_accepts_keypad_glyphs() {
        assert_eq!(Op::try_from('×'), Ok(Op::Multiply));
        assert_eq!(Op::try_from('÷'), Ok(Op::Divide));
        assert_eq!(Op::try_from('='), Ok(Op::Equals));
    }

    #[test]
    fn try_from_rejects_non_operators() {
        assert_eq!(Op::try_from('7'), Err(UnknownOp('7')));
        assert_eq!(Op::try_from('%'), Err(UnknownOp('%')));
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(20.0), "20");
    }

    #[test]
    fn format_number_keeps_fractions() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn format_number_normalizes_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(Op::Multiply.combine(-5.0, 0.0)), "0");
    }

    #[test]
    fn op_serializes_correctly() {
        let op = Op::Divide;
        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(op, deserialized);
    }
}
