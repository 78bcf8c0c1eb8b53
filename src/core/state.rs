//! # Calculator State
//!
//! The one value the engine works on. It is never mutated in place by the
//! engine: every action produces a new `CalculatorState`.
//!
//! ```text
//! CalculatorState
//! ├── current_operand: String          // being typed, a result, or "Error"
//! ├── previous_operand: Option<String> // captured left operand
//! ├── operation: Option<Operator>      // pending operator
//! └── overwrite: bool                  // next digit replaces current_operand
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::operator::Operator;

/// Sentinel stored in `current_operand` after a failed calculation.
pub const ERROR_OPERAND: &str = "Error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_operand: String,
    pub previous_operand: Option<String>,
    pub operation: Option<Operator>,
    pub overwrite: bool,
}

/// Coarse position in the state machine, derived from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh operand: initial state, after clear or after a result.
    Entry,
    /// Digits are being appended to `current_operand`.
    Accumulating,
    /// An operator was selected and no right-hand digit typed yet.
    OperatorPending,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    MultipleDecimalPoints(String),
    PendingOperationInError,
    OperationWithoutOperand,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::MultipleDecimalPoints(operand) => {
                write!(f, "operand {operand:?} has more than one decimal point")
            }
            InvariantViolation::PendingOperationInError => {
                write!(f, "error state still holds a pending operation")
            }
            InvariantViolation::OperationWithoutOperand => {
                write!(f, "operation is pending without a left operand")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            current_operand: String::from("0"),
            previous_operand: None,
            operation: None,
            overwrite: true,
        }
    }

    /// The terminal state entered when a calculation fails.
    pub fn error() -> Self {
        Self {
            current_operand: ERROR_OPERAND.to_string(),
            previous_operand: None,
            operation: None,
            overwrite: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_OPERAND
    }

    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if !self.overwrite {
            Phase::Accumulating
        } else if self.operation.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Entry
        }
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.current_operand.matches('.').count() > 1 {
            return Err(InvariantViolation::MultipleDecimalPoints(
                self.current_operand.clone(),
            ));
        }
        if self.is_error() && (self.previous_operand.is_some() || self.operation.is_some()) {
            return Err(InvariantViolation::PendingOperationInError);
        }
        if self.operation.is_some() && self.previous_operand.is_none() {
            return Err(InvariantViolation::OperationWithoutOperand);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.current_operand, "0");
        assert!(state.previous_operand.is_none());
        assert!(state.operation.is_none());
        assert!(state.overwrite);
        assert_eq!(state, CalculatorState::default());
        assert_eq!(state.phase(), Phase::Entry);
    }

    #[test]
    fn test_error_state() {
        let state = CalculatorState::error();
        assert!(state.is_error());
        assert_eq!(state.phase(), Phase::Error);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_phase_accumulating_and_pending() {
        let mut state = CalculatorState::new();
        state.current_operand = "12".to_string();
        state.overwrite = false;
        assert_eq!(state.phase(), Phase::Accumulating);

        state.previous_operand = Some("12".to_string());
        state.operation = Some(Operator::Add);
        state.overwrite = true;
        assert_eq!(state.phase(), Phase::OperatorPending);
    }

    #[test]
    fn test_invariant_violations() {
        let mut state = CalculatorState::new();
        state.current_operand = "1.2.3".to_string();
        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::MultipleDecimalPoints(_))
        ));

        let mut state = CalculatorState::error();
        state.operation = Some(Operator::Divide);
        state.previous_operand = Some("1".to_string());
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::PendingOperationInError)
        );

        let mut state = CalculatorState::new();
        state.operation = Some(Operator::Add);
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::OperationWithoutOperand)
        );
    }

    #[test]
    fn test_state_serializes_correctly() {
        let state = CalculatorState {
            current_operand: "3.5".to_string(),
            previous_operand: Some("2".to_string()),
            operation: Some(Operator::Multiply),
            overwrite: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
