//! # Headless Mode
//!
//! Feeds a typed key sequence through the same store the TUI uses and
//! returns what the display would show. Backs `deskcalc --keys`.

use log::warn;

use crate::core::action::Action;
use crate::core::state::CalculatorState;
use crate::core::store::{Store, TransitionLogger};
use crate::tui::format::{DisplayOptions, format_operand};

/// Run every character of `keys` through the calculator. Characters with no
/// action (spaces, letters) are skipped.
pub fn run_keys(keys: &str) -> CalculatorState {
    let mut store = Store::new();
    store.subscribe(Box::new(TransitionLogger));
    for c in keys.chars() {
        match Action::from_char(c) {
            Some(action) => {
                store.dispatch(action);
            }
            None if c.is_whitespace() => {}
            None => warn!("Ignoring unmapped key {:?}", c),
        }
    }
    store.state().clone()
}

/// The formatted current value after typing `keys`.
pub fn evaluate(keys: &str, options: &DisplayOptions) -> String {
    format_operand(Some(&run_keys(keys).current_operand), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_formats_result() {
        let options = DisplayOptions::default();
        assert_eq!(evaluate("1200 * 3 =", &options), "3,600");
        assert_eq!(evaluate("1/8=", &options), "0.125");
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate("4/0=", &DisplayOptions::default()), "Error");
    }

    #[test]
    fn test_unmapped_keys_are_skipped() {
        let state = run_keys("1z2");
        assert_eq!(state.current_operand, "12");
    }

    #[test]
    fn test_pending_operation_is_kept() {
        let state = run_keys("9-");
        assert_eq!(state.previous_operand.as_deref(), Some("9"));
        assert_eq!(evaluate("9-", &DisplayOptions::default()), "9");
    }
}
