//! # Store
//!
//! Holds the single mutable slot for the latest `CalculatorState`. The
//! reducer in `action.rs` stays pure; the store is the only writer and the
//! place where observers hear about changes.
//!
//! ```text
//! dispatch(action)
//!   └── update(&state, action) → next
//!         └── next != state → observers.on_change(&state, &next)
//! ```

use log::{info, warn};

use crate::core::action::{Action, update};
use crate::core::state::CalculatorState;

/// Reacts to state changes. Implemented by anything that needs to follow
/// the calculator without being part of it (logging, visual cues).
pub trait StateObserver {
    fn on_change(&mut self, previous: &CalculatorState, current: &CalculatorState);
}

#[derive(Default)]
pub struct Store {
    state: CalculatorState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Run `action` against the current state. Returns `true` if the state
    /// changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = update(&self.state, action);
        debug_assert!(
            next.check_invariants().is_ok(),
            "{action:?} produced invalid state {next:?}"
        );
        if next == self.state {
            return false;
        }

        let previous = std::mem::replace(&mut self.state, next);
        for observer in &mut self.observers {
            observer.on_change(&previous, &self.state);
        }
        true
    }
}

/// Logs every transition through the `log` facade.
pub struct TransitionLogger;

impl StateObserver for TransitionLogger {
    fn on_change(&mut self, previous: &CalculatorState, current: &CalculatorState) {
        if current.is_error() && !previous.is_error() {
            warn!(
                "Calculation failed: {:?} {:?} {:?}",
                previous.previous_operand, previous.operation, previous.current_operand
            );
        }
        info!(
            "{:?} -> {:?} (current={:?}, previous={:?}, operation={:?})",
            previous.phase(),
            current.phase(),
            current.current_operand,
            current.previous_operand,
            current.operation.map(|op| op.symbol()),
        );
    }
}
