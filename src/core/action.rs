//! # Actions
//!
//! Everything the user can do to the calculator becomes an `Action`.
//! Pressing `7`? That's `Action::AddDigit`. Pressing `=`? `Action::Calculate`.
//!
//! The `update()` function takes the current state and an action, then
//! returns the next state. No side effects here, and no failure either:
//! bad input is either ignored or turned into the `"Error"` operand.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```

use log::debug;

use crate::core::operator::Operator;
use crate::core::state::CalculatorState;

/// A single keypad character: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub const fn new(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Digit(c)),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDigit(Digit),
    DeleteDigit,
    SelectOperation(Operator),
    Calculate,
    Clear,
}

impl Action {
    /// Map a typed character onto an action.
    ///
    /// Keys without a character (Enter, Backspace, Escape) are handled by
    /// the adapter that owns the key events.
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(digit) = Digit::new(c) {
            return Some(Action::AddDigit(digit));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(Action::SelectOperation(op));
        }
        match c {
            '=' => Some(Action::Calculate),
            'c' | 'C' => Some(Action::Clear),
            _ => None,
        }
    }
}

/// Apply `action` to `state`, returning the next state.
pub fn update(state: &CalculatorState, action: Action) -> CalculatorState {
    debug!("update: {:?} on {:?}", action, state);
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::DeleteDigit => delete_digit(state),
        Action::SelectOperation(op) => select_operation(state, op),
        Action::Calculate => calculate(state),
        Action::Clear => clear(state),
    }
}

pub fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    // Error is escaped by clearing and treating the digit as the first one.
    if state.is_error() {
        return add_digit(&clear(state), digit);
    }
    let c = digit.as_char();
    if c == '.' && state.current_operand.contains('.') {
        return state.clone();
    }

    let mut next = state.clone();
    if state.overwrite {
        next.current_operand = c.to_string();
        next.overwrite = false;
    } else if state.current_operand == "0" && c != '.' {
        next.current_operand = c.to_string();
    } else {
        next.current_operand.push(c);
    }
    next
}

pub fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return clear(state);
    }

    let mut next = state.clone();
    if state.current_operand.chars().count() == 1 {
        next.current_operand = String::from("0");
        next.overwrite = true;
    } else {
        next.current_operand.pop();
    }
    next
}

pub fn select_operation(state: &CalculatorState, op: Operator) -> CalculatorState {
    if state.is_error() {
        return select_operation(&clear(state), op);
    }
    if state.current_operand == "0" && state.previous_operand.is_none() {
        return state.clone();
    }

    // A right-hand operand was typed since the last operator: fold first.
    let folded = if state.previous_operand.is_some() && !state.overwrite {
        calculate(state)
    } else {
        state.clone()
    };
    if folded.is_error() {
        return folded;
    }

    CalculatorState {
        previous_operand: Some(folded.current_operand.clone()),
        current_operand: folded.current_operand,
        operation: Some(op),
        overwrite: true,
    }
}

pub fn calculate(state: &CalculatorState) -> CalculatorState {
    let (Some(op), Some(previous)) = (state.operation, state.previous_operand.as_deref()) else {
        return state.clone();
    };
    if state.is_error() {
        return state.clone();
    }
    let (Ok(lhs), Ok(rhs)) = (
        previous.parse::<f64>(),
        state.current_operand.parse::<f64>(),
    ) else {
        debug!(
            "calculate: unparseable operands {:?} {} {:?}",
            previous, op, state.current_operand
        );
        return state.clone();
    };

    match op.apply(lhs, rhs) {
        Ok(result) => CalculatorState {
            current_operand: canonical(result),
            previous_operand: None,
            operation: None,
            overwrite: true,
        },
        Err(e) => {
            debug!("calculate: {} {} {} failed: {}", lhs, op, rhs, e);
            CalculatorState::error()
        }
    }
}

pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}

/// Default float formatting, with negative zero shown as `0`.
fn canonical(value: f64) -> String {
    if value == 0.0 {
        String::from("0")
    } else {
        value.to_string()
    }
}
