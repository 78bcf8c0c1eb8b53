use deskcalc::core::action::{self, Action, Digit};
use deskcalc::core::{CalculatorState, Operator, Phase, Store};

// ============================================================================
// Helper Functions
// ============================================================================

fn digit(c: char) -> Action {
    Action::AddDigit(Digit::new(c).unwrap())
}

fn op(symbol: char) -> Action {
    Action::SelectOperation(Operator::from_symbol(symbol).unwrap())
}

/// Runs actions from the initial state, one after another
fn run(actions: &[Action]) -> CalculatorState {
    actions
        .iter()
        .fold(CalculatorState::new(), |state, &a| action::update(&state, a))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_chaining_folds_previous_operation() {
    let state = run(&[
        digit('2'),
        op('+'),
        digit('3'),
        op('+'),
        digit('4'),
        Action::Calculate,
    ]);
    assert_eq!(state.current_operand, "9");
}

#[test]
fn test_operator_replacement_does_not_fold() {
    let state = run(&[digit('5'), op('+'), op('-'), digit('2'), Action::Calculate]);
    assert_eq!(state.current_operand, "3");
}

#[test]
fn test_leading_zero_suppression() {
    let state = run(&[digit('0'), digit('5')]);
    assert_eq!(state.current_operand, "5");
}

#[test]
fn test_decimal_guard() {
    let state = run(&[digit('.'), digit('.')]);
    assert_eq!(state.current_operand.matches('.').count(), 1);

    let state = run(&[digit('3'), digit('.'), digit('1'), digit('.'), digit('4')]);
    assert_eq!(state.current_operand, "3.14");
}

#[test]
fn test_division_by_zero_is_terminal_error() {
    let state = CalculatorState {
        current_operand: "0".to_string(),
        previous_operand: Some("10".to_string()),
        operation: Some(Operator::Divide),
        overwrite: false,
    };
    let result = action::calculate(&state);
    assert_eq!(result.current_operand, "Error");
    assert_eq!(result.previous_operand, None);
    assert_eq!(result.operation, None);
    assert!(result.overwrite);
}

#[test]
fn test_digit_after_error_starts_new_entry() {
    let error = run(&[digit('1'), op('÷'), digit('0'), Action::Calculate]);
    assert_eq!(error.phase(), Phase::Error);

    let state = action::update(&error, digit('7'));
    assert_eq!(state.current_operand, "7");
    assert_eq!(state.phase(), Phase::Accumulating);
    assert_eq!(state.previous_operand, None);
}

#[test]
fn test_operator_after_error_resets() {
    let error = CalculatorState::error();
    assert_eq!(action::update(&error, op('×')), CalculatorState::new());
}

#[test]
fn test_delete_back_to_zero() {
    let entered = run(&[digit('4'), digit('5'), digit('6')]);
    let state = (0..3).fold(entered, |s, _| action::delete_digit(&s));
    assert_eq!(state.current_operand, "0");
    assert!(state.overwrite);

    let again = action::delete_digit(&state);
    assert_eq!(again.current_operand, "0");
    assert!(again.overwrite);
}

#[test]
fn test_clear_from_every_phase() {
    let states = [
        CalculatorState::new(),
        run(&[digit('8')]),
        run(&[digit('8'), op('×')]),
        CalculatorState::error(),
    ];
    let phases: Vec<Phase> = states.iter().map(|s| s.phase()).collect();
    assert_eq!(
        phases,
        vec![
            Phase::Entry,
            Phase::Accumulating,
            Phase::OperatorPending,
            Phase::Error
        ]
    );
    for state in &states {
        assert_eq!(action::clear(state), CalculatorState::new());
    }
}

#[test]
fn test_store_runs_a_full_session() {
    let mut store = Store::new();
    for c in "12.5*4=-0.5=".chars() {
        store.dispatch(Action::from_char(c).unwrap());
    }
    assert_eq!(store.state().current_operand, "49.5");
    assert_eq!(store.state().phase(), Phase::Entry);
}
