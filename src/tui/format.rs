//! # Display Formatting
//!
//! Turns raw operands into display text. The engine stores operands as
//! plain digit strings (`"1234.50"`); the display groups the integer part
//! (`"1,234.50"`) and leaves the decimal part exactly as typed, so trailing
//! zeros and a trailing point stay visible while the user is typing.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::{CalculatorState, ERROR_OPERAND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Inserted between groups of three integer digits. Empty disables grouping.
    pub thousands_separator: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            thousands_separator: String::from(","),
        }
    }
}

/// Format an operand for display. `None` renders as an empty string.
pub fn format_operand(operand: Option<&str>, options: &DisplayOptions) -> String {
    let Some(operand) = operand else {
        return String::new();
    };
    if operand == ERROR_OPERAND {
        return operand.to_string();
    }

    let (integer, decimal) = match operand.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (operand, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let mut formatted = format!(
        "{sign}{}",
        group_thousands(digits, &options.thousands_separator)
    );
    if let Some(decimal) = decimal {
        formatted.push('.');
        formatted.push_str(decimal);
    }
    formatted
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// The smaller line above the current value: `"1,200 ×"` while an
/// operation is pending, empty otherwise.
pub fn history_line(state: &CalculatorState, options: &DisplayOptions) -> String {
    match (&state.previous_operand, state.operation) {
        (Some(previous), Some(op)) => {
            format!("{} {}", format_operand(Some(previous), options), op)
        }
        _ => String::new(),
    }
}

/// Keep the rightmost part of `text` that fits in `width` columns, marking
/// the cut with `…`. The least significant digits are the ones worth seeing.
pub fn truncate_left(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.push(c);
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}
