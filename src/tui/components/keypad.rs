//! # Keypad Component
//!
//! The pointer-driven button grid. Four columns, five rows:
//!
//! ```text
//! ┌─────────────┬──────┬──────┐
//! │     AC      │ DEL  │  ÷   │
//! ├──────┬──────┼──────┼──────┤
//! │  7   │  8   │  9   │  ×   │
//! │  4   │  5   │  6   │  -   │
//! │  1   │  2   │  3   │  +   │
//! ├──────┴──────┼──────┼──────┤
//! │      0      │  .   │  =   │
//! └─────────────┴──────┴──────┘
//! ```
//!
//! Rendering and hit testing share `button_areas`, so a click always lands
//! on the button that was drawn under it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::{Action, Digit};
use crate::core::operator::Operator;
use crate::tui::component::Component;

pub const COLUMNS: u16 = 4;
pub const ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Function,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub kind: ButtonKind,
    pub column: u16,
    pub row: u16,
    pub span: u16,
}

const fn digit(label: &'static str, c: char, column: u16, row: u16, span: u16) -> Button {
    let digit = match Digit::new(c) {
        Some(digit) => digit,
        None => panic!("keypad label is not a digit"),
    };
    Button {
        label,
        action: Action::AddDigit(digit),
        kind: ButtonKind::Digit,
        column,
        row,
        span,
    }
}

const fn function(label: &'static str, action: Action, column: u16, row: u16) -> Button {
    Button {
        label,
        action,
        kind: ButtonKind::Function,
        column,
        row,
        span: 1,
    }
}

const fn operator(label: &'static str, op: Operator, column: u16, row: u16) -> Button {
    function(label, Action::SelectOperation(op), column, row)
}

pub const BUTTONS: [Button; 18] = [
    Button {
        label: "AC",
        action: Action::Clear,
        kind: ButtonKind::Clear,
        column: 0,
        row: 0,
        span: 2,
    },
    function("DEL", Action::DeleteDigit, 2, 0),
    operator("÷", Operator::Divide, 3, 0),
    digit("7", '7', 0, 1, 1),
    digit("8", '8', 1, 1, 1),
    digit("9", '9', 2, 1, 1),
    operator("×", Operator::Multiply, 3, 1),
    digit("4", '4', 0, 2, 1),
    digit("5", '5', 1, 2, 1),
    digit("6", '6', 2, 2, 1),
    operator("-", Operator::Subtract, 3, 2),
    digit("1", '1', 0, 3, 1),
    digit("2", '2', 1, 3, 1),
    digit("3", '3', 2, 3, 1),
    operator("+", Operator::Add, 3, 3),
    digit("0", '0', 0, 4, 2),
    digit(".", '.', 2, 4, 1),
    function("=", Action::Calculate, 3, 4),
];

/// Screen rectangle of every button when the keypad fills `area`.
pub fn button_areas(area: Rect) -> Vec<(Rect, &'static Button)> {
    let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS as usize]).split(area);
    let grid: Vec<_> = rows
        .iter()
        .map(|row| {
            Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS as usize]).split(*row)
        })
        .collect();

    BUTTONS
        .iter()
        .map(|button| {
            let row = &grid[button.row as usize];
            let first = row[button.column as usize];
            let last = row[(button.column + button.span - 1) as usize];
            (first.union(last), button)
        })
        .collect()
}

/// The button under the screen position `(column, row)`, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<&'static Button> {
    button_areas(area)
        .into_iter()
        .find(|(rect, _)| rect.contains((column, row).into()))
        .map(|(_, button)| button)
}

fn button_style(kind: ButtonKind) -> Style {
    match kind {
        ButtonKind::Digit => Style::default().fg(Color::White).bg(Color::DarkGray),
        ButtonKind::Function => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        ButtonKind::Clear => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

#[derive(Debug, Default)]
pub struct Keypad;

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (rect, button) in button_areas(area) {
            let style = button_style(button.kind);
            // Vertically centre the label inside the bordered cell
            let padding = rect.height.saturating_sub(3) / 2;
            let label = format!("{}{}", "\n".repeat(padding as usize), button.label);
            let paragraph = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style));
            frame.render_widget(paragraph, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 20,
    };

    #[test]
    fn test_grid_is_fully_covered() {
        let cells: u16 = BUTTONS.iter().map(|b| b.span).sum();
        assert_eq!(cells, COLUMNS * ROWS);
    }

    #[test]
    fn test_button_areas_match_grid() {
        let areas = button_areas(AREA);
        assert_eq!(areas.len(), BUTTONS.len());

        let (clear_rect, clear) = areas[0];
        assert_eq!(clear.label, "AC");
        assert_eq!(clear_rect, Rect::new(0, 0, 20, 4));

        let (equals_rect, equals) = areas[areas.len() - 1];
        assert_eq!(equals.label, "=");
        assert_eq!(equals_rect, Rect::new(30, 16, 10, 4));
    }

    #[test]
    fn test_button_at_resolves_clicks() {
        assert_eq!(button_at(AREA, 1, 1).map(|b| b.action), Some(Action::Clear));
        assert_eq!(button_at(AREA, 19, 3).map(|b| b.action), Some(Action::Clear));
        assert_eq!(
            button_at(AREA, 35, 2).map(|b| b.action),
            Some(Action::SelectOperation(Operator::Divide))
        );
        assert_eq!(
            button_at(AREA, 15, 17).map(|b| b.action),
            Some(Action::AddDigit(Digit::new('0').unwrap()))
        );
        assert_eq!(button_at(AREA, 39, 19).map(|b| b.action), Some(Action::Calculate));
    }

    #[test]
    fn test_button_at_outside_is_none() {
        assert!(button_at(AREA, 40, 5).is_none());
        assert!(button_at(AREA, 5, 20).is_none());
    }

    #[test]
    fn test_keypad_renders_labels() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Keypad.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        for label in ["AC", "DEL", "÷", "×", "7", "=", "."] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
