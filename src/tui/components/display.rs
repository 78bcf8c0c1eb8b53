//! # Display Component
//!
//! The readout above the keypad: a dim history line (`"1,200 ÷"`) and the
//! current value, both right-aligned. Purely presentational; all text is
//! formatted by the caller.
//!
//! When `highlighted` is set the value is drawn inverted. The event loop
//! turns it on for a short moment after the value changes, which is the
//! terminal equivalent of a flicker on update.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::format::truncate_left;

/// Rows taken by the display including its border.
pub const DISPLAY_HEIGHT: u16 = 4;

pub struct DisplayPanel {
    /// Previous operand and pending operator, or empty
    pub history: String,
    /// Formatted current operand
    pub value: String,
    pub highlighted: bool,
    pub is_error: bool,
}

impl DisplayPanel {
    pub fn new(history: String, value: String) -> Self {
        Self {
            history,
            value,
            highlighted: false,
            is_error: false,
        }
    }

    fn value_style(&self) -> Style {
        let base = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        }
        .add_modifier(Modifier::BOLD);

        if self.highlighted {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Component for DisplayPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::styled(
                truncate_left(&self.history, width),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ),
            Line::styled(truncate_left(&self.value, width), self.value_style()),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(Block::bordered().border_style(Style::default().fg(Color::Blue)));
        frame.render_widget(paragraph, area);
    }
}
