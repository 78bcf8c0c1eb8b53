//! # StatusBar Component
//!
//! Top line showing where the calculator is in its cycle and the keys that
//! matter right now. The pending operation itself lives in the display
//! panel's history line.
//!
//! ## Conditional Formatting
//!
//! 1. **Error**: `"Deskcalc | Error | type a digit or Esc to clear · q quit"`
//! 2. **Operator pending**: `"Deskcalc | Next operand | Enter = · Esc clear · q quit"`
//! 3. **Default**: `"Deskcalc | Enter = · Esc clear · q quit"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::core::state::Phase;
use crate::tui::component::Component;

pub struct StatusBar {
    pub phase: Phase,
}

impl StatusBar {
    pub fn new(phase: Phase) -> Self {
        Self { phase }
    }

    pub fn text(&self) -> &'static str {
        match self.phase {
            Phase::Error => "Deskcalc | Error | type a digit or Esc to clear · q quit",
            Phase::OperatorPending => "Deskcalc | Next operand | Enter = · Esc clear · q quit",
            Phase::Entry | Phase::Accumulating => "Deskcalc | Enter = · Esc clear · q quit",
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
