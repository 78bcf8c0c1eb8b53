use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::core::state::CalculatorState;
use crate::tui::component::Component;
use crate::tui::components::{DISPLAY_HEIGHT, DisplayPanel, Keypad, StatusBar};
use crate::tui::format::{DisplayOptions, format_operand, history_line};

/// The calculator never grows wider than this, however wide the terminal.
pub const MAX_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub status: Rect,
    pub display: Rect,
    pub keypad: Rect,
}

/// Split the frame into status line, display and keypad. Used for both
/// drawing and mouse hit testing.
pub fn screen_areas(frame_area: Rect) -> ScreenAreas {
    use Constraint::{Length, Min};

    let width = frame_area.width.min(MAX_WIDTH);
    let [column] = Layout::horizontal([Length(width)])
        .flex(Flex::Center)
        .areas(frame_area);
    let [status, display, keypad] =
        Layout::vertical([Length(1), Length(DISPLAY_HEIGHT), Min(0)]).areas(column);

    ScreenAreas {
        status,
        display,
        keypad,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    state: &CalculatorState,
    options: &DisplayOptions,
    highlighted: bool,
) {
    let areas = screen_areas(frame.area());
    StatusBar::new(state.phase()).render(frame, areas.status);

    let mut display = DisplayPanel::new(
        history_line(state, options),
        format_operand(Some(&state.current_operand), options),
    );
    display.highlighted = highlighted;
    display.is_error = state.is_error();
    display.render(frame, areas.display);

    Keypad.render(frame, areas.keypad);
}
