use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    // Passed to the store
    Command(Action),
    // Left click at (column, row); resolved against the keypad layout
    Click(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Terminals with keyboard enhancement also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c)) => Action::from_char(c).map(TuiEvent::Command),
        (_, KeyCode::Enter) => Some(TuiEvent::Command(Action::Calculate)),
        (_, KeyCode::Backspace | KeyCode::Delete) => Some(TuiEvent::Command(Action::DeleteDigit)),
        (_, KeyCode::Esc) => Some(TuiEvent::Command(Action::Clear)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Digit;
    use crate::core::operator::Operator;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn command(code: KeyCode) -> Option<Action> {
        match map_key(key(code)) {
            Some(TuiEvent::Command(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(
            command(KeyCode::Char('3')),
            Some(Action::AddDigit(Digit::new('3').unwrap()))
        );
        assert_eq!(command(KeyCode::Char('.')), Some(Action::AddDigit(Digit::POINT)));
    }

    #[test]
    fn test_operator_keys_are_canonicalized() {
        assert_eq!(
            command(KeyCode::Char('*')),
            Some(Action::SelectOperation(Operator::Multiply))
        );
        assert_eq!(
            command(KeyCode::Char('/')),
            Some(Action::SelectOperation(Operator::Divide))
        );
        assert_eq!(
            command(KeyCode::Char('-')),
            Some(Action::SelectOperation(Operator::Subtract))
        );
    }

    #[test]
    fn test_calculate_keys() {
        assert_eq!(command(KeyCode::Enter), Some(Action::Calculate));
        assert_eq!(command(KeyCode::Char('=')), Some(Action::Calculate));
    }

    #[test]
    fn test_delete_and_clear_keys() {
        assert_eq!(command(KeyCode::Backspace), Some(Action::DeleteDigit));
        assert_eq!(command(KeyCode::Esc), Some(Action::Clear));
        assert_eq!(command(KeyCode::Char('c')), Some(Action::Clear));
        assert_eq!(command(KeyCode::Char('C')), Some(Action::Clear));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_left_click_maps_to_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(click), Some(TuiEvent::Click(4, 9)));

        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(moved), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
