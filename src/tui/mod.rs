//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the
//! calculator, and translates keyboard and mouse events into core
//! `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Highlighting** (display just changed): draws every ~16ms until the
//!   highlight expires.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
pub mod components;
pub mod event;
pub mod format;
pub mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::state::CalculatorState;
use crate::core::store::{StateObserver, Store, TransitionLogger};
use crate::tui::components::button_at;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::format::DisplayOptions;

/// TUI-specific presentation state (not part of the calculator state)
pub struct TuiState {
    pub options: DisplayOptions,
    /// How long the display stays highlighted after a change
    pub flash: Duration,
    changed_at: Rc<Cell<Option<Instant>>>,
}

impl TuiState {
    pub fn new(options: DisplayOptions, flash: Duration) -> Self {
        Self {
            options,
            flash,
            changed_at: Rc::new(Cell::new(None)),
        }
    }

    /// Observer to subscribe to the store; it marks the moment the
    /// displayed value last changed.
    pub fn pulse(&self) -> DisplayPulse {
        DisplayPulse {
            changed_at: Rc::clone(&self.changed_at),
        }
    }

    pub fn is_highlighted(&self, now: Instant) -> bool {
        if self.flash.is_zero() {
            return false;
        }
        self.changed_at
            .get()
            .is_some_and(|at| now.duration_since(at) < self.flash)
    }
}

/// Follows the store and records when `current_operand` changes.
pub struct DisplayPulse {
    changed_at: Rc<Cell<Option<Instant>>>,
}

impl StateObserver for DisplayPulse {
    fn on_change(&mut self, previous: &CalculatorState, current: &CalculatorState) {
        if previous.current_operand != current.current_operand {
            self.changed_at.set(Some(Instant::now()));
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let tui = TuiState::new(
        DisplayOptions {
            thousands_separator: config.thousands_separator.clone(),
        },
        Duration::from_millis(config.flash_ms),
    );
    let mut store = Store::new();
    store.subscribe(Box::new(TransitionLogger));
    store.subscribe(Box::new(tui.pulse()));

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            let highlighted = tui.is_highlighted(Instant::now());
            if highlighted {
                needs_redraw = true;
            }

            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, store.state(), &tui.options, highlighted))?;
                needs_redraw = false;
            }

            // Short timeout while a highlight is fading, long when idle. A
            // highlight that just ended needs one more frame to clear.
            let timeout = if highlighted {
                Duration::from_millis(16)
            } else {
                Duration::from_millis(500)
            };
            let first_event = poll_event_timeout(timeout)?;
            if highlighted && !tui.is_highlighted(Instant::now()) {
                needs_redraw = true;
            }

            // Process first event + drain ALL pending events before next draw
            let mut should_quit = false;
            let mut pending = first_event;
            while let Some(event) = pending {
                needs_redraw = true;
                match event {
                    TuiEvent::Quit => should_quit = true,
                    TuiEvent::Resize => {}
                    TuiEvent::Command(action) => {
                        store.dispatch(action);
                    }
                    TuiEvent::Click(column, row) => {
                        let areas = ui::screen_areas(terminal.get_frame().area());
                        if let Some(button) = button_at(areas.keypad, column, row) {
                            debug!("Clicked {:?} at ({}, {})", button.label, column, row);
                            store.dispatch(button.action);
                        }
                    }
                }
                if should_quit {
                    break;
                }
                pending = poll_event_immediate()?;
            }

            if should_quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    });

    ratatui::restore();
    result
}
