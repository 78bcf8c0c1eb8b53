//! # TUI Components
//!
//! All widgets of the calculator screen. Each is a props struct
//! implementing `Component`; none of them reads `CalculatorState` directly.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── status_bar.rs  (phase + key hints)
//! ├── display.rs     (history line + current value)
//! └── keypad.rs      (button grid, pointer hit testing)
//! ```

pub mod display;
pub mod keypad;
mod status_bar;

pub use display::{DISPLAY_HEIGHT, DisplayPanel};
pub use keypad::{Keypad, button_at};
pub use status_bar::StatusBar;
