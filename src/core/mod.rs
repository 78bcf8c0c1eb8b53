//! # Core Calculator Logic
//!
//! This module contains the calculator engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (operands)     │
//!                    │  • Action (key presses) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴──────┐
//!                         ▼             ▼
//!                  ┌────────────┐ ┌────────────┐
//!                  │    TUI     │ │  --keys    │
//!                  │  Adapter   │ │ (headless) │
//!                  │ (ratatui)  │ │            │
//!                  └────────────┘ └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `CalculatorState`, the whole calculator in one value
//! - [`action`]: `Action` and the `update()` reducer
//! - [`operator`]: the four canonical operators and their arithmetic
//! - [`store`]: the mutable slot holding the latest state, plus observers
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod operator;
pub mod state;
pub mod store;

pub use action::{Action, Digit, update};
pub use operator::{CalcError, Operator};
pub use state::{CalculatorState, ERROR_OPERAND, Phase};
pub use store::{StateObserver, Store, TransitionLogger};
