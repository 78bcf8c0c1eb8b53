//! Deskcalc library exports: the calculator engine, its terminal adapter,
//! and the headless key runner.

pub mod core;
pub mod headless;
pub mod tui;
