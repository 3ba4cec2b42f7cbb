//! TUI Frontend for Calculator
//!
//! Interactive terminal calculator built on ratatui and crossterm, with a
//! keypad that accepts mouse clicks.

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::run;
pub use ui::{render, CalculatorUI, UiLayout};
