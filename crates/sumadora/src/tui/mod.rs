//! TUI frontend
//!
//! Terminal rendering of the display and the keypad, with key and mouse
//! input mapped onto the on-screen buttons.

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{keypad_area, render, CalculatorUi, KeypadWidget};
