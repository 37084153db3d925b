//! TUI application state

use crate::engine::{number::format_number, Engine};
use crate::keypad::{ButtonKind, Keypad};

/// Calculator application state
///
/// Owns the engine and the keypad model, routes button presses into engine
/// operations, and keeps press feedback on the last activated key.
#[derive(Debug)]
pub struct CalculatorApp {
    /// The arithmetic engine
    engine: Engine,
    /// The on-screen pad
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Activates a button: press feedback plus the wired engine operation
    pub fn press(&mut self, kind: ButtonKind) {
        self.keypad.highlight(kind);
        kind.press(&mut self.engine);
    }

    /// Activates the button under a click, if any
    ///
    /// `width` and `height` are the pad interior size; `x` and `y` are
    /// relative to its top-left corner. Returns the activated button.
    pub fn click(&mut self, width: u16, height: u16, x: u16, y: u16) -> Option<ButtonKind> {
        let kind = self.keypad.hit_test(width, height, x, y)?;
        self.press(kind);
        Some(kind)
    }

    /// Returns the status line under the display
    ///
    /// Shows the banked operand and the pending operator while one is
    /// chosen, so chained entry stays visible.
    #[must_use]
    pub fn status(&self) -> String {
        match self.engine.pending() {
            Some(op) => format!("{} {}", format_number(self.engine.accumulated()), op.glyph()),
            None => "ready".to_string(),
        }
    }
}
