//! Unified keypad driver
//!
//! Write the button-press scenarios once, run them against every frontend.
//! The pure engine driver and the TUI driver implement the same trait, so
//! one set of verification functions exercises both.

use crate::engine::{Engine, Snapshot};
use crate::keypad::ButtonKind;

/// Abstract driver trait for button-level interactions
///
/// # Example
///
/// ```rust
/// use sumadora::prelude::*;
///
/// let mut driver = EngineDriver::new();
/// driver.tap_all("5+3=");
/// assert_eq!(driver.display(), "8");
/// ```
pub trait KeypadDriver {
    /// Activates one button
    fn press(&mut self, kind: ButtonKind);

    /// Returns the current display string
    fn display(&self) -> String;

    /// Captures the full engine state behind the frontend
    fn snapshot(&self) -> Snapshot;

    /// Activates the button a character maps to, if any
    fn tap(&mut self, ch: char) {
        if let Some(kind) = ButtonKind::from_char(ch) {
            self.press(kind);
        }
    }

    /// Taps a whole script of characters in order
    fn tap_all(&mut self, script: &str) {
        for ch in script.chars() {
            self.tap(ch);
        }
    }

    /// Activates the clear button
    fn clear(&mut self) {
        self.press(ButtonKind::Clear);
    }
}

/// Driver over the bare engine, no frontend involved
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: Engine,
}

impl EngineDriver {
    /// Creates a new engine driver
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl KeypadDriver for EngineDriver {
    fn press(&mut self, kind: ButtonKind) {
        kind.press(&mut self.engine);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ButtonKind, KeypadDriver, Snapshot};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the TUI application state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Returns the wrapped app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the wrapped app mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, kind: ButtonKind) {
            self.app.press(kind);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn snapshot(&self) -> Snapshot {
            self.app.engine().snapshot()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Verification Specs =====
// These run against ANY KeypadDriver implementation

/// Verifies digit entry mirrors the display, one decimal point at most
pub fn verify_digit_entry<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.tap_all("123.45");
    assert_eq!(driver.display(), "123.45");

    driver.clear();
    driver.tap_all("1..5");
    assert_eq!(driver.display(), "1.5");
}

/// Verifies the sign toggle is its own inverse and zero-safe
pub fn verify_sign_toggle<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.tap_all("5n");
    assert_eq!(driver.display(), "-5");
    driver.tap('n');
    assert_eq!(driver.display(), "5");

    driver.clear();
    driver.tap('n');
    assert_eq!(driver.display(), "0");
}

/// Verifies percent divides by one hundred and flags garbage input
pub fn verify_percent<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.tap_all("50%");
    assert_eq!(driver.display(), "0.5");

    driver.clear();
    driver.tap('%');
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.snapshot().input, "");
}

/// Verifies consecutive operator presses chain left to right
pub fn verify_chaining<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.tap_all("5+3+");
    // The first addition computes on the second operator press
    assert_eq!(driver.display(), "8");
    driver.tap_all("2=");
    assert_eq!(driver.display(), "10");
}

/// Verifies division by zero leaves the observable state untouched
pub fn verify_divide_by_zero<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.tap_all("7/0");
    let before = driver.snapshot();
    driver.tap('=');
    let after = driver.snapshot();
    assert_eq!(after.display, before.display);
    assert_eq!(after.input, before.input);
}

/// Verifies clear restores the initial state after any sequence
pub fn verify_clear<D: KeypadDriver>(driver: &mut D) {
    driver.tap_all("9.9*3=%n");
    driver.clear();
    assert_eq!(driver.snapshot(), Engine::new().snapshot());
}

/// Complete verification suite
pub fn run_full_specification<D: KeypadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_sign_toggle(driver);
    verify_percent(driver);
    verify_chaining(driver);
    verify_divide_by_zero(driver);
    verify_clear(driver);
}
