//! Sumadora - Single-Screen Keypad Calculator
//!
//! A calculator in the immediate-execution style: digits accumulate into an
//! operand, an operator button stores it and waits for the next operand, and
//! equals (or the next operator press) computes left to right with no
//! precedence. The arithmetic engine is pure and UI-agnostic; the keypad
//! model and the TUI frontend invoke its operations and render its single
//! observable output, the display string.
//!
//! # Example
//!
//! ```rust
//! use sumadora::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.append_digit('5');
//! engine.set_operator(Operator::Add);
//! engine.append_digit('3');
//! engine.equals();
//! assert_eq!(engine.display(), "8");
//!
//! // Operators chain left to right
//! engine.set_operator(Operator::Multiply);
//! engine.append_digit('2');
//! engine.equals();
//! assert_eq!(engine.display(), "16");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod driver;
pub mod engine;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::driver::{EngineDriver, KeypadDriver};
    pub use crate::engine::{Engine, EngineError, Operator, Snapshot};
    pub use crate::keypad::{Button, ButtonClass, ButtonKind, Keypad};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
