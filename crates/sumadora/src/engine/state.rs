//! The calculator state machine
//!
//! Three conceptual phases: entering an operand, waiting for the second
//! operand after an operator press, and showing a result ready to chain.
//! Every transition is one synchronous method call; nothing reenters.

use serde::{Deserialize, Serialize};

use super::number::{format_number, parse_operand};
use super::Operator;

/// The calculator engine
///
/// Owns all arithmetic state. Operations correspond one-to-one to button
/// classes and are infallible at this boundary: failures are absorbed
/// locally, so the display is always left in a usable state.
#[derive(Debug, Clone)]
pub struct Engine {
    /// String shown to the user
    display: String,
    /// Digits and decimal point typed since the last operator or clear
    input: String,
    /// Operator chosen since the last clear or equals, if any
    pending: Option<Operator>,
    /// Left operand carried across chained operations
    accumulated: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Display marker for an unparsable percent operand
    pub const ERROR_DISPLAY: &'static str = "Error";

    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            input: String::new(),
            pending: None,
            accumulated: 0.0,
        }
    }

    /// Returns the display string, the engine's single observable output
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the operand accumulator text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the pending operator, if an operator button has been pressed
    /// since the last clear or equals
    #[must_use]
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Returns the value carried as the left operand of the pending operation
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Captures the full engine state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            input: self.input.clone(),
            pending: self.pending,
            accumulated: self.accumulated,
        }
    }

    /// Appends a digit or the decimal point to the operand accumulator
    ///
    /// A second decimal point is rejected here, not only at the keypad.
    /// Characters that are not a digit or the point are ignored.
    pub fn append_digit(&mut self, ch: char) {
        if !ch.is_ascii_digit() && ch != '.' {
            return;
        }
        if ch == '.' && self.input.contains('.') {
            return;
        }
        self.input.push(ch);
        self.display.clone_from(&self.input);
    }

    /// Resets the engine to the initial state
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.input.clear();
        self.pending = None;
        self.accumulated = 0.0;
    }

    /// Negates the operand accumulator
    ///
    /// Parses as an integer when no decimal point is present, else as a
    /// float. Empty or unparsable input counts as zero, which negates to
    /// a displayed `"0"`.
    pub fn toggle_sign(&mut self) {
        let negated = if self.input.contains('.') {
            let value: f64 = self.input.parse().unwrap_or(0.0);
            format_number(-value)
        } else {
            let value: i64 = self.input.parse().unwrap_or(0);
            (-value).to_string()
        };
        self.input = negated;
        self.display.clone_from(&self.input);
    }

    /// Divides the operand accumulator by one hundred
    ///
    /// On an unparsable operand the accumulator empties and the display
    /// shows the error marker.
    pub fn percent(&mut self) {
        match parse_operand(&self.input) {
            Ok(value) => {
                self.input = format_number(value / 100.0);
                self.display.clone_from(&self.input);
            }
            Err(_) => {
                self.input.clear();
                self.display = Self::ERROR_DISPLAY.to_string();
            }
        }
    }

    /// Chooses the operation to perform on the next equals or operator press
    ///
    /// Pressing an operator while one is already pending with a fresh
    /// operand typed first computes that operation, so consecutive operator
    /// presses chain left to right. Pressing an operator with no fresh
    /// operand re-chooses the pending operation and keeps the banked value.
    pub fn set_operator(&mut self, op: Operator) {
        if self.pending.is_some() && !self.input.is_empty() {
            self.calculate();
        }
        self.pending = Some(op);
        if let Ok(value) = parse_operand(&self.input) {
            self.accumulated = value;
            self.input.clear();
        }
    }

    /// Computes the pending operation against the current operand
    ///
    /// A no-op when the operand does not parse, when no operator is
    /// pending, or when the operation is a division by zero; in each case
    /// all state is left unchanged.
    pub fn calculate(&mut self) {
        let Ok(operand) = parse_operand(&self.input) else {
            return;
        };
        let Some(op) = self.pending else {
            return;
        };
        let Ok(result) = op.apply(self.accumulated, operand) else {
            return;
        };
        self.input = format_number(result);
        self.display.clone_from(&self.input);
        self.accumulated = result;
        self.pending = None;
    }

    /// Computes the pending operation and settles the result
    ///
    /// Always leaves no operator pending and the accumulator resynced from
    /// the operand text, zero when it does not parse.
    pub fn equals(&mut self) {
        self.calculate();
        self.pending = None;
        self.accumulated = parse_operand(&self.input).unwrap_or(0.0);
    }
}

/// Serializable capture of the full engine state
///
/// Driver tests compare snapshots to assert that an operation left the
/// engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display string
    pub display: String,
    /// Operand accumulator text
    pub input: String,
    /// Pending operator, if any
    pub pending: Option<Operator>,
    /// Carried left operand
    pub accumulated: f64,
}
