//! Binary operators
//!
//! A closed enumeration of the four keypad operators. Using a tagged type
//! instead of operator strings makes an unknown operator unrepresentable.

use serde::{Deserialize, Serialize};

use super::{EngineError, EngineResult};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (x)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the glyph shown on the key face
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Maps a typed character to an operator
    ///
    /// Accepts both the ASCII form (`*`, `/`) and the key-face glyph
    /// (`×`, `÷`).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    ///
    /// Division by zero is the one arithmetic failure; the caller decides
    /// how to absorb it.
    pub fn apply(self, a: f64, b: f64) -> EngineResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(EngineError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
