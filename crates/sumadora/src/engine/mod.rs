//! Arithmetic engine
//!
//! An immediate-execution state machine: no expression parsing, no operator
//! precedence. Digits accumulate into an operand string, an operator press
//! banks it, and results are computed on demand, left to right.

pub mod number;
mod operator;
mod state;

pub use operator::Operator;
pub use state::{Engine, Snapshot};

use thiserror::Error;

/// Result type for fallible arithmetic steps
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types
///
/// These never cross the operation boundary: each engine operation absorbs
/// them locally (a silent no-op or the `"Error"` display marker).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,
    /// Operand text did not parse as a number
    #[error("unparsable operand: {0:?}")]
    Unparsable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== EngineError tests =====

    #[test]
    fn test_error_display_division_by_zero() {
        let err = EngineError::DivisionByZero;
        assert_eq!(format!("{err}"), "division by zero");
    }

    #[test]
    fn test_error_display_unparsable() {
        let err = EngineError::Unparsable("1.2.3".into());
        assert_eq!(format!("{err}"), "unparsable operand: \"1.2.3\"");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(EngineError::DivisionByZero);
        assert!(err.to_string().contains("division"));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = EngineError::Unparsable(String::new());
        assert_eq!(err.clone(), err);
    }
}
