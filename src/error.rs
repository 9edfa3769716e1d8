//! Error types for the uncertain-decimal library.
//!
//! Every fallible operation in the crate returns [`UncertainError`]. Errors are
//! reported at the point of detection and never retried internally.

use thiserror::Error;

/// The main error type for the uncertain-decimal library.
///
/// This enum represents all possible errors that can occur when constructing
/// or combining uncertain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UncertainError {
    /// Error when a value, uncertainty or relative flag cannot be parsed.
    #[error("Could not parse '{input}': {reason}")]
    Parse {
        /// The offending input, rendered as text
        input: String,
        /// Why the input was rejected
        reason: &'static str,
    },

    /// Error when an operand has a shape no operation accepts.
    #[error("Unsupported operand: {shape}")]
    UnsupportedOperand {
        /// Description of the rejected operand shape
        shape: String,
    },

    /// Error when dividing by a value whose central value is exactly zero.
    #[error("Division by zero: divisor has a central value of 0")]
    DivisionByZero,

    /// Error when a result does not fit in a 96-bit decimal.
    #[error("Arithmetic overflow during {operation}")]
    Overflow {
        /// The operation that overflowed
        operation: &'static str,
    },

    /// Error when nonzero inputs give a result too small to represent.
    #[error("Arithmetic underflow during {operation}: result is below the smallest decimal")]
    Underflow {
        /// The operation that underflowed
        operation: &'static str,
    },
}

/// A specialized `Result` type for uncertain-decimal operations.
///
/// This is a convenience type alias for `Result<T, UncertainError>`.
pub type Result<T> = std::result::Result<T, UncertainError>;

impl UncertainError {
    /// Create a parse error for the given input.
    ///
    /// # Example
    /// ```
    /// use uncertain_decimal::error::UncertainError;
    ///
    /// let error = UncertainError::parse("ten", "not a decimal number");
    /// assert!(error.to_string().contains("ten"));
    /// ```
    pub fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }

    /// Create an error for an operand shape that has no operation.
    ///
    /// # Example
    /// ```
    /// use uncertain_decimal::error::UncertainError;
    ///
    /// let error = UncertainError::unsupported_operand("tuple of length 4");
    /// assert!(error.to_string().contains("length 4"));
    /// ```
    pub fn unsupported_operand(shape: impl Into<String>) -> Self {
        Self::UnsupportedOperand {
            shape: shape.into(),
        }
    }

    /// Create an overflow error for the named operation.
    ///
    /// # Example
    /// ```
    /// use uncertain_decimal::error::UncertainError;
    ///
    /// let error = UncertainError::overflow("multiplication");
    /// assert!(error.to_string().contains("multiplication"));
    /// ```
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Create an underflow error for the named operation.
    #[must_use]
    pub fn underflow(operation: &'static str) -> Self {
        Self::Underflow { operation }
    }

    /// Whether the error came from malformed input rather than arithmetic.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnsupportedOperand { .. })
    }
}
