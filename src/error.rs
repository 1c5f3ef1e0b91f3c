//! Error types for lanemath operations.
//!
//! Kernels never fail: every numeric outcome (NaN, ±∞, signed zero) is carried
//! in the returned value. These errors cover the surfaces around the kernels,
//! namely binary slice drivers and the function metadata registry.

use std::fmt;

/// Errors that can occur outside the numeric kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanemathError {
    /// Two input slices of a binary operation differ in length.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// A registry lookup named a function that is not provided.
    UnknownFunction {
        /// The name that was looked up.
        name: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for LanemathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanemathError::LengthMismatch { left, right } => write!(
                f,
                "Length mismatch: left operand has {} elements, right operand has {}",
                left, right
            ),
            LanemathError::UnknownFunction { name } => {
                write!(f, "Unknown function: {}", name)
            }
            LanemathError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for LanemathError {}

/// Result type alias for lanemath operations.
pub type Result<T> = std::result::Result<T, LanemathError>;

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> LanemathError {
    LanemathError::LengthMismatch { left, right }
}

/// Creates an unknown function error.
pub fn unknown_function(name: impl Into<String>) -> LanemathError {
    LanemathError::UnknownFunction { name: name.into() }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> LanemathError {
    LanemathError::ValidationError {
        message: message.into(),
    }
}

/// Checks that both operands of a binary slice operation have the same length.
pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(length_mismatch(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(8, 5);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("8 elements"));
        assert!(display.contains("has 5"));
    }

    #[test]
    fn test_unknown_function_display() {
        let error = unknown_function("atan3");
        let display = format!("{}", error);
        assert!(display.contains("Unknown function"));
        assert!(display.contains("atan3"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("interval bounds are reversed");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("interval bounds are reversed"));
    }

    #[test]
    fn test_ensure_same_len() {
        assert!(ensure_same_len(4, 4).is_ok());
        assert_eq!(ensure_same_len(4, 3), Err(length_mismatch(4, 3)));
    }

    #[test]
    fn test_error_equality() {
        let error1 = unknown_function("sin");
        let error2 = unknown_function("sin");
        let error3 = unknown_function("cos");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = length_mismatch(1, 2);
        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
