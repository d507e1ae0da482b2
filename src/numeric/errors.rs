// ============================================================================
// Fraction Errors
// Error type for scaled-value construction
// ============================================================================

use std::fmt;

/// Errors that can occur while building a fixed-point fraction.
///
/// Range validation is the only fallible step: once a fraction exists, every
/// conversion and comparison on it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractionError {
    /// Scaled value is negative or wider than 256 bits
    OutOfRange,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::OutOfRange => write!(
                f,
                "value out of range: scaled value must lie within [0, 2^256 - 1]"
            ),
        }
    }
}

impl std::error::Error for FractionError {}

/// Result type alias for fraction operations
pub type FractionResult<T> = Result<T, FractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FractionError::OutOfRange.to_string(),
            "value out of range: scaled value must lie within [0, 2^256 - 1]"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(FractionError::OutOfRange);
        assert!(err.source().is_none());
    }
}
