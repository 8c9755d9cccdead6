use thiserror::Error;

/// Errors related to evaluating a factorial outside its domain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    // Factorial is undefined for negative integers
    #[error("Invalid argument: factorial is undefined for negative n={0}")]
    InvalidArgument(i64),

    // Result does not fit in u128
    #[error("Integer overflow: {0}! does not fit in 128 bits")]
    Overflow(i64),
}

/// Result type for factorial functions that can produce errors.
pub type Result<T, E = FactorialError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            FactorialError::InvalidArgument(-3).to_string(),
            "Invalid argument: factorial is undefined for negative n=-3"
        );
        assert_eq!(
            FactorialError::Overflow(40).to_string(),
            "Integer overflow: 40! does not fit in 128 bits"
        );
    }
}
