//! Error types for exercise operations

/// Errors that can occur during exercise operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseError {
    /// Coin amount below zero
    NegativeAmount,
    /// Quaternion coefficient is NaN or infinite
    NonFiniteCoefficient,
    /// Push onto a stack that already holds its maximum number of items
    StackFull {
        /// Maximum number of items the stack accepts
        max_capacity: usize,
    },
}

impl ExerciseError {
    /// Get the error category for this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ExerciseError::NegativeAmount => ErrorCategory::OutOfRange,
            ExerciseError::NonFiniteCoefficient => ErrorCategory::InvalidValue,
            ExerciseError::StackFull { .. } => ErrorCategory::CapacityExceeded,
        }
    }
}

/// Broad classification of [`ExerciseError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input is well typed but outside the accepted range
    OutOfRange,
    /// Input is not a usable value at all
    InvalidValue,
    /// A container has reached its fixed upper bound
    CapacityExceeded,
}

impl core::fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExerciseError::NegativeAmount => write!(f, "Amount cannot be negative"),
            ExerciseError::NonFiniteCoefficient => write!(f, "Coefficients must be finite"),
            ExerciseError::StackFull { max_capacity } => {
                write!(f, "Stack has reached maximum capacity of {max_capacity}")
            }
        }
    }
}

impl core::error::Error for ExerciseError {}

/// Result type for exercise operations
pub type Result<T> = core::result::Result<T, ExerciseError>;
