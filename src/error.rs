// ============================================================================
// Runtime Errors
// Single error type covering every failure the runtime reports
// ============================================================================

use crate::exception::InvalidStateError;
use crate::numeric::{DivideByZeroError, NumericError, OverflowError};
use std::fmt;

/// Any error raised by the runtime.
///
/// Useful where numeric work and container access are mixed under one `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    Numeric(NumericError),
    InvalidState(InvalidStateError),
}

impl RuntimeError {
    pub fn is_overflow(&self) -> bool {
        matches!(self, RuntimeError::Numeric(err) if err.is_overflow())
    }

    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, RuntimeError::Numeric(err) if err.is_divide_by_zero())
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, RuntimeError::InvalidState(_))
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::Numeric(err) => err.fmt(f),
            RuntimeError::InvalidState(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Numeric(err) => Some(err),
            RuntimeError::InvalidState(err) => Some(err),
        }
    }
}

impl From<NumericError> for RuntimeError {
    fn from(err: NumericError) -> Self {
        RuntimeError::Numeric(err)
    }
}

impl From<OverflowError> for RuntimeError {
    fn from(err: OverflowError) -> Self {
        RuntimeError::Numeric(err.into())
    }
}

impl From<DivideByZeroError> for RuntimeError {
    fn from(err: DivideByZeroError) -> Self {
        RuntimeError::Numeric(err.into())
    }
}

impl From<InvalidStateError> for RuntimeError {
    fn from(err: InvalidStateError) -> Self {
        RuntimeError::InvalidState(err)
    }
}

/// Result type alias for mixed runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
