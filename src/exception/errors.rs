// ============================================================================
// Exception Errors
// Misuse of the success/failure container
// ============================================================================

use super::container::ExceptionState;
use std::fmt;

/// A container was built or queried inconsistently with its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidStateError {
    /// Construction was given both a success and a failure payload
    BothPayloads,
    /// Construction was given neither payload
    NoPayload,
    /// An accessor or comparison required a different state
    WrongState {
        expected: ExceptionState,
        found: ExceptionState,
    },
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidStateError::BothPayloads => {
                f.write_str("invalid state: both success and failure payloads given")
            },
            InvalidStateError::NoPayload => {
                f.write_str("invalid state: neither success nor failure payload given")
            },
            InvalidStateError::WrongState { expected, found } => {
                write!(f, "invalid state: expected {}, found {}", expected, found)
            },
        }
    }
}

impl std::error::Error for InvalidStateError {}
