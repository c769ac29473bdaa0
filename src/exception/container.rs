// ============================================================================
// Exception Container
// Immutable holder of exactly one success or failure payload
// ============================================================================

use super::errors::InvalidStateError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which payload a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExceptionState {
    Success,
    Failure,
}

impl fmt::Display for ExceptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionState::Success => f.write_str("success"),
            ExceptionState::Failure => f.write_str("failure"),
        }
    }
}

/// Outcome of an operation that can fail with a domain payload.
///
/// Holds exactly one of the two payloads and never changes after
/// construction. Accessors that ask for the payload of the other state fail
/// with [`InvalidStateError`] instead of returning a placeholder.
///
/// # Example
/// ```
/// use checked_runtime::exception::Exception;
///
/// let ok: Exception<u32, String> = Exception::from_parts(Some(7), None)?;
/// assert_eq!(ok.get()?, &7);
/// assert!(ok.get_failure().is_err());
/// # Ok::<(), checked_runtime::exception::InvalidStateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exception<T, U> {
    Success(T),
    Failure(U),
}

impl<T, U> Exception<T, U> {
    /// Build from optional payloads, exactly one of which must be present.
    ///
    /// # Errors
    /// - `BothPayloads` if both are `Some`
    /// - `NoPayload` if both are `None`
    pub fn from_parts(success: Option<T>, failure: Option<U>) -> Result<Self, InvalidStateError> {
        match (success, failure) {
            (Some(value), None) => Ok(Exception::Success(value)),
            (None, Some(value)) => Ok(Exception::Failure(value)),
            (Some(_), Some(_)) => {
                tracing::debug!("exception built with both payloads");
                Err(InvalidStateError::BothPayloads)
            }
            (None, None) => {
                tracing::debug!("exception built with no payload");
                Err(InvalidStateError::NoPayload)
            }
        }
    }

    #[inline]
    pub fn state(&self) -> ExceptionState {
        match self {
            Exception::Success(_) => ExceptionState::Success,
            Exception::Failure(_) => ExceptionState::Failure,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Exception::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Exception::Failure(_))
    }

    fn wrong_state(&self, expected: ExceptionState) -> InvalidStateError {
        let found = self.state();
        tracing::debug!(%expected, %found, "exception accessed in wrong state");
        InvalidStateError::WrongState { expected, found }
    }

    /// Success payload.
    ///
    /// # Errors
    /// Returns `WrongState` when the container holds a failure.
    pub fn get(&self) -> Result<&T, InvalidStateError> {
        match self {
            Exception::Success(value) => Ok(value),
            Exception::Failure(_) => Err(self.wrong_state(ExceptionState::Success)),
        }
    }

    /// Failure payload.
    ///
    /// # Errors
    /// Returns `WrongState` when the container holds a success.
    pub fn get_failure(&self) -> Result<&U, InvalidStateError> {
        match self {
            Exception::Failure(value) => Ok(value),
            Exception::Success(_) => Err(self.wrong_state(ExceptionState::Failure)),
        }
    }

    /// Compare payloads of two containers in the same state.
    ///
    /// # Errors
    /// Returns `WrongState` when one container is a success and the other a
    /// failure; such a pair is not comparable.
    pub fn try_eq(&self, other: &Self) -> Result<bool, InvalidStateError>
    where
        T: PartialEq,
        U: PartialEq,
    {
        match (self, other) {
            (Exception::Success(a), Exception::Success(b)) => Ok(a == b),
            (Exception::Failure(a), Exception::Failure(b)) => Ok(a == b),
            _ => Err(other.wrong_state(self.state())),
        }
    }

    /// Negation of [`Exception::try_eq`].
    pub fn try_ne(&self, other: &Self) -> Result<bool, InvalidStateError>
    where
        T: PartialEq,
        U: PartialEq,
    {
        self.try_eq(other).map(|eq| !eq)
    }

    pub fn into_result(self) -> Result<T, U> {
        match self {
            Exception::Success(value) => Ok(value),
            Exception::Failure(value) => Err(value),
        }
    }

    pub fn as_ref(&self) -> Exception<&T, &U> {
        match self {
            Exception::Success(value) => Exception::Success(value),
            Exception::Failure(value) => Exception::Failure(value),
        }
    }

    pub fn map<V, F: FnOnce(T) -> V>(self, f: F) -> Exception<V, U> {
        match self {
            Exception::Success(value) => Exception::Success(f(value)),
            Exception::Failure(value) => Exception::Failure(value),
        }
    }

    pub fn map_failure<V, F: FnOnce(U) -> V>(self, f: F) -> Exception<T, V> {
        match self {
            Exception::Success(value) => Exception::Success(value),
            Exception::Failure(value) => Exception::Failure(f(value)),
        }
    }
}

impl<T, U> From<Result<T, U>> for Exception<T, U> {
    fn from(result: Result<T, U>) -> Self {
        match result {
            Ok(value) => Exception::Success(value),
            Err(value) => Exception::Failure(value),
        }
    }
}

impl<T, U> From<Exception<T, U>> for Result<T, U> {
    fn from(exception: Exception<T, U>) -> Self {
        exception.into_result()
    }
}
