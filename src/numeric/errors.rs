// ============================================================================
// Numeric Errors
// Error types for overflow-checked fixed-width arithmetic
// ============================================================================

use super::kind::NumericType;
use super::policy::BoundsKind;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt;

/// An exact magnitude outside of any fixed width.
///
/// Carries the offending value of a failed check. Integer results are kept
/// exactly; results too large to materialise (a huge power or shift) are
/// kept as the expression that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Integer(BigInt),
    Float(f64),
    Unmaterialized(String),
}

impl Magnitude {
    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            Magnitude::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Nearest double; `None` for unmaterialised magnitudes.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Magnitude::Integer(value) => value.to_f64(),
            Magnitude::Float(value) => Some(*value),
            Magnitude::Unmaterialized(_) => None,
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Integer(value) => write!(f, "{}", value),
            Magnitude::Float(value) => write!(f, "{}", value),
            Magnitude::Unmaterialized(expr) => f.write_str(expr),
        }
    }
}

macro_rules! magnitude_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Magnitude {
                #[inline]
                fn from(value: $t) -> Self {
                    Magnitude::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

magnitude_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Magnitude {
    fn from(value: BigInt) -> Self {
        Magnitude::Integer(value)
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Float(value)
    }
}

impl From<f32> for Magnitude {
    fn from(value: f32) -> Self {
        Magnitude::Float(f64::from(value))
    }
}

/// A value fell outside the declared range of its type.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowError {
    pub ty: NumericType,
    pub actual: Magnitude,
    pub min: Magnitude,
    pub max: Magnitude,
    /// Boundary rule the value was rejected under
    pub bounds: BoundsKind,
}

impl OverflowError {
    /// Build the error for `ty` with its declared bounds, inclusive rule.
    pub fn new(ty: NumericType, actual: impl Into<Magnitude>) -> Self {
        Self {
            ty,
            actual: actual.into(),
            min: ty.min(),
            max: ty.max(),
            bounds: BoundsKind::Inclusive,
        }
    }

    /// Builder method: Set the boundary rule
    pub fn with_bounds(mut self, bounds: BoundsKind) -> Self {
        self.bounds = bounds;
        self
    }
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.bounds {
            BoundsKind::Inclusive => ('[', ']'),
            BoundsKind::Exclusive => ('(', ')'),
        };
        write!(
            f,
            "{} overflow: {} is outside {}{}, {}{}",
            self.ty, self.actual, open, self.min, self.max, close
        )
    }
}

impl std::error::Error for OverflowError {}

/// Division, modulo or a zero-base negative power with a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivideByZeroError {
    pub ty: NumericType,
}

impl fmt::Display for DivideByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} division by zero", self.ty)
    }
}

impl std::error::Error for DivideByZeroError {}

/// Errors that can occur during fixed-width arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericError {
    /// Result outside the declared range
    Overflow(OverflowError),
    /// Zero divisor
    DivideByZero(DivideByZeroError),
}

impl NumericError {
    pub fn overflow(ty: NumericType, actual: impl Into<Magnitude>) -> Self {
        NumericError::Overflow(OverflowError::new(ty, actual))
    }

    pub fn divide_by_zero(ty: NumericType) -> Self {
        NumericError::DivideByZero(DivideByZeroError { ty })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, NumericError::Overflow(_))
    }

    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, NumericError::DivideByZero(_))
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow(err) => err.fmt(f),
            NumericError::DivideByZero(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for NumericError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumericError::Overflow(err) => Some(err),
            NumericError::DivideByZero(err) => Some(err),
        }
    }
}

impl From<OverflowError> for NumericError {
    fn from(err: OverflowError) -> Self {
        NumericError::Overflow(err)
    }
}

impl From<DivideByZeroError> for NumericError {
    fn from(err: DivideByZeroError) -> Self {
        NumericError::DivideByZero(err)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
