// ============================================================================
// Fixed-Width Float
// Overflow-trapping IEEE float value generic over width and bounds
// ============================================================================

use super::backend::FloatBackend;
use super::errors::{NumericError, NumericResult, OverflowError};
use super::kind::NumericType;
use super::policy::{self, Bounds, BoundsKind, Inclusive};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Fixed-width float with overflow trapping.
///
/// Results are computed in `f64` and admitted only if they are finite and
/// inside the declared range; NaN and the infinities are never stored.
/// A zero divisor is rejected before dividing rather than producing an
/// infinity.
///
/// Bitwise operations and shifts act on the 64-bit two's-complement pattern
/// of an integral value. A fractional operand, or one outside
/// `[-2^63, 2^63)`, has no such pattern and is reported as `Overflow`.
#[repr(transparent)]
pub struct Float<R, P = Inclusive> {
    raw: R,
    _bounds: PhantomData<P>,
}

impl<R: FloatBackend, P: Bounds> Float<R, P> {
    pub const TYPE: NumericType = R::TYPE;

    #[inline]
    const fn wrap(raw: R) -> Self {
        Self {
            raw,
            _bounds: PhantomData,
        }
    }

    #[inline]
    fn admit(wide: f64) -> NumericResult<Self> {
        policy::check(P::KIND, R::TYPE, &wide, &R::MIN, &R::MAX)?;
        Ok(Self::wrap(R::narrow(wide)))
    }

    fn guard_divisor(rhs: Self) -> NumericResult<()> {
        if rhs.raw.widen() == 0.0 {
            tracing::debug!(ty = %R::TYPE, "division by zero");
            return Err(NumericError::divide_by_zero(R::TYPE));
        }
        Ok(())
    }

    /// Create from the backing primitive.
    ///
    /// # Errors
    /// Returns `Overflow` for NaN, the infinities, or a value rejected by
    /// the boundary rule.
    #[inline]
    pub fn new(raw: R) -> NumericResult<Self> {
        Self::admit(raw.widen())
    }

    /// Create from a double, which may exceed the declared width.
    ///
    /// # Errors
    /// Returns `Overflow` carrying the magnitude if it is out of range.
    #[inline]
    pub fn from_magnitude(magnitude: f64) -> NumericResult<Self> {
        Self::admit(magnitude)
    }

    #[inline]
    pub fn value(self) -> R {
        self.raw
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw.widen()
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw.widen() + rhs.raw.widen())
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw.widen() - rhs.raw.widen())
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::admit(self.raw.widen() * rhs.raw.widen())
    }

    /// # Errors
    /// - `DivideByZero` if `rhs` is zero of either sign
    /// - `Overflow` if the quotient is out of range
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        Self::guard_divisor(rhs)?;
        Self::admit(self.raw.widen() / rhs.raw.widen())
    }

    /// Remainder with the sign of the dividend.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `rhs` is zero.
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        Self::guard_divisor(rhs)?;
        Self::admit(self.raw.widen() % rhs.raw.widen())
    }

    /// # Errors
    /// - `DivideByZero` for a zero base with a negative exponent
    /// - `Overflow` if the power is out of range or not real
    pub fn checked_pow(self, rhs: Self) -> NumericResult<Self> {
        let (base, exp) = (self.raw.widen(), rhs.raw.widen());
        if base == 0.0 && exp < 0.0 {
            tracing::debug!(ty = %R::TYPE, "zero raised to a negative power");
            return Err(NumericError::divide_by_zero(R::TYPE));
        }
        Self::admit(base.powf(exp))
    }

    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        Self::admit(-self.raw.widen())
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    /// Two's-complement pattern of an integral operand.
    fn pattern(self) -> NumericResult<i64> {
        // 2^63, the first magnitude without an i64 pattern
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        let wide = self.raw.widen();
        if wide.fract() == 0.0 && (-LIMIT..LIMIT).contains(&wide) {
            return Ok(wide as i64);
        }
        let err = OverflowError {
            ty: R::TYPE,
            actual: wide.into(),
            min: i64::MIN.into(),
            max: i64::MAX.into(),
            bounds: BoundsKind::Inclusive,
        };
        policy::reject(BoundsKind::Inclusive, &err);
        Err(err.into())
    }

    /// # Errors
    /// Returns `Overflow` if either operand is not an integral 64-bit value.
    #[inline]
    pub fn bit_or(self, rhs: Self) -> NumericResult<Self> {
        Self::admit((self.pattern()? | rhs.pattern()?) as f64)
    }

    /// # Errors
    /// Returns `Overflow` if either operand is not an integral 64-bit value.
    #[inline]
    pub fn bit_and(self, rhs: Self) -> NumericResult<Self> {
        Self::admit((self.pattern()? & rhs.pattern()?) as f64)
    }

    /// # Errors
    /// Returns `Overflow` if either operand is not an integral 64-bit value.
    #[inline]
    pub fn bit_xor(self, rhs: Self) -> NumericResult<Self> {
        Self::admit((self.pattern()? ^ rhs.pattern()?) as f64)
    }

    /// Complement of the 64-bit pattern (`-v - 1`).
    ///
    /// # Errors
    /// Returns `Overflow` if the value is not an integral 64-bit value.
    #[inline]
    pub fn bit_not(self) -> NumericResult<Self> {
        Self::admit((!self.pattern()?) as f64)
    }

    /// Left shift (`self * 2^rhs`). A negative amount shifts right.
    ///
    /// # Errors
    /// Returns `Overflow` if an operand is not an integral 64-bit value or
    /// the result leaves the declared range.
    pub fn checked_shl(self, rhs: Self) -> NumericResult<Self> {
        let (value, amount) = (self.pattern()?, rhs.pattern()?);
        if amount < 0 {
            Self::shift_right(value, amount.unsigned_abs())
        } else {
            Self::shift_left(value, amount.unsigned_abs())
        }
    }

    /// Flooring right shift. A negative amount shifts left.
    ///
    /// # Errors
    /// Returns `Overflow` if an operand is not an integral 64-bit value, or
    /// for a negative amount whose left shift leaves the declared range.
    pub fn checked_shr(self, rhs: Self) -> NumericResult<Self> {
        let (value, amount) = (self.pattern()?, rhs.pattern()?);
        if amount < 0 {
            Self::shift_left(value, amount.unsigned_abs())
        } else {
            Self::shift_right(value, amount.unsigned_abs())
        }
    }

    fn shift_left(value: i64, amount: u64) -> NumericResult<Self> {
        if value == 0 {
            return Self::admit(0.0);
        }
        Self::admit(value as f64 * (amount as f64).exp2())
    }

    fn shift_right(value: i64, amount: u64) -> NumericResult<Self> {
        let shifted = match u32::try_from(amount) {
            Ok(n) if n < i64::BITS => value >> n,
            _ if value < 0 => -1,
            _ => 0,
        };
        Self::admit(shifted as f64)
    }
}

impl<R: FloatBackend> Float<R, Inclusive> {
    pub const ZERO: Self = Self::wrap(R::ZERO);
}

impl<R: FloatBackend> Default for Float<R, Inclusive> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<R: FloatBackend, P: Bounds> Clone for Float<R, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: FloatBackend, P: Bounds> Copy for Float<R, P> {}

impl<R: FloatBackend, P: Bounds> PartialEq for Float<R, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: FloatBackend, P: Bounds> PartialOrd for Float<R, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<R: FloatBackend, P: Bounds> fmt::Debug for Float<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", R::TYPE, self.raw)
    }
}

impl<R: FloatBackend, P: Bounds> fmt::Display for Float<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

#[cfg(feature = "serde")]
impl<R, P> serde::Serialize for Float<R, P>
where
    R: FloatBackend + serde::Serialize,
    P: Bounds,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R, P> serde::Deserialize<'de> for Float<R, P>
where
    R: FloatBackend + serde::Deserialize<'de>,
    P: Bounds,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = R::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

pub type F32 = Float<f32>;
pub type F64 = Float<f64>;
