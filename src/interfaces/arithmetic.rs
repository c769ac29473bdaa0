// ============================================================================
// Checked Arithmetic Interface
// Operation contracts shared by every fixed-width value type
// ============================================================================

use crate::numeric::{
    Bounds, Float, FloatBackend, Int, IntBackend, NumericResult, NumericType, SignedBackend,
};

/// Arithmetic available on every declared numeric type.
///
/// Both operands always share the implementing type; an operation either
/// returns the new value or the error describing why no value exists.
pub trait CheckedArithmetic: Copy + PartialEq + PartialOrd + Send + Sync + 'static {
    /// Declared type, used in diagnostics.
    const TYPE: NumericType;

    fn checked_add(self, rhs: Self) -> NumericResult<Self>;
    fn checked_sub(self, rhs: Self) -> NumericResult<Self>;
    fn checked_mul(self, rhs: Self) -> NumericResult<Self>;

    /// # Errors
    /// `DivideByZero` when `rhs` is zero, checked before dividing.
    fn checked_div(self, rhs: Self) -> NumericResult<Self>;

    /// # Errors
    /// `DivideByZero` when `rhs` is zero, checked before dividing.
    fn checked_rem(self, rhs: Self) -> NumericResult<Self>;

    fn checked_pow(self, rhs: Self) -> NumericResult<Self>;
}

/// Bitwise and shift operations on the two's-complement bit pattern.
///
/// Floats take part through the pattern of their integral value.
pub trait CheckedBitwise: CheckedArithmetic {
    fn bit_or(self, rhs: Self) -> NumericResult<Self>;
    fn bit_and(self, rhs: Self) -> NumericResult<Self>;
    fn bit_xor(self, rhs: Self) -> NumericResult<Self>;
    fn bit_not(self) -> NumericResult<Self>;
    fn checked_shl(self, rhs: Self) -> NumericResult<Self>;
    fn checked_shr(self, rhs: Self) -> NumericResult<Self>;
}

/// Arithmetic negation, for signed integers and floats.
pub trait CheckedNeg: CheckedArithmetic {
    fn checked_neg(self) -> NumericResult<Self>;
}

// ============================================================================
// Integer Implementations
// ============================================================================

impl<R: IntBackend, P: Bounds> CheckedArithmetic for Int<R, P> {
    const TYPE: NumericType = R::TYPE;

    #[inline]
    fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_mul(self, rhs)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_div(self, rhs)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_rem(self, rhs)
    }

    #[inline]
    fn checked_pow(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_pow(self, rhs)
    }
}

impl<R: IntBackend, P: Bounds> CheckedBitwise for Int<R, P> {
    #[inline]
    fn bit_or(self, rhs: Self) -> NumericResult<Self> {
        Int::bit_or(self, rhs)
    }

    #[inline]
    fn bit_and(self, rhs: Self) -> NumericResult<Self> {
        Int::bit_and(self, rhs)
    }

    #[inline]
    fn bit_xor(self, rhs: Self) -> NumericResult<Self> {
        Int::bit_xor(self, rhs)
    }

    #[inline]
    fn bit_not(self) -> NumericResult<Self> {
        Int::bit_not(self)
    }

    #[inline]
    fn checked_shl(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_shl(self, rhs)
    }

    #[inline]
    fn checked_shr(self, rhs: Self) -> NumericResult<Self> {
        Int::checked_shr(self, rhs)
    }
}

impl<R: SignedBackend, P: Bounds> CheckedNeg for Int<R, P> {
    #[inline]
    fn checked_neg(self) -> NumericResult<Self> {
        Int::checked_neg(self)
    }
}

// ============================================================================
// Float Implementations
// ============================================================================

impl<R: FloatBackend, P: Bounds> CheckedArithmetic for Float<R, P> {
    const TYPE: NumericType = R::TYPE;

    #[inline]
    fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_mul(self, rhs)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_div(self, rhs)
    }

    #[inline]
    fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_rem(self, rhs)
    }

    #[inline]
    fn checked_pow(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_pow(self, rhs)
    }
}

impl<R: FloatBackend, P: Bounds> CheckedBitwise for Float<R, P> {
    #[inline]
    fn bit_or(self, rhs: Self) -> NumericResult<Self> {
        Float::bit_or(self, rhs)
    }

    #[inline]
    fn bit_and(self, rhs: Self) -> NumericResult<Self> {
        Float::bit_and(self, rhs)
    }

    #[inline]
    fn bit_xor(self, rhs: Self) -> NumericResult<Self> {
        Float::bit_xor(self, rhs)
    }

    #[inline]
    fn bit_not(self) -> NumericResult<Self> {
        Float::bit_not(self)
    }

    #[inline]
    fn checked_shl(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_shl(self, rhs)
    }

    #[inline]
    fn checked_shr(self, rhs: Self) -> NumericResult<Self> {
        Float::checked_shr(self, rhs)
    }
}

impl<R: FloatBackend, P: Bounds> CheckedNeg for Float<R, P> {
    #[inline]
    fn checked_neg(self) -> NumericResult<Self> {
        Float::checked_neg(self)
    }
}
