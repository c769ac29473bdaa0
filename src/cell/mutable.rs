// ============================================================================
// Mutable Cell
// In-place compound assignment built from the pure checked operations
// ============================================================================

use crate::interfaces::{CheckedArithmetic, CheckedBitwise, CheckedNeg};
use crate::numeric::NumericResult;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single mutable slot holding one value.
///
/// Numeric values never change in place; a `Mut` is the only way to express
/// `x += y` style updates. Every compound assignment computes the pure result
/// first and writes it only on success, so a failed operation leaves the
/// cell holding its previous value.
///
/// Compound assignments return `&mut Self` so they chain with `?`:
///
/// ```
/// use checked_runtime::cell::Mut;
/// use checked_runtime::numeric::I32;
///
/// let mut x = Mut::new(I32::new(20)?);
/// x.add_assign(I32::new(10)?)?.mul_assign(I32::new(2)?)?;
/// assert_eq!(x.get().value(), 60);
/// # Ok::<(), checked_runtime::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mut<T> {
    value: T,
}

// ==== Construction and Access ====

impl<T> Mut<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Copy of the current value.
    #[inline]
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Unconditional write. The value was validated when it was built.
    #[inline]
    pub fn assign(&mut self, value: T) {
        self.value = value;
    }

    /// Write `value` and return the previous one.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Compute a new value from the current one and store it on success.
    ///
    /// # Errors
    /// Returns whatever `f` returns; the cell is not written in that case.
    pub fn update<E, F>(&mut self, f: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        self.value = f(&self.value)?;
        Ok(self)
    }
}

impl<T: fmt::Debug> Mut<T> {
    fn apply<F>(&mut self, op: &'static str, f: F) -> NumericResult<&mut Self>
    where
        F: FnOnce(&T) -> NumericResult<T>,
    {
        match f(&self.value) {
            Ok(next) => {
                self.value = next;
                Ok(self)
            }
            Err(err) => {
                tracing::debug!(
                    op,
                    current = ?self.value,
                    error = %err,
                    "compound assignment rejected"
                );
                Err(err)
            }
        }
    }
}

// ==== Compound Assignment ====

impl<T: CheckedArithmetic + fmt::Debug> Mut<T> {
    /// `x += rhs`
    ///
    /// # Errors
    /// Returns `Overflow` if the sum is out of range; the cell is unchanged.
    pub fn add_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("add", |v| v.checked_add(rhs))
    }

    pub fn sub_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("sub", |v| v.checked_sub(rhs))
    }

    pub fn mul_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("mul", |v| v.checked_mul(rhs))
    }

    /// `x /= rhs`
    ///
    /// # Errors
    /// - `DivideByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is out of range
    pub fn div_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("div", |v| v.checked_div(rhs))
    }

    pub fn rem_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("rem", |v| v.checked_rem(rhs))
    }

    pub fn pow_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("pow", |v| v.checked_pow(rhs))
    }
}

impl<T: CheckedBitwise + fmt::Debug> Mut<T> {
    pub fn shl_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("shl", |v| v.checked_shl(rhs))
    }

    pub fn shr_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("shr", |v| v.checked_shr(rhs))
    }

    pub fn bit_or_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("bit_or", |v| v.bit_or(rhs))
    }

    pub fn bit_and_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("bit_and", |v| v.bit_and(rhs))
    }

    pub fn bit_xor_assign(&mut self, rhs: T) -> NumericResult<&mut Self> {
        self.apply("bit_xor", |v| v.bit_xor(rhs))
    }

    /// `x = ~x`
    pub fn not_assign(&mut self) -> NumericResult<&mut Self> {
        self.apply("bit_not", |v| v.bit_not())
    }
}

impl<T: CheckedNeg + fmt::Debug> Mut<T> {
    /// `x = -x`
    ///
    /// # Errors
    /// Returns `Overflow` when negating the most negative value.
    pub fn neg_assign(&mut self) -> NumericResult<&mut Self> {
        self.apply("neg", |v| v.checked_neg())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> AsRef<T> for Mut<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Mut<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Mut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mut").field(&self.value).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Mut<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
