// ============================================================================
// Overflow Policy
// Admissibility of a magnitude against a declared [MIN, MAX] range
// ============================================================================

use super::errors::{Magnitude, OverflowError};
use super::kind::NumericType;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the declared boundaries themselves are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundsKind {
    /// `MIN <= value <= MAX`, conventional fixed-width semantics
    #[default]
    Inclusive,

    /// `MIN < value < MAX`
    /// - Both declared boundaries are rejected
    /// - Matches the behaviour generated code historically relied on
    Exclusive,
}

impl BoundsKind {
    /// Pure admissibility predicate.
    ///
    /// Incomparable values (a NaN) are never admitted.
    #[inline]
    pub fn admits<M: PartialOrd>(self, value: &M, min: &M, max: &M) -> bool {
        match self {
            BoundsKind::Inclusive => value >= min && value <= max,
            BoundsKind::Exclusive => value > min && value < max,
        }
    }
}

impl fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsKind::Inclusive => f.write_str("inclusive"),
            BoundsKind::Exclusive => f.write_str("exclusive"),
        }
    }
}

/// Check `value` against `[min, max]` for `ty`.
///
/// # Errors
/// Returns an [`OverflowError`] carrying the value and the bounds if the
/// value is not admitted under `kind`.
pub fn check<M>(
    kind: BoundsKind,
    ty: NumericType,
    value: &M,
    min: &M,
    max: &M,
) -> Result<(), OverflowError>
where
    M: PartialOrd + Clone + Into<Magnitude>,
{
    if kind.admits(value, min, max) {
        return Ok(());
    }

    let err = OverflowError {
        ty,
        actual: value.clone().into(),
        min: min.clone().into(),
        max: max.clone().into(),
        bounds: kind,
    };
    reject(kind, &err);
    Err(err)
}

/// Log a rejection. Every overflow the crate reports passes through here.
pub(crate) fn reject(kind: BoundsKind, err: &OverflowError) {
    tracing::debug!(
        ty = %err.ty,
        actual = %err.actual,
        min = %err.min,
        max = %err.max,
        bounds = %kind,
        "overflow trap"
    );
}

/// Type-level boundary rule carried by every value type.
pub trait Bounds: Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    const KIND: BoundsKind;
}

/// Both declared boundaries are legal values (default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inclusive;

/// Both declared boundaries are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exclusive;

impl Bounds for Inclusive {
    const KIND: BoundsKind = BoundsKind::Inclusive;
}

impl Bounds for Exclusive {
    const KIND: BoundsKind = BoundsKind::Exclusive;
}
