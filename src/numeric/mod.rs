// ============================================================================
// Numeric Module
// Overflow-checked fixed-width integers and floats
// ============================================================================
//
// This module provides:
// - Int<R, P>: fixed-width integer over a primitive backend
// - Float<R, P>: fixed-width float computed in f64
// - BoundsKind / Bounds: inclusive or exclusive boundary rule
// - NumericError: overflow and division by zero
// - I8 ... Usize, F32, F64 aliases for the declared types
//
// Design principles:
// - Values are immutable; every operation returns a new value or an error
// - No wrapping, saturation or clamping
// - Overflow is detected against the exact mathematical result
// - Operands of one operation always share a declared type

mod backend;
mod errors;
mod float;
mod integer;
mod kind;
pub(crate) mod policy;
mod range;

pub use backend::{FloatBackend, IntBackend, IsizeRepr, SignedBackend, UsizeRepr};
pub use errors::{DivideByZeroError, Magnitude, NumericError, NumericResult, OverflowError};
pub use float::{Float, F32, F64};
pub use integer::{Int, I128, I16, I32, I64, I8, Isize, U128, U16, U32, U64, U8, Usize};
pub use kind::NumericType;
pub use policy::{check, Bounds, BoundsKind, Exclusive, Inclusive};
pub use range::IntRange;
