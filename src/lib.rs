// ============================================================================
// Checked Runtime Library
// Overflow-trapping numeric values, mutable cells and result containers
// ============================================================================

//! # Checked Runtime
//!
//! Runtime support for generated code whose numeric types have a fixed
//! declared width and must never silently wrap.
//!
//! ## Features
//!
//! - **Fixed-width integers and floats** (`I8` ... `U128`, `Isize`, `Usize`,
//!   `F32`, `F64`) where every operation is checked against the exact result
//! - **Explicit boundary rule** per type: inclusive by default, exclusive on
//!   request
//! - **Mutable cells** for compound assignment that never half-apply
//! - **Success/failure containers** with state-checked accessors
//! - **Run-time validation** of magnitudes against a declared type
//!
//! ## Example
//!
//! ```rust
//! use checked_runtime::prelude::*;
//!
//! let a = I16::new(20)?;
//! let b = I16::new(10)?;
//! assert_eq!(a.checked_add(b)?.value(), 30);
//!
//! // Overflow is an error, never a wrapped value
//! let err = I16::MAX.checked_add(I16::ONE).unwrap_err();
//! assert!(err.is_overflow());
//!
//! // Compound assignment goes through a cell
//! let mut x = Mut::new(a);
//! x.add_assign(b)?.mul_assign(I16::new(2)?)?;
//! assert_eq!(x.get().value(), 60);
//!
//! // Results that carry a domain failure
//! let outcome: Exception<I16, String> = Exception::from_parts(Some(a), None)?;
//! assert_eq!(outcome.get()?.value(), 20);
//! # Ok::<(), checked_runtime::RuntimeError>(())
//! ```

pub mod cell;
mod error;
pub mod exception;
pub mod interfaces;
pub mod numeric;
pub mod runtime;

pub use error::{RuntimeError, RuntimeResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::cell::Mut;
    pub use crate::exception::{Exception, ExceptionState, InvalidStateError};
    pub use crate::interfaces::{CheckedArithmetic, CheckedBitwise, CheckedNeg};
    pub use crate::numeric::{
        BoundsKind, Exclusive, Float, Inclusive, Int, NumericError, NumericResult, NumericType,
        F32, F64, I128, I16, I32, I64, I8, Isize, IsizeRepr, U128, U16, U32, U64, U8, Usize,
        UsizeRepr,
    };
    pub use crate::runtime::RuntimeConfig;
    pub use crate::{RuntimeError, RuntimeResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::Magnitude;

    #[test]
    fn test_overflow_reports_value_and_bounds() {
        let sum = I16::new(20).unwrap().checked_add(I16::new(10).unwrap());
        assert_eq!(sum.unwrap().value(), 30);

        let err = I16::new(32767)
            .unwrap()
            .checked_add(I16::new(1).unwrap())
            .unwrap_err();
        match err {
            NumericError::Overflow(err) => {
                assert_eq!(err.actual, Magnitude::from(32768));
                assert_eq!(err.min, Magnitude::from(-32768));
                assert_eq!(err.max, Magnitude::from(32767));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_divide_by_zero_and_float_range() {
        let err = U8::new(200).unwrap().checked_div(U8::new(0).unwrap()).unwrap_err();
        assert!(err.is_divide_by_zero());

        assert!(F32::from_magnitude(3.5e38).unwrap_err().is_overflow());
    }

    #[test]
    fn test_cell_and_container_together() -> RuntimeResult<()> {
        let mut total = Mut::new(U16::ZERO);
        let inputs = [U16::new(100)?, U16::new(200)?, U16::new(65_300)?];

        let outcome: Exception<U16, NumericError> = inputs
            .iter()
            .try_fold((), |_, &v| total.add_assign(v).map(|_| ()))
            .map(|_| total.get())
            .into();

        assert!(outcome.is_failure());
        assert!(outcome.get_failure()?.is_overflow());
        // The failing addition did not touch the running total
        assert_eq!(total.get().value(), 300);
        assert_eq!(
            outcome.get().unwrap_err(),
            InvalidStateError::WrongState {
                expected: ExceptionState::Success,
                found: ExceptionState::Failure,
            }
        );
        Ok(())
    }

    #[test]
    fn test_runtime_check_to_typed_value() -> RuntimeResult<()> {
        let ty = NumericType::from_name("Int16").unwrap();
        let magnitude = Magnitude::from(-1234);
        RuntimeConfig::conventional().check(ty, &magnitude)?;
        let value = I16::from_magnitude(magnitude.as_big_int().cloned().unwrap_or_default())?;
        assert_eq!(value.value(), -1234);

        assert!(RuntimeConfig::source_compatible()
            .check(ty, &Magnitude::from(32767))
            .unwrap_err()
            .is_overflow());
        Ok(())
    }

    #[test]
    fn test_exclusive_types_reject_declared_boundaries() {
        assert!(Int::<u8, Exclusive>::new(255).is_err());
        assert!(Int::<u8, Exclusive>::new(0).is_err());
        let one = Int::<u8, Exclusive>::new(1).unwrap();
        assert!(one.checked_sub(one).is_err());
    }

    #[test]
    fn test_generic_code_over_declared_types() {
        fn triple<T: CheckedArithmetic>(v: T) -> NumericResult<T> {
            v.checked_add(v)?.checked_add(v)
        }
        assert_eq!(triple(I8::new(42).unwrap()).unwrap().value(), 126);
        assert!(triple(I8::new(43).unwrap()).is_err());
        assert_eq!(triple(F64::new(0.5).unwrap()).unwrap().value(), 1.5);
    }
}
