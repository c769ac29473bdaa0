// ============================================================================
// Declared Numeric Types
// The fixed table of widths, signedness and bounds
// ============================================================================

use super::errors::Magnitude;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every fixed-width numeric type the runtime declares.
///
/// This is the run-time mirror of the static value types: errors name the
/// type that rejected a value through it, and [`RuntimeConfig`] uses it to
/// validate magnitudes whose target type is only known at run time.
///
/// [`RuntimeConfig`]: crate::runtime::RuntimeConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericType {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
}

impl NumericType {
    /// All declared types, signed integers first.
    pub const ALL: [NumericType; 14] = [
        NumericType::I8,
        NumericType::I16,
        NumericType::I32,
        NumericType::I64,
        NumericType::I128,
        NumericType::Isize,
        NumericType::U8,
        NumericType::U16,
        NumericType::U32,
        NumericType::U64,
        NumericType::U128,
        NumericType::Usize,
        NumericType::F32,
        NumericType::F64,
    ];

    /// Declared bit width. `Isize` and `Usize` are 64 bits on every host.
    pub const fn width(self) -> u32 {
        match self {
            NumericType::I8 | NumericType::U8 => 8,
            NumericType::I16 | NumericType::U16 => 16,
            NumericType::I32 | NumericType::U32 | NumericType::F32 => 32,
            NumericType::I64
            | NumericType::U64
            | NumericType::Isize
            | NumericType::Usize
            | NumericType::F64 => 64,
            NumericType::I128 | NumericType::U128 => 128,
        }
    }

    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericType::U8
                | NumericType::U16
                | NumericType::U32
                | NumericType::U64
                | NumericType::U128
                | NumericType::Usize
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, NumericType::F32 | NumericType::F64)
    }

    /// Declared name, as generated code spells it.
    pub const fn name(self) -> &'static str {
        match self {
            NumericType::I8 => "Int8",
            NumericType::I16 => "Int16",
            NumericType::I32 => "Int32",
            NumericType::I64 => "Int64",
            NumericType::I128 => "Int128",
            NumericType::Isize => "Isize",
            NumericType::U8 => "Uint8",
            NumericType::U16 => "Uint16",
            NumericType::U32 => "Uint32",
            NumericType::U64 => "Uint64",
            NumericType::U128 => "Uint128",
            NumericType::Usize => "Usize",
            NumericType::F32 => "Float32",
            NumericType::F64 => "Float64",
        }
    }

    /// Short Rust-style spelling (`i16`, `f64`, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            NumericType::I8 => "i8",
            NumericType::I16 => "i16",
            NumericType::I32 => "i32",
            NumericType::I64 => "i64",
            NumericType::I128 => "i128",
            NumericType::Isize => "isize",
            NumericType::U8 => "u8",
            NumericType::U16 => "u16",
            NumericType::U32 => "u32",
            NumericType::U64 => "u64",
            NumericType::U128 => "u128",
            NumericType::Usize => "usize",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }

    /// Declared minimum.
    pub fn min(self) -> Magnitude {
        match self {
            NumericType::I8 => i8::MIN.into(),
            NumericType::I16 => i16::MIN.into(),
            NumericType::I32 => i32::MIN.into(),
            NumericType::I64 | NumericType::Isize => i64::MIN.into(),
            NumericType::I128 => i128::MIN.into(),
            NumericType::U8
            | NumericType::U16
            | NumericType::U32
            | NumericType::U64
            | NumericType::U128
            | NumericType::Usize => 0u8.into(),
            NumericType::F32 => f64::from(f32::MIN).into(),
            NumericType::F64 => f64::MIN.into(),
        }
    }

    /// Declared maximum.
    pub fn max(self) -> Magnitude {
        match self {
            NumericType::I8 => i8::MAX.into(),
            NumericType::I16 => i16::MAX.into(),
            NumericType::I32 => i32::MAX.into(),
            NumericType::I64 | NumericType::Isize => i64::MAX.into(),
            NumericType::I128 => i128::MAX.into(),
            NumericType::U8 => u8::MAX.into(),
            NumericType::U16 => u16::MAX.into(),
            NumericType::U32 => u32::MAX.into(),
            NumericType::U64 | NumericType::Usize => u64::MAX.into(),
            NumericType::U128 => u128::MAX.into(),
            NumericType::F32 => f64::from(f32::MAX).into(),
            NumericType::F64 => f64::MAX.into(),
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl NumericType {
    /// Look a type up by its declared name (`Int16`) or its short
    /// spelling (`i16`). Names are matched exactly.
    pub fn from_name(name: &str) -> Option<NumericType> {
        NumericType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == name || ty.short_name() == name)
    }
}
