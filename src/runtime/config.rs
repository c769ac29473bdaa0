// ============================================================================
// Runtime Configuration
// Dynamic validation of magnitudes against declared types
// ============================================================================

use crate::numeric::{policy, BoundsKind, Magnitude, NumericResult, NumericType, OverflowError};
use num_bigint::BigInt;
use num_traits::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for validating values whose declared type is only known at
/// run time.
///
/// Statically typed values carry their boundary rule in their type
/// parameter; this configuration governs [`RuntimeConfig::check`], which a
/// host uses for magnitudes it has not yet turned into a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuntimeConfig {
    /// Boundary rule applied by dynamic checks
    pub bounds: BoundsKind,
}

impl RuntimeConfig {
    /// Create a new configuration with the given boundary rule
    pub fn new(bounds: BoundsKind) -> Self {
        Self { bounds }
    }

    /// Builder method: Set the boundary rule
    pub fn with_bounds(mut self, bounds: BoundsKind) -> Self {
        self.bounds = bounds;
        self
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Check a magnitude against the declared range of `ty`.
    ///
    /// A fractional magnitude is never a member of an integer type and is
    /// reported as overflow.
    ///
    /// # Errors
    /// - `Overflow` if the magnitude is outside the range under `self.bounds`
    pub fn check(&self, ty: NumericType, magnitude: &Magnitude) -> NumericResult<()> {
        let admitted = match (ty.min(), ty.max()) {
            (Magnitude::Integer(min), Magnitude::Integer(max)) => match magnitude {
                Magnitude::Integer(value) => self.bounds.admits(value, &min, &max),
                Magnitude::Float(value) if value.fract() != 0.0 => false,
                Magnitude::Float(value) => BigInt::from_f64(*value)
                    .is_some_and(|value| self.bounds.admits(&value, &min, &max)),
                Magnitude::Unmaterialized(_) => false,
            },
            (min, max) => match (magnitude.to_f64(), min.to_f64(), max.to_f64()) {
                (Some(value), Some(min), Some(max)) => self.bounds.admits(&value, &min, &max),
                _ => false,
            },
        };

        if admitted {
            return Ok(());
        }
        let err = OverflowError::new(ty, magnitude.clone()).with_bounds(self.bounds);
        policy::reject(self.bounds, &err);
        Err(err.into())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::conventional()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl RuntimeConfig {
    /// Conventional fixed-width semantics
    /// - Inclusive bounds
    pub fn conventional() -> Self {
        Self::new(BoundsKind::Inclusive)
    }

    /// Behaviour generated code historically relied on
    /// - Exclusive bounds (both declared boundaries rejected)
    pub fn source_compatible() -> Self {
        Self::new(BoundsKind::Exclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_config_creation() {
        let config = RuntimeConfig::new(BoundsKind::Inclusive);
        assert_eq!(config.bounds, BoundsKind::Inclusive);
        assert_eq!(RuntimeConfig::default(), RuntimeConfig::conventional());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RuntimeConfig::conventional().with_bounds(BoundsKind::Exclusive);
        assert_eq!(config, RuntimeConfig::source_compatible());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(RuntimeConfig::conventional().bounds, BoundsKind::Inclusive);
        assert_eq!(RuntimeConfig::source_compatible().bounds, BoundsKind::Exclusive);
    }

    #[test]
    fn test_check_integer_bounds() {
        let inclusive = RuntimeConfig::conventional();
        let exclusive = RuntimeConfig::source_compatible();

        assert!(inclusive.check(NumericType::I8, &Magnitude::from(127)).is_ok());
        assert!(exclusive.check(NumericType::I8, &Magnitude::from(127)).is_err());
        assert!(exclusive.check(NumericType::I8, &Magnitude::from(126)).is_ok());
        assert!(inclusive
            .check(NumericType::U8, &Magnitude::from(-1))
            .unwrap_err()
            .is_overflow());
        assert!(inclusive
            .check(NumericType::U128, &Magnitude::Unmaterialized("2 ** 200000".into()))
            .is_err());
    }

    #[test]
    fn test_check_mixed_magnitudes() {
        let config = RuntimeConfig::conventional();
        assert!(config.check(NumericType::I16, &Magnitude::Float(300.0)).is_ok());
        assert!(config
            .check(NumericType::I16, &Magnitude::Float(1.5))
            .unwrap_err()
            .is_overflow());
        assert!(config.check(NumericType::I16, &Magnitude::Float(f64::INFINITY)).is_err());
        assert!(config.check(NumericType::I16, &Magnitude::Float(f64::NAN)).is_err());
        assert!(config.check(NumericType::F32, &Magnitude::from(1u8)).is_ok());
        assert!(config.check(NumericType::F32, &Magnitude::Float(3.5e38)).is_err());
    }

    #[test]
    fn test_check_reports_boundary_rule() {
        let err = RuntimeConfig::source_compatible()
            .check(NumericType::I8, &Magnitude::from(127))
            .unwrap_err();
        match err {
            NumericError::Overflow(err) => {
                assert_eq!(err.bounds, BoundsKind::Exclusive);
                assert_eq!(err.to_string(), "Int8 overflow: 127 is outside (-128, 127)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = RuntimeConfig::from_json(r#"{"bounds":"Exclusive"}"#).unwrap();
        assert_eq!(config, RuntimeConfig::source_compatible());
        assert!(RuntimeConfig::from_json(r#"{"bounds":"Sideways"}"#).is_err());
    }
}
