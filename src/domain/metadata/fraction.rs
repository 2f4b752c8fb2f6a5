// SPDX-License-Identifier: MPL-2.0
//! Exact rational values as stored by EXIF.
//!
//! Values are kept as numerator/denominator pairs until a caller explicitly
//! asks for a decimal. A zero denominator is a legal state (unset tag or raw
//! malformed input) that only becomes an error on conversion.

use std::fmt;
use thiserror::Error;

// =============================================================================
// FractionError
// =============================================================================

/// Error returned when a fraction cannot be turned into a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("fraction with 0 denominator cannot be converted to decimal")]
    ZeroDenominator,
}

// =============================================================================
// Fraction
// =============================================================================

/// Unsigned rational value (EXIF `RATIONAL`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `true` when both parts are zero, i.e. the tag was never set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    /// Converts the fraction to a 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] when the denominator is 0.
    pub fn to_decimal(&self) -> Result<f64, FractionError> {
        if self.denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(f64::from(self.numerator) / f64::from(self.denominator))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// =============================================================================
// SignedFraction
// =============================================================================

/// Signed rational value (EXIF `SRATIONAL`), e.g. the APEX shutter speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignedFraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl SignedFraction {
    #[must_use]
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.numerator == 0 && self.denominator == 0
    }

    /// Converts the fraction to a 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::ZeroDenominator`] when the denominator is 0.
    pub fn to_decimal(&self) -> Result<f64, FractionError> {
        if self.denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(f64::from(self.numerator) / f64::from(self.denominator))
    }
}

impl fmt::Display for SignedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn simple_fraction_converts() {
        let fraction = Fraction::new(5, 2);
        assert_eq!(fraction.to_decimal(), Ok(2.5));
    }

    #[test]
    fn repeating_fraction_keeps_full_precision() {
        let fraction = Fraction::new(1, 3);
        assert_eq!(fraction.to_decimal(), Ok(0.3333333333333333));
    }

    #[test]
    fn zero_denominator_fails_with_stable_message() {
        let err = Fraction::new(5, 0).to_decimal().unwrap_err();
        assert_eq!(err, FractionError::ZeroDenominator);
        assert_eq!(
            err.to_string(),
            "fraction with 0 denominator cannot be converted to decimal"
        );
    }

    #[test]
    fn default_fraction_is_unset_and_fails_conversion() {
        let fraction = Fraction::default();
        assert!(fraction.is_unset());
        assert!(fraction.to_decimal().is_err());
    }

    #[test]
    fn large_parts_do_not_overflow() {
        let fraction = Fraction::new(u32::MAX, 1);
        assert_abs_diff_eq!(fraction.to_decimal().unwrap(), 4_294_967_295.0);
    }

    #[test]
    fn signed_fraction_keeps_sign() {
        assert_eq!(SignedFraction::new(-3, 2).to_decimal(), Ok(-1.5));
        assert_eq!(SignedFraction::new(3, -2).to_decimal(), Ok(-1.5));
    }

    #[test]
    fn signed_fraction_zero_denominator_fails() {
        assert_eq!(
            SignedFraction::new(328_711, 0).to_decimal(),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn display_renders_ratio() {
        assert_eq!(Fraction::new(56, 10).to_string(), "56/10");
        assert_eq!(SignedFraction::new(-1, 3).to_string(), "-1/3");
    }
}
