// SPDX-License-Identifier: MPL-2.0
//! GPS position and altitude as stored by EXIF.
//!
//! Both keep the raw fractions plus their reference tag so that nothing is
//! lost at extraction time. Conversion to signed decimals happens on demand.

use super::fraction::{Fraction, FractionError};
use std::fmt;
use thiserror::Error;

// =============================================================================
// ConversionError
// =============================================================================

/// Part of a degrees/minutes/seconds triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmsComponent {
    Degrees,
    Minutes,
    Seconds,
}

impl fmt::Display for DmsComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DmsComponent::Degrees => "degrees",
            DmsComponent::Minutes => "minutes",
            DmsComponent::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Error returned when a coordinate or altitude cannot be turned into a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("coordinate can't be converted to decimal ({component}): {source}")]
    Coordinate {
        component: DmsComponent,
        #[source]
        source: FractionError,
    },

    #[error("altitude can't be converted to decimal: {source}")]
    Altitude {
        #[source]
        source: FractionError,
    },
}

// =============================================================================
// Coordinate
// =============================================================================

/// Latitude or longitude as a degrees/minutes/seconds triple.
///
/// `reference` holds the raw hemisphere tag. Only `"S"` and `"W"` flip the
/// sign; anything else, including unknown letters, is treated as positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinate {
    pub degrees: Fraction,
    pub minutes: Fraction,
    pub seconds: Fraction,
    pub reference: String,
}

impl Coordinate {
    /// Returns `true` when no GPS component was ever set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.degrees.is_unset() && self.minutes.is_unset() && self.seconds.is_unset()
    }

    /// Sign applied by the hemisphere reference.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self.reference.as_str() {
            "S" | "W" => -1.0,
            _ => 1.0,
        }
    }

    /// Converts to signed decimal degrees.
    ///
    /// Components are converted in order; the first failing one aborts the
    /// conversion. The result is not range-checked.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Coordinate`] naming the failing component.
    pub fn to_decimal(&self) -> Result<f64, ConversionError> {
        let convert = |fraction: &Fraction, component| {
            fraction
                .to_decimal()
                .map_err(|source| ConversionError::Coordinate { component, source })
        };

        let degrees = convert(&self.degrees, DmsComponent::Degrees)?;
        let minutes = convert(&self.minutes, DmsComponent::Minutes)?;
        let seconds = convert(&self.seconds, DmsComponent::Seconds)?;

        Ok((degrees + minutes / 60.0 + seconds / 3600.0) * self.sign())
    }
}

// =============================================================================
// Altitude
// =============================================================================

/// Altitude in meters relative to sea level.
///
/// `reference` is the raw `GPSAltitudeRef` byte: 0 above sea level, 1 below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Altitude {
    pub value: Fraction,
    pub reference: u8,
}

impl Altitude {
    pub const ABOVE_SEA_LEVEL: u8 = 0;
    pub const BELOW_SEA_LEVEL: u8 = 1;

    /// Converts to signed decimal meters.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Altitude`] if the value has a 0 denominator.
    pub fn to_decimal(&self) -> Result<f64, ConversionError> {
        let value = self
            .value
            .to_decimal()
            .map_err(|source| ConversionError::Altitude { source })?;

        if self.reference == Self::BELOW_SEA_LEVEL {
            Ok(-value)
        } else {
            Ok(value)
        }
    }
}
