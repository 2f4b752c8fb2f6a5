// SPDX-License-Identifier: MPL-2.0
//! The normalized capture record.
//!
//! Pure domain types for media metadata with no knowledge of how the tags
//! were read.

use super::fraction::{Fraction, SignedFraction};
use super::geo::{Altitude, Coordinate};
use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Orientation
// =============================================================================

/// EXIF orientation (tag 0x0112).
///
/// Variants name the transformation a viewer has to apply to display the
/// stored pixels upright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Tag absent.
    #[default]
    Unspecified,
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90Cw,
    Transverse,
    Rotate90Ccw,
    /// Value outside the 1-8 range defined by EXIF.
    Other(u16),
}

impl Orientation {
    /// Maps the raw tag value.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90Cw,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate90Ccw,
            other => Orientation::Other(other),
        }
    }

    /// Raw tag value, 0 when unspecified.
    #[must_use]
    pub fn to_raw(self) -> u16 {
        match self {
            Orientation::Unspecified => 0,
            Orientation::Normal => 1,
            Orientation::FlipHorizontal => 2,
            Orientation::Rotate180 => 3,
            Orientation::FlipVertical => 4,
            Orientation::Transpose => 5,
            Orientation::Rotate90Cw => 6,
            Orientation::Transverse => 7,
            Orientation::Rotate90Ccw => 8,
            Orientation::Other(value) => value,
        }
    }

    /// Returns `true` when width and height swap on display.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90Cw
                | Orientation::Transverse
                | Orientation::Rotate90Ccw
        )
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Capture metadata of a single file.
///
/// Every field holds its zero value when the matching tag is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Camera manufacturer (e.g., "Apple", "FUJIFILM").
    pub make: String,
    /// Camera model (e.g., "iPhone 11 Pro Max").
    pub model: String,
    /// Lens model as reported by the camera.
    pub lens: String,
    /// Human-readable focal length (e.g., "6mm (52mm in 35mm format)").
    pub focal_length: String,

    /// Capture time, normalized to UTC.
    pub captured_at: Option<DateTime<Utc>>,

    pub f_number: Fraction,
    pub exposure_time: Fraction,
    /// APEX shutter speed value.
    pub shutter_speed: SignedFraction,
    pub iso_speed: u16,

    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub altitude: Altitude,

    pub orientation: Orientation,
    /// Pixel width declared in the tags (not decoded from the image).
    pub width: u32,
    /// Pixel height declared in the tags (not decoded from the image).
    pub height: u32,
}

impl Metadata {
    /// Returns `true` if no field was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }

    /// Returns `true` if a GPS position was recorded.
    #[must_use]
    pub fn has_gps(&self) -> bool {
        !self.latitude.is_unset() || !self.longitude.is_unset()
    }

    /// Decimal projection of the numeric fields for catalog storage.
    ///
    /// Values that cannot be converted (unset tags, zero denominators) become
    /// `None` instead of failing the whole record.
    #[must_use]
    pub fn decimals(&self) -> Decimals {
        Decimals {
            f_number: self.f_number.to_decimal().ok(),
            exposure_time: self.exposure_time.to_decimal().ok(),
            shutter_speed: self.shutter_speed.to_decimal().ok(),
            latitude: self.latitude.to_decimal().ok(),
            longitude: self.longitude.to_decimal().ok(),
            altitude: self.altitude.to_decimal().ok(),
        }
    }
}

/// Decimal values derived from a [`Metadata`] record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Decimals {
    pub f_number: Option<f64>,
    pub exposure_time: Option<f64>,
    pub shutter_speed: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
}
