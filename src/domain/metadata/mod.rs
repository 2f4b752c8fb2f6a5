// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides the value types a capture record is made of:
//! - [`Fraction`] / [`SignedFraction`]: exact EXIF rationals
//! - [`Coordinate`] / [`Altitude`]: GPS position with hemisphere and sea-level signs
//! - [`Metadata`]: the normalized record handed to the catalog
//!
//! Decimal conversion is always explicit and fallible; extraction never
//! converts.

mod fraction;
mod geo;
mod types;

pub use fraction::{Fraction, FractionError, SignedFraction};
pub use geo::{Altitude, ConversionError, Coordinate, DmsComponent};
pub use types::{Decimals, Metadata, Orientation};
