// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types.
//!
//! This module contains pure domain types and the arithmetic rules attached to
//! them. It knows nothing about EXIF containers or how tags are read, which
//! keeps every rule testable without fixture files.
//!
//! # Modules
//!
//! - [`metadata`]: Capture metadata types ([`Fraction`](metadata::Fraction),
//!   [`Coordinate`](metadata::Coordinate), [`Altitude`](metadata::Altitude),
//!   [`Metadata`](metadata::Metadata))

pub mod metadata;
