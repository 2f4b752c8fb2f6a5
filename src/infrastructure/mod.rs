// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies.
//!
//! # Available Adapters
//!
//! - [`exif`]: Tag walking via `kamadak-exif` (implements [`TagSource`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Library types never leak past the adapter; entries use port types
//!
//! [`TagSource`]: crate::application::port::TagSource

pub mod exif;

// Re-export main types for convenience
pub use self::exif::ExifTagSource;
