// SPDX-License-Identifier: MPL-2.0
//! Media-level entry points.
//!
//! - [`metadata`]: Capture metadata extraction from photo and video bytes

pub mod metadata;

pub use metadata::{extract_metadata, extract_metadata_with};
