// SPDX-License-Identifier: MPL-2.0
//! Capture metadata extraction use case.
//!
//! Ties a [`TagSource`] to the [`assembler`]: locate the tag block, walk its
//! entries, fold them into a [`Metadata`] record.
//!
//! # Example
//!
//! ```ignore
//! use capture_meta::application::extract::extract_with_source;
//! use capture_meta::config::ExtractorConfig;
//! use capture_meta::infrastructure::exif::ExifTagSource;
//!
//! let metadata = extract_with_source(&ExifTagSource, &bytes, &ExtractorConfig::default())?;
//! println!("{} {}", metadata.make, metadata.model);
//! ```

pub mod assembler;
pub mod fields;
pub mod shape;

pub use assembler::{assemble, MetadataAssembler};
pub use fields::{extract_field, FieldValue};

use crate::application::port::tags::TagSource;
use crate::config::ExtractorConfig;
use crate::domain::metadata::Metadata;
use crate::error::Result;

/// Extracts capture metadata from `bytes` through `source`.
///
/// Input without any embedded tag block yields an empty record.
///
/// # Errors
///
/// Returns [`crate::error::Error::TagCollection`] when the block cannot be
/// parsed, or the first field failure met during the walk.
pub fn extract_with_source<S: TagSource>(
    source: &S,
    bytes: &[u8],
    config: &ExtractorConfig,
) -> Result<Metadata> {
    let Some(block) = source.locate(bytes)? else {
        tracing::debug!(len = bytes.len(), "no metadata block found");
        return Ok(Metadata::default());
    };

    let metadata = assemble(source.entries(&block), config)?;
    tracing::debug!(
        make = %metadata.make,
        model = %metadata.model,
        has_gps = metadata.has_gps(),
        "metadata extracted"
    );
    Ok(metadata)
}
