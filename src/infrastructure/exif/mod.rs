// SPDX-License-Identifier: MPL-2.0
//! `kamadak-exif` adapter implementing the [`TagSource`] port trait.
//!
//! # Design Notes
//!
//! - JPEG, TIFF, PNG, WebP and HEIF are handed to the library's container reader
//! - Other inputs are scanned for the `Exif\0\0` marker and parsed as raw TIFF
//! - Only the primary image directory and its children are walked; the
//!   thumbnail directory (IFD1) never reaches the assembler
//! - "No metadata" from the library is not an error; every other failure
//!   becomes [`Error::TagCollection`]
//!
//! [`TagSource`]: crate::application::port::TagSource

mod container;
mod index;

pub use container::{find_marker_block, Container, EXIF_MARKER};
pub use index::{ifd_mapping, tag_index, IfdMapping, TagIndex};

use crate::application::port::tags::{RawValue, TagEntry, TagSource};
use crate::domain::metadata::{Fraction, SignedFraction};
use crate::error::{Error, Result};
use exif::{In, Value};
use std::io::Cursor;

/// Tag source backed by `kamadak-exif`.
///
/// Stateless; one instance can serve any number of threads.
///
/// # Example
///
/// ```ignore
/// use capture_meta::application::port::TagSource;
/// use capture_meta::infrastructure::exif::ExifTagSource;
///
/// let source = ExifTagSource;
/// if let Some(block) = source.locate(&bytes)? {
///     for entry in source.entries(&block) {
///         println!("{}/{}", entry.ifd, entry.name);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTagSource;

impl TagSource for ExifTagSource {
    type Block = exif::Exif;

    fn locate(&self, bytes: &[u8]) -> Result<Option<Self::Block>> {
        let reader = exif::Reader::new();
        let container = Container::sniff(bytes);

        let parsed = if container.is_native() {
            reader.read_from_container(&mut Cursor::new(bytes))
        } else if let Some(block) = find_marker_block(bytes) {
            reader.read_raw(block.to_vec())
        } else {
            tracing::debug!(?container, "no exif marker found");
            return Ok(None);
        };

        match parsed {
            Ok(exif) => Ok(Some(exif)),
            Err(exif::Error::NotFound(_)) => {
                tracing::debug!(?container, "container carries no exif block");
                Ok(None)
            }
            Err(err) => Err(Error::TagCollection(err.to_string())),
        }
    }

    fn entries<'a>(&'a self, block: &'a Self::Block) -> impl Iterator<Item = TagEntry> + 'a {
        let index = tag_index();
        let mapping = ifd_mapping();
        block
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY)
            .map(move |field| {
                TagEntry::new(
                    mapping.path(field.ifd_num, field.tag),
                    index.name(field.tag),
                    raw_value(&field.value),
                )
            })
    }
}

/// Converts a library value into the port's payload type.
#[must_use]
pub fn raw_value(value: &Value) -> RawValue {
    match value {
        Value::Byte(bytes) => RawValue::Byte(bytes.clone()),
        Value::Ascii(strings) => RawValue::Ascii(strings.clone()),
        Value::Short(shorts) => RawValue::Short(shorts.clone()),
        Value::Long(longs) => RawValue::Long(longs.clone()),
        Value::Rational(rationals) => RawValue::Rational(
            rationals
                .iter()
                .map(|r| Fraction::new(r.num, r.denom))
                .collect(),
        ),
        Value::SRational(rationals) => RawValue::SRational(
            rationals
                .iter()
                .map(|r| SignedFraction::new(r.num, r.denom))
                .collect(),
        ),
        other => {
            let (kind, count) = summarize(other);
            RawValue::Other { kind, count }
        }
    }
}

/// Type name and element count of a value the extractor never decodes.
fn summarize(value: &Value) -> (&'static str, usize) {
    match value {
        Value::SByte(v) => ("SByte", v.len()),
        Value::Undefined(v, _) => ("Undefined", v.len()),
        Value::SShort(v) => ("SShort", v.len()),
        Value::SLong(v) => ("SLong", v.len()),
        Value::Float(v) => ("Float", v.len()),
        Value::Double(v) => ("Double", v.len()),
        Value::Unknown(_, count, _) => ("Unknown", *count as usize),
        _ => ("Unknown", 0),
    }
}
