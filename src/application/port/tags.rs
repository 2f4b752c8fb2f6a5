// SPDX-License-Identifier: MPL-2.0
//! Tag source port definitions.
//!
//! The assembler never parses a container itself. It asks a [`TagSource`] to
//! locate the embedded tag block and then consumes the entries of that block
//! as a plain iterator of [`TagEntry`] values. Infrastructure adapters (see
//! `infrastructure::exif`) implement this trait on top of a tag-walking
//! library.
//!
//! # Design Notes
//!
//! - Payloads are exposed as [`RawValue`], a collaborator-neutral union of the
//!   EXIF value types the extractor understands
//! - Entry order is the container's native order
//! - The walk is single-pass: the consumer stops early by returning an error

use crate::domain::metadata::{Fraction, SignedFraction};
use crate::error::Result;
use std::borrow::Cow;
use std::fmt;

// =============================================================================
// TagName
// =============================================================================

/// Tags the extractor recognizes, named after their EXIF 2.2 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    Make,
    Model,
    LensModel,
    DateTimeOriginal,
    OffsetTimeOriginal,
    FNumber,
    ExposureTime,
    ShutterSpeedValue,
    IsoSpeedRatings,
    FocalLength,
    FocalLengthIn35mmFilm,
    Orientation,
    PixelXDimension,
    PixelYDimension,
    GpsLatitudeRef,
    GpsLatitude,
    GpsLongitudeRef,
    GpsLongitude,
    GpsAltitudeRef,
    GpsAltitude,
}

impl TagName {
    /// Every recognized tag.
    pub const ALL: [TagName; 20] = [
        TagName::Make,
        TagName::Model,
        TagName::LensModel,
        TagName::DateTimeOriginal,
        TagName::OffsetTimeOriginal,
        TagName::FNumber,
        TagName::ExposureTime,
        TagName::ShutterSpeedValue,
        TagName::IsoSpeedRatings,
        TagName::FocalLength,
        TagName::FocalLengthIn35mmFilm,
        TagName::Orientation,
        TagName::PixelXDimension,
        TagName::PixelYDimension,
        TagName::GpsLatitudeRef,
        TagName::GpsLatitude,
        TagName::GpsLongitudeRef,
        TagName::GpsLongitude,
        TagName::GpsAltitudeRef,
        TagName::GpsAltitude,
    ];

    /// EXIF name of the tag, as used in entries and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TagName::Make => "Make",
            TagName::Model => "Model",
            TagName::LensModel => "LensModel",
            TagName::DateTimeOriginal => "DateTimeOriginal",
            TagName::OffsetTimeOriginal => "OffsetTimeOriginal",
            TagName::FNumber => "FNumber",
            TagName::ExposureTime => "ExposureTime",
            TagName::ShutterSpeedValue => "ShutterSpeedValue",
            TagName::IsoSpeedRatings => "ISOSpeedRatings",
            TagName::FocalLength => "FocalLength",
            TagName::FocalLengthIn35mmFilm => "FocalLengthIn35mmFilm",
            TagName::Orientation => "Orientation",
            TagName::PixelXDimension => "PixelXDimension",
            TagName::PixelYDimension => "PixelYDimension",
            TagName::GpsLatitudeRef => "GPSLatitudeRef",
            TagName::GpsLatitude => "GPSLatitude",
            TagName::GpsLongitudeRef => "GPSLongitudeRef",
            TagName::GpsLongitude => "GPSLongitude",
            TagName::GpsAltitudeRef => "GPSAltitudeRef",
            TagName::GpsAltitude => "GPSAltitude",
        }
    }

    /// Looks a tag up by its EXIF name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<TagName> {
        TagName::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RawValue
// =============================================================================

/// Untyped tag payload as delivered by the tag source.
///
/// The `Debug` rendering doubles as the diagnostic shown in format errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Byte(Vec<u8>),
    /// NUL-separated strings, without terminators.
    Ascii(Vec<Vec<u8>>),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<Fraction>),
    SRational(Vec<SignedFraction>),
    /// Any other EXIF type; only its name and element count are kept.
    Other { kind: &'static str, count: usize },
}

impl RawValue {
    /// Number of elements in the payload.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            RawValue::Byte(v) => v.len(),
            RawValue::Ascii(v) => v.len(),
            RawValue::Short(v) => v.len(),
            RawValue::Long(v) => v.len(),
            RawValue::Rational(v) => v.len(),
            RawValue::SRational(v) => v.len(),
            RawValue::Other { count, .. } => *count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convenience constructor for a single ASCII string.
    #[must_use]
    pub fn text(value: &str) -> Self {
        RawValue::Ascii(vec![value.as_bytes().to_vec()])
    }
}

// =============================================================================
// TagEntry
// =============================================================================

/// One tag found while walking the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Directory the tag lives in (e.g., "IFD0", "IFD0/GPSInfo").
    pub ifd: Cow<'static, str>,
    /// EXIF name of the tag.
    pub name: Cow<'static, str>,
    pub value: RawValue,
}

impl TagEntry {
    #[must_use]
    pub fn new(
        ifd: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        value: RawValue,
    ) -> Self {
        Self {
            ifd: ifd.into(),
            name: name.into(),
            value,
        }
    }

    /// The recognized tag this entry carries, if any.
    #[must_use]
    pub fn tag(&self) -> Option<TagName> {
        TagName::from_name(&self.name)
    }
}

// =============================================================================
// TagSource Trait
// =============================================================================

/// Port for locating and walking the embedded tag block of a file.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a single source is shared by
/// concurrent extraction calls.
///
/// # Example
///
/// ```ignore
/// use capture_meta::application::port::tags::TagSource;
///
/// fn count_tags(source: &impl TagSource, bytes: &[u8]) -> usize {
///     match source.locate(bytes) {
///         Ok(Some(block)) => source.entries(&block).count(),
///         _ => 0,
///     }
/// }
/// ```
pub trait TagSource: Send + Sync {
    /// Parsed tag block.
    type Block;

    /// Finds and parses the tag block embedded in `bytes`.
    ///
    /// Returns `Ok(None)` when the input carries no metadata block at all.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::TagCollection`] if a block exists but
    /// cannot be parsed.
    fn locate(&self, bytes: &[u8]) -> Result<Option<Self::Block>>;

    /// Walks every tag entry of the block in container order.
    fn entries<'a>(&'a self, block: &'a Self::Block) -> impl Iterator<Item = TagEntry> + 'a;
}
