// SPDX-License-Identifier: MPL-2.0
//! Field extractor: turns one tag entry into a typed field.

use super::shape::{decode, format_error, Decoded};
use crate::application::port::tags::{RawValue, TagEntry, TagName};
use crate::domain::metadata::{Fraction, Orientation, SignedFraction};
use crate::error::{Error, Result};
use chrono::NaiveDateTime;

/// Layout of `DateTimeOriginal`.
pub const CAPTURE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// A decoded value of a recognized tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Make(String),
    Model(String),
    Lens(String),
    /// Local capture time, before any offset is applied.
    CapturedAt(NaiveDateTime),
    /// Raw `OffsetTimeOriginal` text (e.g., "+01:00").
    TimeOffset(String),
    FNumber(Fraction),
    ExposureTime(Fraction),
    ShutterSpeed(SignedFraction),
    IsoSpeed(u16),
    FocalLength(Fraction),
    FocalLength35mm(u16),
    Orientation(Orientation),
    Width(u32),
    Height(u32),
    LatitudeRef(String),
    Latitude([Fraction; 3]),
    LongitudeRef(String),
    Longitude([Fraction; 3]),
    AltitudeRef(u8),
    Altitude(Fraction),
}

/// Extracts the field carried by `entry`.
///
/// Returns `Ok(None)` for tags the extractor does not recognize, and for
/// focal lengths whose element count is not one.
///
/// # Errors
///
/// Returns [`Error::FieldFormat`] when a recognized tag has the wrong shape and
/// [`Error::DateParse`] when the capture time cannot be parsed.
pub fn extract_field(entry: &TagEntry) -> Result<Option<FieldValue>> {
    match entry.tag() {
        Some(tag) => decode_field(tag, &entry.value),
        None => Ok(None),
    }
}

/// Decodes the payload of a recognized tag.
///
/// # Errors
///
/// See [`extract_field`].
pub fn decode_field(tag: TagName, raw: &RawValue) -> Result<Option<FieldValue>> {
    let Some(decoded) = decode(tag, raw)? else {
        return Ok(None);
    };
    let field = match (tag, decoded) {
        (TagName::Make, Decoded::Text(text)) => FieldValue::Make(text),
        (TagName::Model, Decoded::Text(text)) => FieldValue::Model(text),
        (TagName::LensModel, Decoded::Text(text)) => FieldValue::Lens(text),
        (TagName::DateTimeOriginal, Decoded::Text(text)) => {
            FieldValue::CapturedAt(parse_capture_time(&text)?)
        }
        (TagName::OffsetTimeOriginal, Decoded::Text(text)) => FieldValue::TimeOffset(text),
        (TagName::GpsLatitudeRef, Decoded::Text(text)) => FieldValue::LatitudeRef(text),
        (TagName::GpsLongitudeRef, Decoded::Text(text)) => FieldValue::LongitudeRef(text),

        (TagName::FNumber, Decoded::Rationals(&[value])) => FieldValue::FNumber(value),
        (TagName::ExposureTime, Decoded::Rationals(&[value])) => FieldValue::ExposureTime(value),
        (TagName::FocalLength, Decoded::Rationals(&[value])) => FieldValue::FocalLength(value),
        (TagName::GpsAltitude, Decoded::Rationals(&[value])) => FieldValue::Altitude(value),
        (TagName::GpsLatitude, Decoded::Rationals(&[d, m, s])) => FieldValue::Latitude([d, m, s]),
        (TagName::GpsLongitude, Decoded::Rationals(&[d, m, s])) => {
            FieldValue::Longitude([d, m, s])
        }
        (TagName::ShutterSpeedValue, Decoded::SignedRationals(&[value])) => {
            FieldValue::ShutterSpeed(value)
        }

        (TagName::IsoSpeedRatings, Decoded::Shorts(&[value])) => FieldValue::IsoSpeed(value),
        (TagName::FocalLengthIn35mmFilm, Decoded::Shorts(&[value])) => {
            FieldValue::FocalLength35mm(value)
        }
        (TagName::Orientation, Decoded::Shorts(&[value])) => {
            FieldValue::Orientation(Orientation::from_raw(value))
        }
        (TagName::PixelXDimension, Decoded::Shorts(&[value])) => {
            FieldValue::Width(u32::from(value))
        }
        (TagName::PixelXDimension, Decoded::Longs(&[value])) => FieldValue::Width(value),
        (TagName::PixelYDimension, Decoded::Shorts(&[value])) => {
            FieldValue::Height(u32::from(value))
        }
        (TagName::PixelYDimension, Decoded::Longs(&[value])) => FieldValue::Height(value),

        (TagName::GpsAltitudeRef, Decoded::Bytes(&[value])) => FieldValue::AltitudeRef(value),

        _ => return Err(format_error(tag, raw)),
    };
    Ok(Some(field))
}

/// Parses an EXIF capture time (`YYYY:MM:DD HH:MM:SS`).
///
/// # Errors
///
/// Returns [`Error::DateParse`] carrying the offending text.
pub fn parse_capture_time(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, CAPTURE_TIME_FORMAT).map_err(|source| Error::DateParse {
        value: text.to_string(),
        source,
    })
}
