// SPDX-License-Identifier: MPL-2.0
//! Expected payload shapes of recognized tags.
//!
//! Each tag declares its shape as data ([`TagName::shape`]); [`decode`] is the
//! only place that compares a raw payload against it.

use crate::application::port::tags::{RawValue, TagName};
use crate::domain::metadata::{Fraction, SignedFraction};
use crate::error::{Error, Result};

/// Element type a payload must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Ascii,
    Byte,
    Short,
    /// SHORT or LONG, both accepted.
    Integer,
    Rational,
    SignedRational,
}

/// Element type and exact element count of a tag payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ValueKind,
    pub count: usize,
    /// A count mismatch fails the extraction; otherwise the tag is skipped.
    pub strict: bool,
}

impl Shape {
    const fn of(kind: ValueKind, count: usize) -> Self {
        Self {
            kind,
            count,
            strict: true,
        }
    }

    const fn lenient(kind: ValueKind, count: usize) -> Self {
        Self {
            kind,
            count,
            strict: false,
        }
    }
}

impl TagName {
    /// Payload shape this tag must carry.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            TagName::Make
            | TagName::Model
            | TagName::LensModel
            | TagName::DateTimeOriginal
            | TagName::OffsetTimeOriginal
            | TagName::GpsLatitudeRef
            | TagName::GpsLongitudeRef => Shape::of(ValueKind::Ascii, 1),
            TagName::FNumber | TagName::ExposureTime | TagName::GpsAltitude => {
                Shape::of(ValueKind::Rational, 1)
            }
            TagName::FocalLength => Shape::lenient(ValueKind::Rational, 1),
            TagName::GpsLatitude | TagName::GpsLongitude => Shape::of(ValueKind::Rational, 3),
            TagName::ShutterSpeedValue => Shape::of(ValueKind::SignedRational, 1),
            TagName::IsoSpeedRatings | TagName::Orientation => Shape::of(ValueKind::Short, 1),
            TagName::FocalLengthIn35mmFilm => Shape::lenient(ValueKind::Short, 1),
            TagName::PixelXDimension | TagName::PixelYDimension => {
                Shape::of(ValueKind::Integer, 1)
            }
            TagName::GpsAltitudeRef => Shape::of(ValueKind::Byte, 1),
        }
    }
}

/// Payload that matched its tag's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    Text(String),
    Bytes(&'a [u8]),
    Shorts(&'a [u16]),
    Longs(&'a [u32]),
    Rationals(&'a [Fraction]),
    SignedRationals(&'a [SignedFraction]),
}

/// Builds the format error for `tag` with a diagnostic rendering of `raw`.
///
/// ASCII payloads are shown as text, with invalid UTF-8 replaced.
pub fn format_error(tag: TagName, raw: &RawValue) -> Error {
    let raw = match raw {
        RawValue::Ascii(strings) => {
            let texts: Vec<_> = strings.iter().map(|s| String::from_utf8_lossy(s)).collect();
            format!("Ascii({texts:?})")
        }
        other => format!("{other:?}"),
    };
    Error::FieldFormat { tag, raw }
}

/// Checks `raw` against the shape of `tag`.
///
/// ASCII payloads may carry trailing empty strings (NUL padding written by
/// some cameras); those are dropped before counting, and a payload holding
/// only padding is the empty string.
///
/// Returns `Ok(None)` when a lenient tag has the right type but the wrong
/// element count.
///
/// # Errors
///
/// Returns [`Error::FieldFormat`] on a type mismatch, a count mismatch of a
/// strict tag, or when a string is not valid UTF-8.
pub fn decode(tag: TagName, raw: &RawValue) -> Result<Option<Decoded<'_>>> {
    let shape = tag.shape();
    let mismatch = || format_error(tag, raw);

    let decoded = match (shape.kind, raw) {
        (ValueKind::Ascii, RawValue::Ascii(strings)) => {
            let used = strings
                .iter()
                .rposition(|s| !s.is_empty())
                .map_or(0, |last| last + 1);
            let Some(first) = strings.first() else {
                return Err(mismatch());
            };
            if used > shape.count {
                return Err(mismatch());
            }
            let text = std::str::from_utf8(first).map_err(|_| mismatch())?;
            Decoded::Text(text.to_string())
        }
        (ValueKind::Byte, RawValue::Byte(v)) => Decoded::Bytes(v),
        (ValueKind::Short | ValueKind::Integer, RawValue::Short(v)) => Decoded::Shorts(v),
        (ValueKind::Integer, RawValue::Long(v)) => Decoded::Longs(v),
        (ValueKind::Rational, RawValue::Rational(v)) => Decoded::Rationals(v),
        (ValueKind::SignedRational, RawValue::SRational(v)) => Decoded::SignedRationals(v),
        _ => return Err(mismatch()),
    };

    if !matches!(decoded, Decoded::Text(_)) && raw.len() != shape.count {
        if shape.strict {
            return Err(mismatch());
        }
        tracing::debug!(%tag, count = raw.len(), "skipping tag with unexpected element count");
        return Ok(None);
    }

    Ok(Some(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_string_decodes() {
        let raw = RawValue::text("Apple");
        assert_eq!(
            decode(TagName::Make, &raw).unwrap(),
            Some(Decoded::Text("Apple".to_string()))
        );
    }

    #[test]
    fn blank_string_decodes_as_empty_text() {
        let raw = RawValue::Ascii(vec![Vec::new()]);
        assert_eq!(
            decode(TagName::LensModel, &raw).unwrap(),
            Some(Decoded::Text(String::new()))
        );

        let raw = RawValue::Ascii(vec![Vec::new(), Vec::new()]);
        assert_eq!(
            decode(TagName::Make, &raw).unwrap(),
            Some(Decoded::Text(String::new()))
        );
    }

    #[test]
    fn nul_padding_is_ignored() {
        let raw = RawValue::Ascii(vec![b"FUJIFILM".to_vec(), Vec::new(), Vec::new()]);
        assert_eq!(
            decode(TagName::Make, &raw).unwrap(),
            Some(Decoded::Text("FUJIFILM".to_string()))
        );
    }

    #[test]
    fn multiple_strings_are_rejected() {
        let raw = RawValue::Ascii(vec![b"Apple".to_vec(), b"Inc".to_vec()]);
        let err = decode(TagName::Make, &raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Make was not in expected format: Ascii([\"Apple\", \"Inc\"])"
        );
    }

    #[test]
    fn ascii_diagnostic_replaces_invalid_utf8() {
        let raw = RawValue::Ascii(vec![b"Ap".to_vec(), vec![0xFF]]);
        let err = format_error(TagName::Model, &raw);
        assert_eq!(
            err.to_string(),
            "Model was not in expected format: Ascii([\"Ap\", \"\u{fffd}\"])"
        );
    }

    #[test]
    fn empty_ascii_is_rejected() {
        let raw = RawValue::Ascii(Vec::new());
        assert!(matches!(
            decode(TagName::Model, &raw),
            Err(Error::FieldFormat {
                tag: TagName::Model,
                ..
            })
        ));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let raw = RawValue::Ascii(vec![vec![0xC3, 0x28]]);
        assert!(decode(TagName::LensModel, &raw).is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let raw = RawValue::Short(vec![2]);
        let err = decode(TagName::FNumber, &raw).unwrap_err();
        assert_eq!(err.to_string(), "FNumber was not in expected format: Short([2])");
    }

    #[test]
    fn wrong_count_is_rejected() {
        let raw = RawValue::Rational(vec![Fraction::new(2, 1), Fraction::new(4, 1)]);
        assert!(decode(TagName::FNumber, &raw).is_err());

        let raw = RawValue::Rational(vec![Fraction::new(51, 1), Fraction::new(33, 1)]);
        assert!(decode(TagName::GpsLatitude, &raw).is_err());
    }

    #[test]
    fn focal_lengths_with_wrong_count_are_skipped() {
        let raw = RawValue::Rational(vec![Fraction::new(6, 1), Fraction::new(6, 1)]);
        assert_eq!(decode(TagName::FocalLength, &raw).unwrap(), None);
        assert_eq!(decode(TagName::FocalLength, &RawValue::Rational(vec![])).unwrap(), None);
        assert_eq!(
            decode(TagName::FocalLengthIn35mmFilm, &RawValue::Short(vec![52, 52])).unwrap(),
            None
        );
    }

    #[test]
    fn focal_lengths_still_check_the_type() {
        assert!(decode(TagName::FocalLength, &RawValue::Short(vec![6])).is_err());
        assert!(decode(TagName::FocalLengthIn35mmFilm, &RawValue::Long(vec![52])).is_err());
    }

    #[test]
    fn unsigned_rational_is_not_a_signed_rational() {
        let raw = RawValue::Rational(vec![Fraction::new(328_711, 47_450)]);
        assert!(decode(TagName::ShutterSpeedValue, &raw).is_err());
    }

    #[test]
    fn integer_accepts_short_and_long() {
        assert_eq!(
            decode(TagName::PixelXDimension, &RawValue::Short(vec![4032])).unwrap(),
            Some(Decoded::Shorts(&[4032]))
        );
        assert_eq!(
            decode(TagName::PixelXDimension, &RawValue::Long(vec![7728])).unwrap(),
            Some(Decoded::Longs(&[7728]))
        );
    }

    #[test]
    fn short_does_not_accept_long() {
        assert!(decode(TagName::IsoSpeedRatings, &RawValue::Long(vec![100])).is_err());
    }

    #[test]
    fn altitude_ref_needs_exactly_one_byte() {
        assert!(decode(TagName::GpsAltitudeRef, &RawValue::Byte(vec![0])).is_ok());
        assert!(decode(TagName::GpsAltitudeRef, &RawValue::Byte(vec![])).is_err());
        assert!(decode(TagName::GpsAltitudeRef, &RawValue::Byte(vec![0, 1])).is_err());
    }

    #[test]
    fn unsupported_types_are_rejected_with_summary() {
        let raw = RawValue::Other {
            kind: "Undefined",
            count: 4,
        };
        let err = decode(TagName::GpsAltitudeRef, &raw).unwrap_err();
        assert!(err.to_string().contains("Other { kind: \"Undefined\", count: 4 }"));
    }
}
