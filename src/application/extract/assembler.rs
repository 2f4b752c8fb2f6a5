// SPDX-License-Identifier: MPL-2.0
//! Metadata assembler: folds tag entries into a [`Metadata`] record.
//!
//! Entries are fed one at a time. Each recognized entry is decoded by the
//! field extractor and stored; the first failure aborts the walk and is
//! reported with the directory it came from. Once every entry has been fed,
//! [`MetadataAssembler::finish`] derives the values that depend on more than
//! one tag (focal length text, UTC capture time, camera profile fallbacks).
//!
//! # Design Notes
//!
//! - A tag seen twice keeps its last value
//! - Unrecognized tags are skipped without inspecting their payload
//! - Malformed `OffsetTimeOriginal` values are logged and ignored

use super::fields::{decode_field, FieldValue};
use crate::application::port::tags::TagEntry;
use crate::config::ExtractorConfig;
use crate::domain::metadata::{Fraction, Metadata};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Accumulates fields from a tag walk.
#[derive(Debug)]
pub struct MetadataAssembler<'c> {
    config: &'c ExtractorConfig,
    metadata: Metadata,
    captured_at: Option<NaiveDateTime>,
    time_offset: Option<String>,
    focal_length: Option<Fraction>,
    focal_length_35mm: Option<u16>,
}

impl<'c> MetadataAssembler<'c> {
    #[must_use]
    pub fn new(config: &'c ExtractorConfig) -> Self {
        Self {
            config,
            metadata: Metadata::default(),
            captured_at: None,
            time_offset: None,
            focal_length: None,
            focal_length_35mm: None,
        }
    }

    /// Decodes and stores one entry; entries that decode to nothing are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Field`] wrapping the field failure together with the
    /// tag and the directory it was found in.
    pub fn feed(&mut self, entry: &TagEntry) -> Result<()> {
        let Some(tag) = entry.tag() else {
            return Ok(());
        };

        let field = decode_field(tag, &entry.value).map_err(|source| Error::Field {
            tag,
            ifd: entry.ifd.clone(),
            source: Box::new(source),
        })?;
        if let Some(field) = field {
            self.apply(field);
        }
        Ok(())
    }

    /// Stores a decoded field, replacing any earlier value.
    pub fn apply(&mut self, field: FieldValue) {
        let metadata = &mut self.metadata;
        match field {
            FieldValue::Make(value) => metadata.make = value,
            FieldValue::Model(value) => metadata.model = value,
            FieldValue::Lens(value) => metadata.lens = value,
            FieldValue::CapturedAt(value) => self.captured_at = Some(value),
            FieldValue::TimeOffset(value) => self.time_offset = Some(value),
            FieldValue::FNumber(value) => metadata.f_number = value,
            FieldValue::ExposureTime(value) => metadata.exposure_time = value,
            FieldValue::ShutterSpeed(value) => metadata.shutter_speed = value,
            FieldValue::IsoSpeed(value) => metadata.iso_speed = value,
            FieldValue::FocalLength(value) => self.focal_length = Some(value),
            FieldValue::FocalLength35mm(value) => self.focal_length_35mm = Some(value),
            FieldValue::Orientation(value) => metadata.orientation = value,
            FieldValue::Width(value) => metadata.width = value,
            FieldValue::Height(value) => metadata.height = value,
            FieldValue::LatitudeRef(value) => metadata.latitude.reference = value,
            FieldValue::Latitude([degrees, minutes, seconds]) => {
                metadata.latitude.degrees = degrees;
                metadata.latitude.minutes = minutes;
                metadata.latitude.seconds = seconds;
            }
            FieldValue::LongitudeRef(value) => metadata.longitude.reference = value,
            FieldValue::Longitude([degrees, minutes, seconds]) => {
                metadata.longitude.degrees = degrees;
                metadata.longitude.minutes = minutes;
                metadata.longitude.seconds = seconds;
            }
            FieldValue::AltitudeRef(value) => metadata.altitude.reference = value,
            FieldValue::Altitude(value) => metadata.altitude.value = value,
        }
    }

    /// Applies the cross-tag rules and returns the record.
    #[must_use]
    pub fn finish(self) -> Metadata {
        let mut metadata = self.metadata;

        metadata.focal_length = describe_focal_length(self.focal_length, self.focal_length_35mm);

        metadata.captured_at = self.captured_at.map(|local| {
            let captured = local.and_utc();
            match self.time_offset.as_deref() {
                Some(offset) if self.config.apply_time_offset => to_utc(captured, offset),
                _ => captured,
            }
        });

        if let Some(profile) = self.config.profile_for(&metadata.make, &metadata.model) {
            if metadata.focal_length.is_empty()
                || (!profile.native_focal_length.is_empty()
                    && metadata.focal_length == profile.native_focal_length)
            {
                metadata.focal_length.clone_from(&profile.focal_length);
            }
            if metadata.lens.is_empty() {
                metadata.lens.clone_from(&profile.lens);
            }
        }

        metadata
    }
}

/// Feeds every entry to a fresh assembler and finishes it.
///
/// # Errors
///
/// Returns the first field failure; remaining entries are not consumed.
pub fn assemble<I>(entries: I, config: &ExtractorConfig) -> Result<Metadata>
where
    I: IntoIterator<Item = TagEntry>,
{
    let mut assembler = MetadataAssembler::new(config);
    for entry in entries {
        assembler.feed(&entry)?;
    }
    Ok(assembler.finish())
}

// =============================================================================
// Finishing Helpers
// =============================================================================

/// Formats a focal length in millimeters with at most two decimals
/// (6 → "6", 4.25 → "4.25", 45.2 → "45.2").
///
/// Returns `None` for a zero denominator.
#[must_use]
pub fn format_focal_length(value: Fraction) -> Option<String> {
    let millimeters = value.to_decimal().ok()?;
    let text = format!("{millimeters:.2}");
    let text = match text.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => text.strip_suffix('0').unwrap_or(&text).to_string(),
    };
    Some(text)
}

/// Builds the human-readable focal length from the native and 35mm values.
///
/// A 35mm value of 0 means "unknown" in EXIF and is skipped.
#[must_use]
pub fn describe_focal_length(native: Option<Fraction>, equivalent: Option<u16>) -> String {
    let native = native.and_then(format_focal_length);
    let equivalent = equivalent.filter(|&value| value != 0);

    match (native, equivalent) {
        (Some(native), Some(equivalent)) => {
            format!("{native}mm ({equivalent}mm in 35mm format)")
        }
        (Some(native), None) => format!("{native}mm"),
        (None, Some(equivalent)) => format!("{equivalent}mm in 35mm format"),
        (None, None) => String::new(),
    }
}

/// Shifts a capture time written in local time back to UTC.
///
/// `offset` is `OffsetTimeOriginal` (`+HH:MM` or `-HH:MM`). A positive offset
/// is subtracted, anything else is added. Unparseable offsets leave the time
/// unchanged.
#[must_use]
pub fn to_utc(captured: DateTime<Utc>, offset: &str) -> DateTime<Utc> {
    let Some(delta) = parse_offset(offset) else {
        tracing::warn!(offset, "ignoring malformed OffsetTimeOriginal");
        return captured;
    };

    let shifted = if offset.starts_with('+') {
        captured.checked_sub_signed(delta)
    } else {
        captured.checked_add_signed(delta)
    };
    shifted.unwrap_or(captured)
}

fn parse_offset(offset: &str) -> Option<TimeDelta> {
    let unsigned = offset.strip_prefix('+').unwrap_or(offset);
    let unsigned = unsigned.strip_prefix('-').unwrap_or(unsigned);

    let (hours, minutes) = unsigned.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;

    TimeDelta::try_hours(hours)?.checked_add(&TimeDelta::try_minutes(minutes)?)
}
