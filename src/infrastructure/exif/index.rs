// SPDX-License-Identifier: MPL-2.0
//! Process-wide lookup tables for naming tags and directories.
//!
//! Both tables are built on first use and never mutated afterwards, so
//! concurrent extractions share them without locking.

use crate::application::port::tags::TagName;
use exif::{Context, In, Tag};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Library tag for every recognized tag name.
///
/// `ISOSpeedRatings` is stored under tag 0x8827, which EXIF 2.3 renamed to
/// `PhotographicSensitivity`.
const RECOGNIZED: [(Tag, TagName); 20] = [
    (Tag::Make, TagName::Make),
    (Tag::Model, TagName::Model),
    (Tag::LensModel, TagName::LensModel),
    (Tag::DateTimeOriginal, TagName::DateTimeOriginal),
    (Tag::OffsetTimeOriginal, TagName::OffsetTimeOriginal),
    (Tag::FNumber, TagName::FNumber),
    (Tag::ExposureTime, TagName::ExposureTime),
    (Tag::ShutterSpeedValue, TagName::ShutterSpeedValue),
    (Tag::PhotographicSensitivity, TagName::IsoSpeedRatings),
    (Tag::FocalLength, TagName::FocalLength),
    (Tag::FocalLengthIn35mmFilm, TagName::FocalLengthIn35mmFilm),
    (Tag::Orientation, TagName::Orientation),
    (Tag::PixelXDimension, TagName::PixelXDimension),
    (Tag::PixelYDimension, TagName::PixelYDimension),
    (Tag::GPSLatitudeRef, TagName::GpsLatitudeRef),
    (Tag::GPSLatitude, TagName::GpsLatitude),
    (Tag::GPSLongitudeRef, TagName::GpsLongitudeRef),
    (Tag::GPSLongitude, TagName::GpsLongitude),
    (Tag::GPSAltitudeRef, TagName::GpsAltitudeRef),
    (Tag::GPSAltitude, TagName::GpsAltitude),
];

/// Maps library tags to the names entries carry.
#[derive(Debug)]
pub struct TagIndex {
    names: HashMap<Tag, &'static str>,
}

impl TagIndex {
    fn build() -> Self {
        let names = RECOGNIZED
            .iter()
            .map(|&(tag, name)| (tag, name.as_str()))
            .collect();
        Self { names }
    }

    /// Name of `tag`: the recognized name when there is one, the library's
    /// own rendering otherwise.
    #[must_use]
    pub fn name(&self, tag: Tag) -> Cow<'static, str> {
        match self.names.get(&tag) {
            Some(name) => Cow::Borrowed(*name),
            None => Cow::Owned(tag.to_string()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Returns the shared tag index.
pub fn tag_index() -> &'static TagIndex {
    static INDEX: OnceLock<TagIndex> = OnceLock::new();
    INDEX.get_or_init(TagIndex::build)
}

/// Maps an image directory and tag context to a path such as `IFD0/GPSInfo`.
#[derive(Debug)]
pub struct IfdMapping {
    paths: HashMap<(In, Context), &'static str>,
}

impl IfdMapping {
    fn build() -> Self {
        let paths = [
            ((In::PRIMARY, Context::Tiff), "IFD0"),
            ((In::PRIMARY, Context::Exif), "IFD0/Exif"),
            ((In::PRIMARY, Context::Gps), "IFD0/GPSInfo"),
            ((In::PRIMARY, Context::Interop), "IFD0/Exif/Interop"),
        ]
        .into_iter()
        .collect();
        Self { paths }
    }

    /// Path of the directory holding a tag of `tag`'s context in `ifd`.
    #[must_use]
    pub fn path(&self, ifd: In, tag: Tag) -> Cow<'static, str> {
        match self.paths.get(&(ifd, tag.context())) {
            Some(path) => Cow::Borrowed(*path),
            None => Cow::Owned(format!("IFD{}", ifd.0)),
        }
    }
}

/// Returns the shared directory mapping.
pub fn ifd_mapping() -> &'static IfdMapping {
    static MAPPING: OnceLock<IfdMapping> = OnceLock::new();
    MAPPING.get_or_init(IfdMapping::build)
}
