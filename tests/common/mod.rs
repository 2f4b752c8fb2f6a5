// SPDX-License-Identifier: MPL-2.0
//! Synthetic media files carrying EXIF blocks.
//!
//! Blocks are serialized with the tag library's writer and wrapped in a
//! minimal JPEG (SOI, APP1, EOI) or a minimal ISO-BMFF stream.

#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, SRational, Tag, Value};
use std::io::Cursor;

pub fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

/// Field stored in the thumbnail directory (IFD1).
pub fn thumbnail_field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::THUMBNAIL,
        value,
    }
}

pub fn ascii(text: &str) -> Value {
    Value::Ascii(vec![text.as_bytes().to_vec()])
}

pub fn rational(num: u32, denom: u32) -> Value {
    Value::Rational(vec![Rational { num, denom }])
}

pub fn rationals(values: &[(u32, u32)]) -> Value {
    Value::Rational(
        values
            .iter()
            .map(|&(num, denom)| Rational { num, denom })
            .collect(),
    )
}

pub fn srational(num: i32, denom: i32) -> Value {
    Value::SRational(vec![SRational { num, denom }])
}

/// Serializes `fields` as a big-endian TIFF block.
pub fn tiff(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut buffer = Cursor::new(Vec::new());
    writer
        .write(&mut buffer, false)
        .expect("failed to serialize exif block");
    buffer.into_inner()
}

/// JPEG whose APP1 segment holds `fields`.
pub fn jpeg(fields: &[Field]) -> Vec<u8> {
    let tiff = tiff(fields);
    let length = u16::try_from(tiff.len() + 8).expect("APP1 segment too large");

    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE1];
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(b"Exif\0\0");
    bytes.extend_from_slice(&tiff);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

/// JPEG with no metadata segment at all.
pub fn bare_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

/// MP4-like stream (`ftyp` + `mdat`), optionally embedding a marked TIFF block.
pub fn mp4_with_block(tiff: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&24u32.to_be_bytes());
    bytes.extend_from_slice(b"ftypisom");
    bytes.extend_from_slice(&[0, 0, 2, 0]);
    bytes.extend_from_slice(b"isommp41");

    let payload = match tiff {
        Some(tiff) => [b"Exif\0\0".as_slice(), tiff].concat(),
        None => vec![0u8; 32],
    };
    let size = u32::try_from(payload.len() + 8).expect("mdat too large");
    bytes.extend_from_slice(&size.to_be_bytes());
    bytes.extend_from_slice(b"mdat");
    bytes.extend_from_slice(&payload);
    bytes
}

/// Tags written by an iPhone 11 Pro Max.
pub fn iphone_fields() -> Vec<Field> {
    vec![
        field(Tag::Make, ascii("Apple")),
        field(Tag::Model, ascii("iPhone 11 Pro Max")),
        field(Tag::Orientation, Value::Short(vec![1])),
        field(Tag::ExposureTime, rational(1, 122)),
        field(Tag::FNumber, rational(2, 1)),
        field(Tag::PhotographicSensitivity, Value::Short(vec![100])),
        field(Tag::DateTimeOriginal, ascii("2021:11:09 08:33:11")),
        field(Tag::ShutterSpeedValue, srational(328_711, 47_450)),
        field(Tag::FocalLength, rational(6, 1)),
        field(Tag::FocalLengthIn35mmFilm, Value::Short(vec![52])),
        field(
            Tag::LensModel,
            ascii("iPhone 11 Pro Max back triple camera 6mm f/2"),
        ),
        field(Tag::GPSLatitudeRef, ascii("N")),
        field(Tag::GPSLatitude, rationals(&[(51, 1), (33, 1), (3410, 100)])),
        field(Tag::GPSLongitudeRef, ascii("W")),
        field(Tag::GPSLongitude, rationals(&[(0, 1), (10, 1), (707, 100)])),
        field(Tag::GPSAltitudeRef, Value::Byte(vec![0])),
        field(Tag::GPSAltitude, rational(1_605_603, 16_384)),
    ]
}

/// Tags written by a FUJIFILM X100F, which records neither a lens model
/// nor a 35mm focal length.
pub fn x100f_fields() -> Vec<Field> {
    vec![
        field(Tag::Make, ascii("FUJIFILM")),
        field(Tag::Model, ascii("X100F")),
        field(Tag::ExposureTime, rational(1, 1500)),
        field(Tag::FNumber, rational(56, 10)),
        field(Tag::PhotographicSensitivity, Value::Short(vec![400])),
        field(Tag::DateTimeOriginal, ascii("2021:11:13 15:38:02")),
        field(Tag::ShutterSpeedValue, srational(10_550_747, 1_000_000)),
        field(Tag::FocalLength, rational(23, 1)),
    ]
}

pub fn iphone_jpeg() -> Vec<u8> {
    jpeg(&iphone_fields())
}

pub fn x100f_jpeg() -> Vec<u8> {
    jpeg(&x100f_fields())
}
