// SPDX-License-Identifier: MPL-2.0
//! Capture metadata extraction for photos and videos.
//!
//! Entry points of the library: hand over the file bytes, get a normalized
//! [`Metadata`] record back. Files without embedded metadata produce an empty
//! record rather than an error.

use crate::application::extract::extract_with_source;
use crate::config::ExtractorConfig;
use crate::domain::metadata::Metadata;
use crate::error::Result;
use crate::infrastructure::exif::ExifTagSource;
use std::sync::OnceLock;

fn default_config() -> &'static ExtractorConfig {
    static CONFIG: OnceLock<ExtractorConfig> = OnceLock::new();
    CONFIG.get_or_init(ExtractorConfig::default)
}

/// Extracts capture metadata using the default configuration.
///
/// `bytes` may be a whole file or just its leading portion, as long as the
/// metadata block is included.
///
/// # Errors
///
/// Returns [`crate::error::Error::TagCollection`] if the metadata block is
/// corrupt, or a field error if a recognized tag is malformed.
///
/// # Example
///
/// ```ignore
/// let bytes = std::fs::read("IMG_0001.jpg")?;
/// let metadata = capture_meta::media::extract_metadata(&bytes)?;
/// println!("ISO {}", metadata.iso_speed);
/// ```
pub fn extract_metadata(bytes: &[u8]) -> Result<Metadata> {
    extract_metadata_with(bytes, default_config())
}

/// Extracts capture metadata using `config`.
///
/// # Errors
///
/// See [`extract_metadata`].
pub fn extract_metadata_with(bytes: &[u8], config: &ExtractorConfig) -> Result<Metadata> {
    extract_with_source(&ExifTagSource, bytes, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::{Fraction, SignedFraction};
    use crate::error::Error;
    use crate::test_utils::{assert_abs_diff_eq, fixtures, F64_EPSILON};
    use chrono::{TimeZone, Utc};
    use exif::{Tag, Value};

    #[test]
    fn iphone_record_is_complete() {
        let metadata = extract_metadata(&fixtures::iphone_jpeg()).unwrap();

        assert_eq!(metadata.make, "Apple");
        assert_eq!(metadata.model, "iPhone 11 Pro Max");
        assert_eq!(metadata.lens, "iPhone 11 Pro Max back triple camera 6mm f/2");
        assert_eq!(metadata.focal_length, "6mm (52mm in 35mm format)");
        assert_eq!(metadata.iso_speed, 100);
        assert_eq!(metadata.f_number, Fraction::new(2, 1));
        assert_eq!(metadata.exposure_time, Fraction::new(1, 122));
        assert_eq!(metadata.shutter_speed, SignedFraction::new(328_711, 47_450));
        assert_eq!(
            metadata.captured_at,
            Some(Utc.with_ymd_and_hms(2021, 11, 9, 8, 33, 11).unwrap())
        );
        assert_eq!(metadata.latitude.reference, "N");
        assert_eq!(metadata.longitude.reference, "W");
    }

    #[test]
    fn iphone_decimals() {
        let decimals = extract_metadata(&fixtures::iphone_jpeg())
            .unwrap()
            .decimals();

        assert_abs_diff_eq!(decimals.f_number.unwrap(), 2.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(
            decimals.latitude.unwrap(),
            51.0 + 33.0 / 60.0 + 34.10 / 3600.0,
            epsilon = F64_EPSILON
        );
        assert_abs_diff_eq!(
            decimals.longitude.unwrap(),
            -(10.0 / 60.0 + 7.07 / 3600.0),
            epsilon = F64_EPSILON
        );
        assert_abs_diff_eq!(
            decimals.altitude.unwrap(),
            1_605_603.0 / 16_384.0,
            epsilon = F64_EPSILON
        );
    }

    #[test]
    fn x100f_gets_fixed_lens_profile() {
        let metadata = extract_metadata(&fixtures::x100f_jpeg()).unwrap();
        assert_eq!(metadata.make, "FUJIFILM");
        assert_eq!(metadata.iso_speed, 400);
        assert_eq!(metadata.f_number, Fraction::new(56, 10));
        assert_eq!(metadata.lens, "FUJINON single focal length lens");
        assert_eq!(metadata.focal_length, "23mm (35mm in 35mm format)");
        assert!(!metadata.has_gps());
    }

    #[test]
    fn profiles_can_be_disabled() {
        let config = ExtractorConfig {
            camera_profiles: Vec::new(),
            ..Default::default()
        };
        let metadata = extract_metadata_with(&fixtures::x100f_jpeg(), &config).unwrap();
        assert!(metadata.lens.is_empty());
        assert_eq!(metadata.focal_length, "23mm");
    }

    #[test]
    fn file_without_metadata_yields_empty_record() {
        assert!(extract_metadata(&fixtures::bare_jpeg()).unwrap().is_empty());
        assert!(extract_metadata(&fixtures::mp4_with_block(None))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn malformed_tag_is_reported_with_context() {
        let bytes = fixtures::jpeg(&[fixtures::field(Tag::FNumber, Value::Short(vec![2]))]);
        let err = extract_metadata(&bytes).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to walk exif data tree at IFD0/Exif: FNumber was not in expected format: Short([2])"
        );
        assert!(matches!(err.root(), Error::FieldFormat { .. }));
    }
}
