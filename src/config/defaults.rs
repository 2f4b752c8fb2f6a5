// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the extractor configuration.
//!
//! # Categories
//!
//! - **Time**: Capture time normalization
//! - **Camera Profiles**: Fallbacks for cameras that omit lens details

// ==========================================================================
// Time Defaults
// ==========================================================================

/// Whether `OffsetTimeOriginal` is applied to normalize capture times to UTC.
pub const DEFAULT_APPLY_TIME_OFFSET: bool = true;

// ==========================================================================
// Camera Profile Defaults
// ==========================================================================

/// Manufacturer of the built-in fixed-lens profile.
pub const FIXED_LENS_MAKE: &str = "FUJIFILM";

/// Model of the built-in fixed-lens profile.
pub const FIXED_LENS_MODEL: &str = "X100F";

/// Lens the X100F ships with; it does not write `LensModel`.
pub const FIXED_LENS_MODEL_NAME: &str = "FUJINON single focal length lens";

/// Focal length the X100F writes without its 35mm equivalent.
pub const FIXED_LENS_NATIVE_FOCAL_LENGTH: &str = "23mm";

/// Full focal length text for the X100F.
pub const FIXED_LENS_FOCAL_LENGTH: &str = "23mm (35mm in 35mm format)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_lens_focal_length_extends_native_value() {
        assert!(FIXED_LENS_FOCAL_LENGTH.starts_with(FIXED_LENS_NATIVE_FOCAL_LENGTH));
    }
}
