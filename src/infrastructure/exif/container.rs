// SPDX-License-Identifier: MPL-2.0
//! Container sniffing for the EXIF adapter.
//!
//! Image containers the tag library understands natively are recognized by
//! their signature. Anything else (MP4, MOV and friends) is searched for the
//! `Exif\0\0` marker that precedes an embedded TIFF block.

/// Marker preceding a TIFF-encoded tag block inside an arbitrary container.
pub const EXIF_MARKER: &[u8] = b"Exif\0\0";

/// HEIF brands the tag library can walk.
const HEIF_BRANDS: [&[u8; 4]; 2] = [b"mif1", b"msf1"];

/// File layout as far as metadata location is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Jpeg,
    Tiff,
    Png,
    WebP,
    Heif,
    /// Unknown layout; located by marker scan.
    Other,
}

impl Container {
    /// Identifies the container from its leading bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0xFF, 0xD8]) {
            Container::Jpeg
        } else if bytes.starts_with(b"II*\0") || bytes.starts_with(b"MM\0*") {
            Container::Tiff
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Container::Png
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Container::WebP
        } else if is_heif(bytes) {
            Container::Heif
        } else {
            Container::Other
        }
    }

    /// Returns `true` if the tag library reads this container directly.
    #[must_use]
    pub fn is_native(self) -> bool {
        self != Container::Other
    }
}

/// Checks the `ftyp` box for a HEIF brand, major or compatible.
fn is_heif(bytes: &[u8]) -> bool {
    if bytes.len() < 16 || &bytes[4..8] != b"ftyp" {
        return false;
    }
    let declared = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let end = declared.clamp(16, bytes.len());

    let major = &bytes[8..12];
    let compatible = bytes[16..end].chunks_exact(4);

    std::iter::once(major)
        .chain(compatible)
        .any(|brand| HEIF_BRANDS.iter().any(|heif| brand == heif.as_slice()))
}

/// Returns the TIFF block following the first `Exif\0\0` marker, if any.
#[must_use]
pub fn find_marker_block(bytes: &[u8]) -> Option<&[u8]> {
    bytes
        .windows(EXIF_MARKER.len())
        .position(|window| window == EXIF_MARKER)
        .map(|start| &bytes[start + EXIF_MARKER.len()..])
}
