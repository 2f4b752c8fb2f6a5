// SPDX-License-Identifier: MPL-2.0
//! `capture_meta` extracts capture metadata (camera, exposure, capture time,
//! GPS position) embedded in photo and video files and normalizes it into a
//! typed record.
//!
//! The library never touches the filesystem during extraction: callers hand
//! over bytes and get a [`domain::metadata::Metadata`] back. See
//! [`media::extract_metadata`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
