// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the tag-walking library in use.
//!
//! # Available Ports
//!
//! - [`tags`]: Locating and walking embedded metadata tags
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so one source can serve concurrent extractions
//! - Methods return the crate `Result`
//! - No `async fn`: extraction is a pure, synchronous computation

pub mod tags;

// Re-export main types for convenience
pub use tags::{RawValue, TagEntry, TagName, TagSource};
