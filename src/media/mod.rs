// SPDX-License-Identifier: MPL-2.0
//! Remote photo handling: CDN URLs, fetching, decoding, caching and export.

pub mod cache;
pub mod cdn;
pub mod download;
pub mod fetch;
pub mod image;
pub mod manifest;
pub mod share;

// Re-export commonly used types
pub use cache::{ImageCache, DEFAULT_CACHE_CAPACITY};
pub use cdn::{CdnConfig, Rendition, DEFAULT_CDN_HOST};
pub use image::{decode_image, ImageData};
