// SPDX-License-Identifier: MPL-2.0
//! Image CDN URL construction.
//!
//! Renditions are requested through the CDN's `c_scale` transform:
//!
//! ```text
//! https://<host>/<cloud>/image/upload/c_scale,w_<width>/<public_id>.<format>
//! ```
//!
//! The original asset omits the transform segment.

use crate::domain::gallery::ImageRecord;

/// Default CDN host.
pub const DEFAULT_CDN_HOST: &str = "res.cloudinary.com";

/// Size variant requested from the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rendition {
    /// Main image in the windowed modal.
    Windowed,
    /// Main image in the full-screen modal.
    Full,
    /// Filmstrip thumbnail.
    Thumbnail,
    /// Unscaled source asset.
    Original,
}

impl Rendition {
    /// Width passed to the scale transform, `None` for the original.
    #[must_use]
    pub fn width(self) -> Option<u32> {
        match self {
            Rendition::Windowed => Some(1280),
            Rendition::Full => Some(1920),
            Rendition::Thumbnail => Some(180),
            Rendition::Original => None,
        }
    }
}

/// Where photos are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnConfig {
    host: String,
    cloud_name: String,
}

impl CdnConfig {
    /// Creates a CDN configuration.
    ///
    /// The host may be given with or without scheme and trailing slash.
    #[must_use]
    pub fn new(host: impl Into<String>, cloud_name: impl Into<String>) -> Self {
        let host = host.into();
        let host = host
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        let host = if host.is_empty() {
            DEFAULT_CDN_HOST.to_string()
        } else {
            host.to_string()
        };
        Self {
            host,
            cloud_name: cloud_name.into().trim().trim_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    /// URL of `image` at the given rendition.
    #[must_use]
    pub fn url(&self, image: &ImageRecord, rendition: Rendition) -> String {
        let transform = rendition
            .width()
            .map(|width| format!("c_scale,w_{width}/"))
            .unwrap_or_default();
        format!(
            "https://{}/{}/image/upload/{}{}.{}",
            self.host, self.cloud_name, transform, image.public_id, image.format
        )
    }
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_HOST, "")
    }
}
