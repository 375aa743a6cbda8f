// SPDX-License-Identifier: MPL-2.0
//! Construction-time options of the gallery modal.

use crate::domain::ui::newtypes::{LoupeSize, LoupeZoomLevel};
use crate::media::cdn::{CdnConfig, Rendition};
use crate::media::share::DEFAULT_SHARE_BASE_URL;
use serde::{Deserialize, Serialize};

/// How the pointer interacts with the photo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// Magnifier loupe on hover, plus zoom controls.
    #[default]
    Loupe,
    /// No loupe; wheel, pinch, double-click and drag drive the transform.
    PinchZoom,
}

/// Presentation of the modal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// 1280px photo, arrows, filmstrip, "open original" action.
    #[default]
    Windowed,
    /// 1920px photo, share action, no filmstrip or arrows.
    Full,
}

impl ViewMode {
    /// CDN rendition of the main photo.
    #[must_use]
    pub fn rendition(self) -> Rendition {
        match self {
            ViewMode::Windowed => Rendition::Windowed,
            ViewMode::Full => Rendition::Full,
        }
    }

    #[must_use]
    pub fn shows_filmstrip(self) -> bool {
        matches!(self, ViewMode::Windowed)
    }

    #[must_use]
    pub fn shows_arrows(self) -> bool {
        matches!(self, ViewMode::Windowed)
    }

    /// Glyph of the close button.
    #[must_use]
    pub fn close_glyph(self) -> &'static str {
        match self {
            ViewMode::Windowed => "✕",
            ViewMode::Full => "↩",
        }
    }
}

/// Everything the gallery needs besides the collection and the router.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub cdn: CdnConfig,
    pub interaction: InteractionMode,
    pub view_mode: ViewMode,
    pub loupe_size: LoupeSize,
    pub loupe_zoom: LoupeZoomLevel,
    /// Photo to open when the route carries no `photoId`.
    pub initial_index: usize,
    /// Public site linked from share messages.
    pub share_base_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            cdn: CdnConfig::default(),
            interaction: InteractionMode::default(),
            view_mode: ViewMode::default(),
            loupe_size: LoupeSize::default(),
            loupe_zoom: LoupeZoomLevel::default(),
            initial_index: 0,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}
