// SPDX-License-Identifier: MPL-2.0
//! Default values for `settings.toml`.
//!
//! Range bounds for the loupe live with their newtypes in
//! [`crate::domain::ui::newtypes::loupe_bounds`].

pub use crate::domain::ui::newtypes::loupe_bounds::{
    DEFAULT_SIZE as DEFAULT_LOUPE_SIZE, DEFAULT_ZOOM as DEFAULT_LOUPE_ZOOM,
    MAX_SIZE as MAX_LOUPE_SIZE, MAX_ZOOM as MAX_LOUPE_ZOOM, MIN_SIZE as MIN_LOUPE_SIZE,
    MIN_ZOOM as MIN_LOUPE_ZOOM,
};
pub use crate::media::cdn::DEFAULT_CDN_HOST;
pub use crate::media::share::DEFAULT_SHARE_BASE_URL;

/// Cloud account used when none is configured.
pub const DEFAULT_CLOUD_NAME: &str = "demo";

/// Fallback UI language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

const _: () = {
    assert!(MIN_LOUPE_SIZE <= DEFAULT_LOUPE_SIZE && DEFAULT_LOUPE_SIZE <= MAX_LOUPE_SIZE);
    assert!(MIN_LOUPE_ZOOM <= DEFAULT_LOUPE_ZOOM && DEFAULT_LOUPE_ZOOM <= MAX_LOUPE_ZOOM);
};
