// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! # Available Services
//!
//! - [`navigation`]: Photo index navigation (`NavigationState`)
//!
//! These services hold no UI types; the gallery component drives them from
//! its message handlers.

pub mod navigation;

// Re-export main types
pub use navigation::{
    advance, thumbnail_window, NavigationInfo, NavigationState, SlideDirection,
    THUMBNAIL_WINDOW_RADIUS,
};
