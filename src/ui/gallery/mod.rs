// SPDX-License-Identifier: MPL-2.0
//! Photo gallery modal.
//!
//! - [`component`]: state, messages and effects of the modal
//! - [`session`]: per-opening state (navigation, zoom, gestures)
//! - [`stage`]: canvas drawing the photo and the loupe
//! - [`controls`]: zoom and action toolbar
//! - [`filmstrip`]: thumbnail strip of the windowed mode
//! - [`config`]: construction-time options

pub mod component;
pub mod config;
pub mod controls;
pub mod filmstrip;
pub mod session;
pub mod stage;

pub use component::{Effect, Message, State};
pub use config::{GalleryConfig, InteractionMode, ViewMode};
