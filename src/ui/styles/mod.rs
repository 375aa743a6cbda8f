// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

pub mod button;
pub mod overlay;

pub use button::{overlay as button_overlay, overlay_default as button_overlay_default};
