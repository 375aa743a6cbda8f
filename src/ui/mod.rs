// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - The photo modal with loupe, zoom, swipe and filmstrip
//! - [`state`] - Reusable interaction state (zoom, loupe, drag, pinch, swipe)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod state;
pub mod styles;
