// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state for the gallery stage, kept free of widget code so it
//! can be driven and tested directly.

pub mod drag;
pub mod loupe;
pub mod pinch;
pub mod swipe;
pub mod transition;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use loupe::{LoupeGeometry, LoupeState, PointerSample};
pub use pinch::{PinchState, PinchUpdate};
pub use swipe::{Swipe, SwipeState};
pub use transition::SlideTransition;
pub use zoom::ZoomState;
