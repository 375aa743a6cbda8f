// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`router`]: Host routing (`photoId` query binding)
//!
//! Ports use domain types only, so the gallery can be driven by any host
//! that can store a route.

pub mod router;

// Re-export main types for convenience
pub use router::{HistoryRouter, Route, Router, HISTORY_LIMIT, PHOTO_ID_PARAM};
