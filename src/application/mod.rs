// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) the host implements
//! - [`query`]: Navigation services over the photo collection
//!
//! # Dependency Rule
//!
//! - Application layer depends on the domain layer only
//! - The presentation layer (`ui`) drives application services
//!
//! # Example
//!
//! ```ignore
//! use iced_lightbox::application::port::{HistoryRouter, Route, Router};
//! use iced_lightbox::application::query::NavigationState;
//!
//! let mut router = HistoryRouter::new();
//! let mut nav = NavigationState::new(2, 5);
//! if nav.next() {
//!     router.push(Route::photo(nav.index()));
//! }
//! ```

pub mod port;
pub mod query;
