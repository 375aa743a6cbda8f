// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Photo collection types ([`ImageRecord`](gallery::ImageRecord),
//!   [`Collection`](gallery::Collection))
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::newtypes::ZoomScale),
//!   [`ZoomPercent`](ui::newtypes::ZoomPercent), [`LoupeSize`](ui::newtypes::LoupeSize))

pub mod gallery;
pub mod ui;
