// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with `.ftl` resources embedded at
//! build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Regional variants fall back to their base language
//! - Missing keys render as `MISSING: <key>`

pub mod fluent;
