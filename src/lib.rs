// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a photo lightbox built with the Iced GUI framework.
//!
//! It browses a CDN-hosted photo collection in a modal with keyboard, swipe
//! and filmstrip navigation, a magnifier loupe and zoom controls, keeps the
//! open photo in a `photoId` route, and localizes its UI with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
