// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`]: `Notification` and `Severity`
//! - [`manager`]: visible/queued lifecycle
//! - [`toast`]: rendering
//!
//! Success and info toasts last ~3s, warnings ~5s, errors stay until
//! dismissed. At most three are shown; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
