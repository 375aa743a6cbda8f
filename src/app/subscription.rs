// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts reach the gallery only while the modal is open and no
//! widget captured the key press.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss tick.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes uncaptured key presses to the gallery.
pub fn create_keyboard_subscription(gallery_open: bool) -> Subscription<Message> {
    if !gallery_open {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::Gallery(gallery::Message::KeyPressed(key))),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Animation frames requested by the gallery.
pub fn create_gallery_subscription(gallery: Option<&gallery::State>) -> Subscription<Message> {
    gallery.map_or_else(Subscription::none, |state| {
        state.subscription().map(Message::Gallery)
    })
}
