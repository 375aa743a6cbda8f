// SPDX-License-Identifier: MPL-2.0
//! Per-opening state of the gallery modal.
//!
//! Everything here is created when the modal opens and dropped when it
//! closes, so reopening always starts from a clean transform.

use crate::application::query::NavigationState;
use crate::error::Error;
use crate::ui::state::{DragState, LoupeState, PinchState, SlideTransition, SwipeState, ZoomState};
use std::time::Instant;

/// Whether the modal is showing.
#[derive(Debug, Default)]
pub enum Session {
    #[default]
    Closed,
    Open(Box<OpenSession>),
}

impl Session {
    #[must_use]
    pub fn open(index: usize, total: usize) -> Self {
        Session::Open(Box::new(OpenSession::new(index, total)))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Session::Open(_))
    }

    #[must_use]
    pub fn as_open(&self) -> Option<&OpenSession> {
        match self {
            Session::Open(session) => Some(session),
            Session::Closed => None,
        }
    }

    pub fn as_open_mut(&mut self) -> Option<&mut OpenSession> {
        match self {
            Session::Open(session) => Some(session),
            Session::Closed => None,
        }
    }
}

/// State of an open modal.
#[derive(Debug)]
pub struct OpenSession {
    pub navigation: NavigationState,
    pub zoom: ZoomState,
    pub loupe: LoupeState,
    pub swipe: SwipeState,
    pub drag: DragState,
    pub pinch: PinchState,
    pub slide: Option<SlideTransition>,
    /// Set once the first photo has loaded or failed; overlay buttons stay
    /// hidden until then.
    pub controls_ready: bool,
    /// Failure of the current photo, if any.
    pub load_error: Option<Error>,
}

impl OpenSession {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            navigation: NavigationState::new(index, total),
            zoom: ZoomState::default(),
            loupe: LoupeState::default(),
            swipe: SwipeState::default(),
            drag: DragState::default(),
            pinch: PinchState::default(),
            slide: None,
            controls_ready: false,
            load_error: None,
        }
    }

    /// Resets per-photo state after the index changed.
    pub fn photo_changed(&mut self, now: Instant) {
        self.zoom.reset();
        self.drag.stop();
        self.swipe.cancel();
        self.load_error = None;
        self.slide = self
            .navigation
            .direction()
            .map(|direction| SlideTransition::start(direction, now));
    }

    /// Drops the slide once it has settled. Returns whether one is running.
    pub fn advance_slide(&mut self, now: Instant) -> bool {
        if self.slide.is_some_and(|slide| slide.is_finished(now)) {
            self.slide = None;
        }
        self.slide.is_some()
    }

    /// Horizontal offset of the photo as a fraction of the stage width.
    #[must_use]
    pub fn slide_fraction(&self, now: Instant) -> f32 {
        self.slide
            .map_or(0.0, |slide| slide.offset_fraction(now))
    }
}
