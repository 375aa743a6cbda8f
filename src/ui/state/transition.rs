// SPDX-License-Identifier: MPL-2.0
//! Slide-in animation between photos.

use crate::application::query::SlideDirection;
use std::time::{Duration, Instant};

/// Length of the slide animation.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Horizontal slide of the incoming photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    direction: SlideDirection,
    started_at: Instant,
}

impl SlideTransition {
    #[must_use]
    pub fn start(direction: SlideDirection, now: Instant) -> Self {
        Self {
            direction,
            started_at: now,
        }
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offset of the incoming photo as a fraction of the stage width.
    ///
    /// Starts at `+1` (right edge) for forward moves and `-1` for backward
    /// moves, easing out to `0`.
    #[must_use]
    pub fn offset_fraction(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.progress(now));
        f32::from(self.direction.sign()) * (1.0 - eased)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_slide_enters_from_the_right() {
        let now = Instant::now();
        let slide = SlideTransition::start(SlideDirection::Forward, now);
        assert!((slide.offset_fraction(now) - 1.0).abs() < f32::EPSILON);
        assert!(!slide.is_finished(now));
    }

    #[test]
    fn backward_slide_enters_from_the_left() {
        let now = Instant::now();
        let slide = SlideTransition::start(SlideDirection::Backward, now);
        assert!((slide.offset_fraction(now) + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn slide_settles_after_duration() {
        let now = Instant::now();
        let slide = SlideTransition::start(SlideDirection::Forward, now);
        let later = now + SLIDE_DURATION;
        assert!(slide.is_finished(later));
        assert_eq!(slide.offset_fraction(later), 0.0);
    }

    #[test]
    fn easing_front_loads_motion() {
        let now = Instant::now();
        let slide = SlideTransition::start(SlideDirection::Forward, now);
        let half = slide.offset_fraction(now + SLIDE_DURATION / 2);
        assert!(half < 0.5);
    }
}
