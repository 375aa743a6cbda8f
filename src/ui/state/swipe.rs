// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture detection
//!
//! A swipe is a press-move-release (mouse or single finger) whose horizontal
//! travel reaches [`SWIPE_THRESHOLD`] and dominates the vertical travel.

use iced::Point;

/// Minimum horizontal travel, in logical pixels.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Recognized swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left (show next photo).
    Left,
    /// Finger moved left-to-right (show previous photo).
    Right,
}

/// Classifies the travel from `start` to `end`.
#[must_use]
pub fn classify(start: Point, end: Point) -> Option<Swipe> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() < SWIPE_THRESHOLD || dx.abs() <= dy.abs() {
        return None;
    }
    if dx < 0.0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

/// Tracks an in-progress swipe
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    start_position: Option<Point>,
}

impl SwipeState {
    pub fn start(&mut self, position: Point) {
        self.start_position = Some(position);
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_position.is_some()
    }

    /// Ends the gesture at `position` and returns the recognized swipe.
    pub fn finish(&mut self, position: Point) -> Option<Swipe> {
        let start = self.start_position.take()?;
        classify(start, position)
    }

    pub fn cancel(&mut self) {
        self.start_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_travel_is_left_swipe() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(300.0, 100.0));
        assert_eq!(swipe.finish(Point::new(200.0, 110.0)), Some(Swipe::Left));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn rightward_travel_is_right_swipe() {
        assert_eq!(
            classify(Point::new(0.0, 0.0), Point::new(60.0, 5.0)),
            Some(Swipe::Right)
        );
    }

    #[test]
    fn short_travel_is_ignored() {
        assert_eq!(classify(Point::new(0.0, 0.0), Point::new(49.0, 0.0)), None);
    }

    #[test]
    fn vertical_dominant_travel_is_ignored() {
        assert_eq!(classify(Point::new(0.0, 0.0), Point::new(80.0, 120.0)), None);
    }

    #[test]
    fn finish_without_start_is_none() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.finish(Point::new(500.0, 0.0)), None);
    }
}
