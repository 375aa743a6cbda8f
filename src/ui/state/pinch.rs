// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking.

use iced::touch::Finger;
use iced::Point;
use std::collections::HashMap;

/// Scale change reported by a pinch move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchUpdate {
    /// Current finger distance over the previous one.
    pub ratio: f32,
    /// Midpoint between the two fingers.
    pub midpoint: Point,
}

/// Tracks active touch points and the spread of the first two.
#[derive(Debug, Clone, Default)]
pub struct PinchState {
    fingers: HashMap<Finger, Point>,
    last_distance: Option<f32>,
}

impl PinchState {
    /// Number of fingers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.fingers.len() >= 2
    }

    pub fn finger_pressed(&mut self, id: Finger, position: Point) {
        self.fingers.insert(id, position);
        self.last_distance = self.spread().map(|(distance, _)| distance);
    }

    /// Moves a finger; yields an update while two fingers are down.
    pub fn finger_moved(&mut self, id: Finger, position: Point) -> Option<PinchUpdate> {
        let finger = self.fingers.get_mut(&id)?;
        *finger = position;

        let (distance, midpoint) = self.spread()?;
        let previous = self.last_distance.replace(distance)?;
        if previous <= f32::EPSILON {
            return None;
        }
        Some(PinchUpdate {
            ratio: distance / previous,
            midpoint,
        })
    }

    pub fn finger_lifted(&mut self, id: Finger) {
        self.fingers.remove(&id);
        self.last_distance = self.spread().map(|(distance, _)| distance);
    }

    pub fn clear(&mut self) {
        self.fingers.clear();
        self.last_distance = None;
    }

    fn spread(&self) -> Option<(f32, Point)> {
        let mut ordered: Vec<(&Finger, &Point)> = self.fingers.iter().collect();
        ordered.sort_by_key(|(id, _)| id.0);
        let [(_, a), (_, b), ..] = ordered.as_slice() else {
            return None;
        };
        let midpoint = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        Some((a.distance(**b), midpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_finger_does_not_pinch() {
        let mut pinch = PinchState::default();
        pinch.finger_pressed(Finger(1), Point::new(0.0, 0.0));
        assert!(!pinch.is_pinching());
        assert!(pinch.finger_moved(Finger(1), Point::new(10.0, 0.0)).is_none());
    }

    #[test]
    fn spreading_fingers_reports_ratio() {
        let mut pinch = PinchState::default();
        pinch.finger_pressed(Finger(1), Point::new(0.0, 0.0));
        pinch.finger_pressed(Finger(2), Point::new(100.0, 0.0));

        let update = pinch
            .finger_moved(Finger(2), Point::new(200.0, 0.0))
            .expect("pinch update");
        assert!((update.ratio - 2.0).abs() < 1e-5);
        assert_eq!(update.midpoint, Point::new(100.0, 0.0));
    }

    #[test]
    fn lifting_a_finger_ends_pinch() {
        let mut pinch = PinchState::default();
        pinch.finger_pressed(Finger(1), Point::new(0.0, 0.0));
        pinch.finger_pressed(Finger(2), Point::new(100.0, 0.0));
        pinch.finger_lifted(Finger(2));
        assert_eq!(pinch.finger_count(), 1);
        assert!(pinch.finger_moved(Finger(1), Point::new(5.0, 0.0)).is_none());
    }
}
