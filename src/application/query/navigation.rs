// SPDX-License-Identifier: MPL-2.0
//! Photo navigation for the gallery modal.
//!
//! Navigation never wraps: moving past either end of the collection is a
//! no-op. The recorded [`SlideDirection`] only selects which side the next
//! image slides in from.

use std::ops::Range;

/// Number of thumbnails rendered on each side of the current photo.
pub const THUMBNAIL_WINDOW_RADIUS: usize = 15;

/// Side the incoming photo slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Moved to a higher index; the new photo enters from the right.
    Forward,
    /// Moved to a lower (or the same) index; the new photo enters from the left.
    Backward,
}

impl SlideDirection {
    /// Returns `+1` for [`SlideDirection::Forward`], `-1` otherwise.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            SlideDirection::Forward => 1,
            SlideDirection::Backward => -1,
        }
    }

    fn between(previous: usize, target: usize) -> Self {
        if target > previous {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }
}

/// Returns `current + delta` when it stays inside `0..total`, `current` otherwise.
#[must_use]
pub fn advance(current: usize, delta: isize, total: usize) -> usize {
    match current.checked_add_signed(delta) {
        Some(next) if next < total => next,
        _ => current,
    }
}

/// Index range of thumbnails shown around `current`.
///
/// Covers `current - 15 ..= current + 15`, clipped to `0..total`.
#[must_use]
pub fn thumbnail_window(current: usize, total: usize) -> Range<usize> {
    let start = current.saturating_sub(THUMBNAIL_WINDOW_RADIUS).min(total);
    let end = current
        .saturating_add(THUMBNAIL_WINDOW_RADIUS)
        .saturating_add(1)
        .min(total);
    start..end.max(start)
}

/// Navigation state information for UI rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether a next photo exists.
    pub has_next: bool,
    /// Whether a previous photo exists.
    pub has_previous: bool,
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Number of photos in the collection.
    pub total_count: usize,
}

/// Current photo index and the direction of the last move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    index: usize,
    total: usize,
    direction: Option<SlideDirection>,
}

impl NavigationState {
    /// Creates a navigation state positioned at `index`.
    ///
    /// Out-of-range indices are clamped to the last photo. The direction
    /// starts unset so the first photo appears without a slide.
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            index: index.min(total.saturating_sub(1)),
            total,
            direction: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn direction(&self) -> Option<SlideDirection> {
        self.direction
    }

    /// Moves by `delta` photos. Returns `true` if the index changed.
    pub fn step(&mut self, delta: isize) -> bool {
        let next = advance(self.index, delta, self.total);
        if next == self.index {
            return false;
        }
        self.direction = Some(SlideDirection::between(self.index, next));
        self.index = next;
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn previous(&mut self) -> bool {
        self.step(-1)
    }

    /// Jumps directly to `target` (thumbnail click).
    ///
    /// Returns `false` and leaves the state untouched when `target` is outside
    /// the collection. Otherwise the direction is recorded even if `target`
    /// is the current index.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.total {
            return false;
        }
        self.direction = Some(SlideDirection::between(self.index, target));
        self.index = target;
        true
    }

    /// Thumbnail range around the current photo.
    #[must_use]
    pub fn thumbnail_window(&self) -> Range<usize> {
        thumbnail_window(self.index, self.total)
    }

    /// Snapshot for rendering navigation controls.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        NavigationInfo {
            has_next: self.index + 1 < self.total,
            has_previous: self.index > 0,
            current_index: self.index,
            total_count: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_within_bounds() {
        for total in 1usize..6 {
            for current in 0..total {
                for delta in [-1isize, 1] {
                    let expected = match current.checked_add_signed(delta) {
                        Some(next) if next < total => next,
                        _ => current,
                    };
                    assert_eq!(advance(current, delta, total), expected);
                }
            }
        }
    }

    #[test]
    fn advance_never_wraps() {
        assert_eq!(advance(0, -1, 5), 0);
        assert_eq!(advance(4, 1, 5), 4);
        assert_eq!(advance(2, 10, 5), 2);
    }

    #[test]
    fn new_state_has_no_direction() {
        let nav = NavigationState::new(2, 5);
        assert_eq!(nav.index(), 2);
        assert_eq!(nav.direction(), None);
    }

    #[test]
    fn new_state_clamps_initial_index() {
        assert_eq!(NavigationState::new(12, 5).index(), 4);
    }

    #[test]
    fn step_records_direction_only_on_change() {
        let mut nav = NavigationState::new(0, 3);
        assert!(!nav.previous());
        assert_eq!(nav.direction(), None);

        assert!(nav.next());
        assert_eq!(nav.direction(), Some(SlideDirection::Forward));

        assert!(nav.previous());
        assert_eq!(nav.direction(), Some(SlideDirection::Backward));
        assert_eq!(nav.direction().map(SlideDirection::sign), Some(-1));
    }

    #[test]
    fn jump_derives_direction_from_previous_index() {
        let mut nav = NavigationState::new(3, 10);
        assert!(nav.jump_to(8));
        assert_eq!(nav.direction(), Some(SlideDirection::Forward));
        assert!(nav.jump_to(1));
        assert_eq!(nav.direction(), Some(SlideDirection::Backward));
    }

    #[test]
    fn jump_to_same_index_counts_as_backward() {
        let mut nav = NavigationState::new(4, 10);
        assert!(nav.jump_to(4));
        assert_eq!(nav.direction(), Some(SlideDirection::Backward));
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut nav = NavigationState::new(1, 3);
        assert!(!nav.jump_to(3));
        assert_eq!(nav.index(), 1);
        assert_eq!(nav.direction(), None);
    }

    #[test]
    fn thumbnail_window_is_clipped() {
        assert_eq!(thumbnail_window(0, 100), 0..16);
        assert_eq!(thumbnail_window(50, 100), 35..66);
        assert_eq!(thumbnail_window(99, 100), 84..100);
        assert_eq!(thumbnail_window(2, 5), 0..5);
        assert_eq!(thumbnail_window(0, 0), 0..0);
    }

    #[test]
    fn info_reflects_edges() {
        let nav = NavigationState::new(0, 2);
        let info = nav.info();
        assert!(info.has_next);
        assert!(!info.has_previous);
        assert_eq!(info.total_count, 2);
    }
}
