// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Transform scale and display percentage bounds.
pub mod zoom_bounds {
    /// Minimum transform scale (identity).
    pub const MIN_SCALE: f32 = 1.0;
    /// Maximum transform scale.
    pub const MAX_SCALE: f32 = 5.0;
    /// Scale change applied per zoom step (button, wheel notch, double-click).
    pub const SCALE_STEP: f32 = 1.0;
    /// Scale above which the image counts as actively zoomed.
    pub const ACTIVE_THRESHOLD: f32 = 1.02;
    /// Minimum displayed zoom percentage.
    pub const MIN_PERCENT: u16 = 100;
    /// Maximum displayed zoom percentage.
    pub const MAX_PERCENT: u16 = 200;
    /// Displayed percentage change per zoom step.
    pub const PERCENT_STEP: u16 = 25;
}

/// Loupe geometry bounds.
pub mod loupe_bounds {
    /// Minimum loupe diameter in logical pixels.
    pub const MIN_SIZE: f32 = 60.0;
    /// Maximum loupe diameter in logical pixels.
    pub const MAX_SIZE: f32 = 400.0;
    /// Default loupe diameter in logical pixels.
    pub const DEFAULT_SIZE: f32 = 180.0;
    /// Minimum loupe magnification.
    pub const MIN_ZOOM: f32 = 1.5;
    /// Maximum loupe magnification.
    pub const MAX_ZOOM: f32 = 4.0;
    /// Default loupe magnification.
    pub const DEFAULT_ZOOM: f32 = 2.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Transform scale factor, guaranteed to be within `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to identity.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(zoom_bounds::MIN_SCALE, zoom_bounds::MAX_SCALE))
        } else {
            Self(zoom_bounds::MIN_SCALE)
        }
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the image is zoomed enough to hide the loupe.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.0 > zoom_bounds::ACTIVE_THRESHOLD
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_SCALE
    }

    /// Increases the scale by `steps` zoom steps (negative values zoom out).
    #[must_use]
    pub fn stepped(self, steps: f32) -> Self {
        Self::new(self.0 + steps * zoom_bounds::SCALE_STEP)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(zoom_bounds::MIN_SCALE)
    }
}

// =============================================================================
// ZoomPercent
// =============================================================================

/// Displayed zoom percentage: one of 100, 125, 150, 175 or 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoomPercent(u16);

impl ZoomPercent {
    /// Maps a transform scale onto the 25-point display scale.
    ///
    /// Every scale step is worth one percentage step; the readout saturates
    /// at 200% even though the transform keeps zooming up to 5×.
    #[must_use]
    pub fn from_scale(scale: ZoomScale) -> Self {
        let steps = ((scale.value() - zoom_bounds::MIN_SCALE) / zoom_bounds::SCALE_STEP).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // steps is in [0, 4] after clamping the scale
        let steps = steps.max(0.0) as u16;
        let percent = zoom_bounds::MIN_PERCENT.saturating_add(steps * zoom_bounds::PERCENT_STEP);
        Self(percent.min(zoom_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_PERCENT
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(zoom_bounds::MIN_PERCENT)
    }
}

// =============================================================================
// LoupeSize
// =============================================================================

/// Loupe diameter in logical pixels, guaranteed to be within 60–400.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoupeSize(f32);

impl LoupeSize {
    #[must_use]
    pub fn new(size: f32) -> Self {
        if size.is_finite() {
            Self(size.clamp(loupe_bounds::MIN_SIZE, loupe_bounds::MAX_SIZE))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Half the diameter.
    #[must_use]
    pub fn radius(self) -> f32 {
        self.0 / 2.0
    }
}

impl Default for LoupeSize {
    fn default() -> Self {
        Self(loupe_bounds::DEFAULT_SIZE)
    }
}

// =============================================================================
// LoupeZoomLevel
// =============================================================================

/// Loupe magnification factor, guaranteed to be within 1.5–4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoupeZoomLevel(f32);

impl LoupeZoomLevel {
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_finite() {
            Self(level.clamp(loupe_bounds::MIN_ZOOM, loupe_bounds::MAX_ZOOM))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for LoupeZoomLevel {
    fn default() -> Self {
        Self(loupe_bounds::DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_scale_clamps_to_bounds() {
        assert_eq!(ZoomScale::new(0.2).value(), 1.0);
        assert_eq!(ZoomScale::new(9.0).value(), 5.0);
        assert_eq!(ZoomScale::new(f32::NAN).value(), 1.0);
        assert!(ZoomScale::new(5.0).is_max());
        assert!(ZoomScale::default().is_min());
    }

    #[test]
    fn zoom_scale_active_threshold() {
        assert!(!ZoomScale::new(1.0).is_active());
        assert!(!ZoomScale::new(1.02).is_active());
        assert!(ZoomScale::new(1.03).is_active());
    }

    #[test]
    fn zoom_percent_tracks_scale_steps() {
        let percents: Vec<u16> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .map(|s| ZoomPercent::from_scale(ZoomScale::new(*s)).value())
            .collect();
        assert_eq!(percents, vec![100, 125, 150, 175, 200]);
    }

    #[test]
    fn zoom_percent_rounds_fractional_scales() {
        assert_eq!(ZoomPercent::from_scale(ZoomScale::new(1.4)).value(), 100);
        assert_eq!(ZoomPercent::from_scale(ZoomScale::new(1.6)).value(), 125);
    }

    #[test]
    fn loupe_values_are_clamped() {
        assert_eq!(LoupeSize::new(10.0).value(), loupe_bounds::MIN_SIZE);
        assert_eq!(LoupeSize::new(1000.0).value(), loupe_bounds::MAX_SIZE);
        assert_eq!(LoupeSize::default().radius(), 90.0);
        assert_eq!(LoupeZoomLevel::new(0.0).value(), loupe_bounds::MIN_ZOOM);
        assert_eq!(LoupeZoomLevel::default().value(), 2.0);
    }
}
