// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Tracks the image transform (scale and pan offset) and the percentage
//! shown in the zoom readout. The percentage is always derived from the
//! scale so the two cannot drift apart.
//!
//! Offsets are measured from the centre of the fitted image; anchors passed
//! to the zoom methods use the same origin.

use crate::domain::ui::newtypes::{ZoomPercent, ZoomScale};
use iced::{Size, Vector};

/// Scale change per wheel line.
pub const WHEEL_SCALE_STEP: f32 = 0.2;

/// Manages all zoom-related state for the gallery stage
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    scale: ZoomScale,

    /// Translation applied after scaling, in logical pixels.
    offset: Vector,

    /// Size of the fitted image at scale 1, used to bound panning.
    base_size: Size,
}

impl ZoomState {
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn percent(&self) -> ZoomPercent {
        ZoomPercent::from_scale(self.scale)
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Whether the image is zoomed past the loupe threshold.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.scale.is_active()
    }

    /// Records the fitted image size and re-clamps the pan offset.
    pub fn set_base_size(&mut self, size: Size) {
        self.base_size = size;
        self.offset = self.clamped(self.offset);
    }

    /// Applies one zoom-in step around the image centre.
    ///
    /// Returns `false` when already at the maximum scale.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_to(self.scale.stepped(1.0), Vector::ZERO)
    }

    /// Applies one zoom-out step around the image centre.
    ///
    /// Returns `false` when already at identity.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_to(self.scale.stepped(-1.0), Vector::ZERO)
    }

    /// Restores the identity transform and a 100% readout.
    pub fn reset(&mut self) {
        self.scale = ZoomScale::default();
        self.offset = Vector::ZERO;
    }

    /// Wheel zoom: `lines` notches, keeping the point under `anchor` fixed.
    pub fn wheel(&mut self, lines: f32, anchor: Vector) -> bool {
        let target = ZoomScale::new(self.scale.value() + lines * WHEEL_SCALE_STEP);
        self.zoom_to(target, anchor)
    }

    /// Pinch zoom: multiplies the scale by `ratio` around `anchor`.
    pub fn pinch(&mut self, ratio: f32, anchor: Vector) -> bool {
        if !ratio.is_finite() || ratio <= 0.0 {
            return false;
        }
        self.zoom_to(ZoomScale::new(self.scale.value() * ratio), anchor)
    }

    /// Double-click: one step in around `anchor`, or back to identity at max.
    pub fn double_click(&mut self, anchor: Vector) {
        if self.scale.is_max() {
            self.reset();
        } else {
            self.zoom_to(self.scale.stepped(1.0), anchor);
        }
    }

    /// Moves the image to `offset`, clamped so it keeps covering its frame.
    pub fn pan_to(&mut self, offset: Vector) {
        self.offset = self.clamped(offset);
    }

    fn zoom_to(&mut self, target: ZoomScale, anchor: Vector) -> bool {
        let current = self.scale.value();
        if (target.value() - current).abs() < f32::EPSILON {
            return false;
        }
        // Keep the content under `anchor` stationary.
        let ratio = target.value() / current;
        let offset = anchor - (anchor - self.offset) * ratio;
        self.scale = target;
        self.offset = self.clamped(offset);
        true
    }

    fn clamped(&self, offset: Vector) -> Vector {
        let extra = self.scale.value() - 1.0;
        let max_x = (extra * self.base_size.width / 2.0).max(0.0);
        let max_y = (extra * self.base_size.height / 2.0).max(0.0);
        Vector::new(offset.x.clamp(-max_x, max_x), offset.y.clamp(-max_y, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized() -> ZoomState {
        let mut zoom = ZoomState::default();
        zoom.set_base_size(Size::new(400.0, 300.0));
        zoom
    }

    #[test]
    fn default_is_identity() {
        let zoom = ZoomState::default();
        assert_eq!(zoom.scale().value(), 1.0);
        assert_eq!(zoom.percent().value(), 100);
        assert_eq!(zoom.offset(), Vector::ZERO);
        assert!(!zoom.is_active());
    }

    #[test]
    fn zoom_in_steps_percent_by_25_and_clamps() {
        let mut zoom = sized();
        let mut seen = Vec::new();
        for _ in 0..5 {
            zoom.zoom_in();
            seen.push(zoom.percent().value());
        }
        assert_eq!(seen, vec![125, 150, 175, 200, 200]);
        assert!(!zoom.zoom_in());
    }

    #[test]
    fn zoom_out_stops_at_identity() {
        let mut zoom = sized();
        zoom.zoom_in();
        assert!(zoom.zoom_out());
        assert_eq!(zoom.percent().value(), 100);
        assert!(!zoom.zoom_out());
    }

    #[test]
    fn reset_restores_identity() {
        let mut zoom = sized();
        zoom.zoom_in();
        zoom.pan_to(Vector::new(50.0, 20.0));
        zoom.reset();
        assert_eq!(zoom.scale().value(), 1.0);
        assert_eq!(zoom.offset(), Vector::ZERO);
    }

    #[test]
    fn pan_is_clamped_to_overflow() {
        let mut zoom = sized();
        zoom.zoom_in(); // scale 2: overflow 200 x 150 on each side
        zoom.pan_to(Vector::new(1000.0, -1000.0));
        assert_eq!(zoom.offset(), Vector::new(200.0, -150.0));
    }

    #[test]
    fn pan_at_identity_stays_centred() {
        let mut zoom = sized();
        zoom.pan_to(Vector::new(30.0, 30.0));
        assert_eq!(zoom.offset(), Vector::ZERO);
    }

    #[test]
    fn anchored_zoom_keeps_point_fixed() {
        let mut zoom = sized();
        let anchor = Vector::new(100.0, 50.0);
        zoom.wheel(5.0, anchor); // 1.0 -> 2.0
        assert!((zoom.scale().value() - 2.0).abs() < 1e-5);
        // Content point under the anchor: (anchor - offset) / scale must be unchanged.
        let content = (anchor - zoom.offset()) * (1.0 / zoom.scale().value());
        assert!((content.x - 100.0).abs() < 1e-3);
        assert!((content.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn pinch_rejects_invalid_ratio() {
        let mut zoom = sized();
        assert!(!zoom.pinch(0.0, Vector::ZERO));
        assert!(!zoom.pinch(f32::NAN, Vector::ZERO));
        assert!(zoom.pinch(1.5, Vector::ZERO));
        assert_eq!(zoom.percent().value(), 125);
    }

    #[test]
    fn double_click_cycles_back_at_max() {
        let mut zoom = sized();
        for _ in 0..4 {
            zoom.double_click(Vector::ZERO);
        }
        assert!(zoom.scale().is_max());
        zoom.double_click(Vector::ZERO);
        assert_eq!(zoom.scale().value(), 1.0);
    }
}
