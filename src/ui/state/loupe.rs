// SPDX-License-Identifier: MPL-2.0
//! Magnifier loupe state and geometry.
//!
//! The loupe is a circle of diameter `L` centred on the pointer. It shows the
//! image scaled by `z`, shifted so the pixel under the pointer sits at the
//! loupe's centre. The loupe is not clamped to the image and may overhang it.

use crate::domain::ui::newtypes::{LoupeSize, LoupeZoomLevel, ZoomScale};
use iced::{Point, Rectangle, Size, Vector};

/// Pointer position relative to the top-left of the rendered image, plus the
/// image's rendered size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PointerSample {
    /// Samples `cursor` against the rendered image `bounds`.
    ///
    /// Returns `None` when the cursor is outside the image.
    #[must_use]
    pub fn from_cursor(cursor: Point, bounds: Rectangle) -> Option<Self> {
        if !bounds.contains(cursor) {
            return None;
        }
        Some(Self {
            x: cursor.x - bounds.x,
            y: cursor.y - bounds.y,
            width: bounds.width,
            height: bounds.height,
        })
    }
}

/// Loupe placement and background mapping, in image-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoupeGeometry {
    /// Top edge of the loupe (`y - L/2`).
    pub top: f32,
    /// Left edge of the loupe (`x - L/2`).
    pub left: f32,
    /// Loupe diameter.
    pub size: f32,
    /// Magnified image size (`width * z`, `height * z`).
    pub background_size: Size,
    /// Offset of the magnified image inside the loupe
    /// (`-x * z + L/2`, `-y * z + L/2`).
    pub background_offset: Vector,
}

impl LoupeGeometry {
    #[must_use]
    pub fn compute(sample: PointerSample, size: LoupeSize, zoom: LoupeZoomLevel) -> Self {
        let l = size.value();
        let z = zoom.value();
        let half = l / 2.0;
        Self {
            top: sample.y - half,
            left: sample.x - half,
            size: l,
            background_size: Size::new(sample.width * z, sample.height * z),
            background_offset: Vector::new(-sample.x * z + half, -sample.y * z + half),
        }
    }

    /// Loupe square relative to the image origin.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::new(self.left, self.top), Size::new(self.size, self.size))
    }

    /// Magnified image rectangle relative to the image origin.
    #[must_use]
    pub fn background_bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(
                self.left + self.background_offset.x,
                self.top + self.background_offset.y,
            ),
            self.background_size,
        )
    }
}

/// Hover tracking for the loupe.
#[derive(Debug, Clone, Default)]
pub struct LoupeState {
    sample: Option<PointerSample>,
}

impl LoupeState {
    /// Records a pointer sample; `None` means the pointer left the image.
    pub fn pointer_moved(&mut self, sample: Option<PointerSample>) {
        self.sample = sample;
    }

    pub fn pointer_left(&mut self) {
        self.sample = None;
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.sample.is_some()
    }

    #[must_use]
    pub fn sample(&self) -> Option<PointerSample> {
        self.sample
    }

    /// Visible while hovering the image and not actively zoomed.
    #[must_use]
    pub fn is_visible(&self, scale: ZoomScale) -> bool {
        self.is_hovering() && !scale.is_active()
    }

    /// Geometry to draw, if the loupe is visible.
    #[must_use]
    pub fn geometry(
        &self,
        scale: ZoomScale,
        size: LoupeSize,
        zoom: LoupeZoomLevel,
    ) -> Option<LoupeGeometry> {
        if !self.is_visible(scale) {
            return None;
        }
        self.sample
            .map(|sample| LoupeGeometry::compute(sample, size, zoom))
    }
}
