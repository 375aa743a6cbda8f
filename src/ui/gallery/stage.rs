// SPDX-License-Identifier: MPL-2.0
//! Photo stage: a canvas that draws the current photo with its zoom
//! transform, the slide-in offset and the magnifier loupe, and turns raw
//! pointer and touch events into [`StageEvent`]s.
//!
//! All positions published by the stage are local to the canvas bounds.

use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::state::{LoupeGeometry, PointerSample};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Size, Vector};
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);
const DOUBLE_CLICK_DISTANCE: f32 = 10.0;

/// Pixels per wheel line for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f32 = 50.0;

/// Height of the horizontal bands used to approximate the round loupe clip.
const LOUPE_BAND_HEIGHT: f32 = 2.0;

/// Pointer and touch input recognized on the stage.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    /// Pointer moved inside the stage. `sample` is set while it is over the
    /// photo and the loupe is enabled.
    CursorMoved {
        position: Point,
        sample: Option<PointerSample>,
    },
    CursorLeft,
    Pressed(Point),
    Released(Point),
    DoubleClicked(Point),
    WheelScrolled {
        lines: f32,
        position: Point,
    },
    FingerPressed {
        id: touch::Finger,
        position: Point,
    },
    FingerMoved {
        id: touch::Finger,
        position: Point,
    },
    FingerLifted {
        id: touch::Finger,
        position: Point,
    },
}

/// A stage event together with the layout it was measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct StageInput {
    pub event: StageEvent,
    /// Centre of the fitted photo, the origin of zoom anchors.
    pub center: Point,
    /// Size of the fitted photo at scale 1.
    pub fitted: Size,
}

impl StageInput {
    /// `position` expressed relative to the photo centre.
    #[must_use]
    pub fn anchor(&self, position: Point) -> Vector {
        position - self.center
    }
}

/// Largest rectangle of the given aspect ratio that fits `area`, centred.
#[must_use]
pub fn fit_contain(area: Size, aspect_ratio: f32) -> Rectangle {
    if area.width <= 0.0 || area.height <= 0.0 || !aspect_ratio.is_finite() || aspect_ratio <= 0.0
    {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let area_aspect = area.width / area.height;
    let size = if aspect_ratio > area_aspect {
        Size::new(area.width, area.width / aspect_ratio)
    } else {
        Size::new(area.height * aspect_ratio, area.height)
    };

    Rectangle::new(
        Point::new(
            (area.width - size.width) / 2.0,
            (area.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Where `fitted` lands after scaling about its centre, panning by `offset`
/// and sliding horizontally by `slide_dx`.
#[must_use]
pub fn transformed(fitted: Rectangle, scale: f32, offset: Vector, slide_dx: f32) -> Rectangle {
    let center = fitted.center();
    let size = Size::new(fitted.width * scale, fitted.height * scale);
    Rectangle::new(
        Point::new(
            center.x + offset.x + slide_dx - size.width / 2.0,
            center.y + offset.y - size.height / 2.0,
        ),
        size,
    )
}

/// Canvas program drawing one photo.
#[derive(Debug, Clone, Copy)]
pub struct Stage<'a> {
    pub image: Option<&'a ImageData>,
    pub scale: f32,
    pub offset: Vector,
    /// Slide offset as a fraction of the stage width.
    pub slide_fraction: f32,
    pub loupe: Option<LoupeGeometry>,
    /// Report pointer samples for the loupe.
    pub track_loupe: bool,
}

/// Widget-local state.
#[derive(Debug, Default)]
pub struct State {
    hovering: bool,
    last_click: Option<(Instant, Point)>,
}

impl Stage<'_> {
    fn fitted(&self, area: Size) -> Rectangle {
        match self.image {
            Some(image) => fit_contain(area, image.aspect_ratio()),
            None => Rectangle::new(Point::ORIGIN, Size::ZERO),
        }
    }

    fn publish<Message>(
        &self,
        fitted: Rectangle,
        event: StageEvent,
        on_event: impl Fn(StageInput) -> Message,
    ) -> Action<Message> {
        Action::publish(on_event(StageInput {
            event,
            center: fitted.center(),
            fitted: fitted.size(),
        }))
    }

    fn handle_event(
        &self,
        state: &mut State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<(StageEvent, bool)> {
        let fitted = self.fitted(bounds.size());
        let local = |point: Point| Point::new(point.x - bounds.x, point.y - bounds.y);

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        state.hovering = true;
                        let sample = if self.track_loupe {
                            PointerSample::from_cursor(position, fitted)
                        } else {
                            None
                        };
                        Some((StageEvent::CursorMoved { position, sample }, false))
                    }
                    None if state.hovering => {
                        state.hovering = false;
                        Some((StageEvent::CursorLeft, false))
                    }
                    None => None,
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.hovering => {
                state.hovering = false;
                Some((StageEvent::CursorLeft, false))
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let now = Instant::now();
                let is_double = state.last_click.is_some_and(|(at, previous)| {
                    now.duration_since(at) <= DOUBLE_CLICK_THRESHOLD
                        && previous.distance(position) <= DOUBLE_CLICK_DISTANCE
                });
                if is_double {
                    state.last_click = None;
                    Some((StageEvent::DoubleClicked(position), true))
                } else {
                    state.last_click = Some((now, position));
                    Some((StageEvent::Pressed(position), true))
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Releases outside the stage still end drags and swipes.
                let position = cursor.position().map(local)?;
                Some((StageEvent::Released(position), false))
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                Some((StageEvent::WheelScrolled { lines, position }, true))
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                Some((
                    StageEvent::FingerPressed {
                        id: *id,
                        position: local(*position),
                    },
                    true,
                ))
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => Some((
                StageEvent::FingerMoved {
                    id: *id,
                    position: local(*position),
                },
                true,
            )),
            iced::Event::Touch(
                touch::Event::FingerLifted { id, position } | touch::Event::FingerLost { id, position },
            ) => Some((
                StageEvent::FingerLifted {
                    id: *id,
                    position: local(*position),
                },
                false,
            )),
            _ => None,
        }
    }
}

/// Wraps a [`Stage`] with the mapping into the parent's message type.
pub struct StageProgram<'a, F> {
    pub stage: Stage<'a>,
    pub on_event: F,
}

impl<Message, F> canvas::Program<Message> for StageProgram<'_, F>
where
    F: Fn(StageInput) -> Message,
{
    type State = State;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let (stage_event, capture) = self.stage.handle_event(state, event, bounds, cursor)?;
        let fitted = self.stage.fitted(bounds.size());
        let action = self.stage.publish(fitted, stage_event, &self.on_event);
        Some(if capture { action.and_capture() } else { action })
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let stage = &self.stage;

        if let Some(image) = stage.image {
            let fitted = stage.fitted(bounds.size());
            let slide_dx = stage.slide_fraction * bounds.width;
            let shown = transformed(fitted, stage.scale, stage.offset, slide_dx);

            frame.with_clip(Rectangle::with_size(bounds.size()), |frame| {
                frame.draw_image(shown, canvas::Image::new(image.handle.clone()));

                if let Some(loupe) = stage.loupe {
                    let origin = Vector::new(fitted.x + slide_dx, fitted.y);
                    draw_loupe(frame, &loupe, origin, image);
                }
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        if self.stage.scale > 1.0 {
            mouse::Interaction::Grab
        } else if self.stage.loupe.is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draws the magnified photo inside a circle of the loupe's diameter.
///
/// Canvas clips are rectangular, so the disc is built from thin horizontal
/// bands, each clipped to the chord of the circle at that height.
fn draw_loupe(frame: &mut Frame, loupe: &LoupeGeometry, origin: Vector, image: &ImageData) {
    let bounds = loupe.bounds() + origin;
    let background = loupe.background_bounds() + origin;
    let center = bounds.center();
    let radius = loupe.size / 2.0;

    frame.fill(&Path::circle(center, radius), palette::GRAY_900);

    let mut top = bounds.y;
    while top < bounds.y + bounds.height {
        let band_height = LOUPE_BAND_HEIGHT.min(bounds.y + bounds.height - top);
        let dy = (top + band_height / 2.0 - center.y).abs();
        let half_chord = (radius * radius - dy * dy).max(0.0).sqrt();
        if half_chord > 0.0 {
            let band = Rectangle::new(
                Point::new(center.x - half_chord, top),
                Size::new(half_chord * 2.0, band_height),
            );
            frame.with_clip(band, |band_frame| {
                let local = Rectangle::new(
                    Point::new(background.x - band.x, background.y - band.y),
                    background.size(),
                );
                band_frame.draw_image(local, canvas::Image::new(image.handle.clone()));
            });
        }
        top += band_height;
    }

    frame.stroke(
        &Path::circle(center, radius),
        Stroke::default()
            .with_color(palette::LOUPE_BORDER)
            .with_width(sizing::LOUPE_BORDER),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_photo_fits_width() {
        let rect = fit_contain(Size::new(800.0, 600.0), 2.0);
        assert_eq!(rect.size(), Size::new(800.0, 400.0));
        assert_eq!(rect.position(), Point::new(0.0, 100.0));
    }

    #[test]
    fn tall_photo_fits_height() {
        let rect = fit_contain(Size::new(800.0, 600.0), 0.5);
        assert_eq!(rect.size(), Size::new(300.0, 600.0));
        assert_eq!(rect.position(), Point::new(250.0, 0.0));
    }

    #[test]
    fn degenerate_inputs_fit_nothing() {
        assert_eq!(fit_contain(Size::new(0.0, 600.0), 1.5).size(), Size::ZERO);
        assert_eq!(fit_contain(Size::new(800.0, 600.0), f32::NAN).size(), Size::ZERO);
    }

    #[test]
    fn transform_scales_about_centre() {
        let fitted = Rectangle::new(Point::new(100.0, 100.0), Size::new(200.0, 100.0));
        let shown = transformed(fitted, 2.0, Vector::ZERO, 0.0);
        assert_eq!(shown.center(), fitted.center());
        assert_eq!(shown.size(), Size::new(400.0, 200.0));
    }

    #[test]
    fn transform_applies_pan_and_slide() {
        let fitted = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        let shown = transformed(fitted, 1.0, Vector::new(10.0, -5.0), 50.0);
        assert_eq!(shown.position(), Point::new(60.0, -5.0));
    }

    #[test]
    fn anchors_are_relative_to_photo_centre() {
        let input = StageInput {
            event: StageEvent::CursorLeft,
            center: Point::new(400.0, 300.0),
            fitted: Size::new(800.0, 600.0),
        };
        assert_eq!(input.anchor(Point::new(450.0, 250.0)), Vector::new(50.0, -50.0));
    }
}
