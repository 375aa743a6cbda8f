// SPDX-License-Identifier: MPL-2.0
//! Bottom thumbnail strip of the windowed modal.
//!
//! The strip keeps the current photo centred: as many neighbours as fit are
//! shown on each side, and missing neighbours at the collection edges are
//! replaced by empty slots.

use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, container, image, responsive, Container, Row, Space};
use iced::{Background, ContentFit, Element, Length};
use std::ops::Range;

#[derive(Debug, Clone, Copy)]
pub struct Thumbnail<'a> {
    pub index: usize,
    pub image: Option<&'a ImageData>,
    pub is_current: bool,
}

pub struct ViewContext<'a> {
    /// Thumbnails of the navigation window, in collection order.
    pub thumbnails: Vec<Thumbnail<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(usize),
}

/// Thumbnails shown around the current one for a strip `width` wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSpan {
    /// Positions (into the thumbnail list) to render.
    pub range: Range<usize>,
    /// Empty slots before the first thumbnail.
    pub leading_slots: usize,
    /// Empty slots after the last thumbnail.
    pub trailing_slots: usize,
}

fn slot_width() -> f32 {
    sizing::THUMBNAIL_WIDTH + spacing::XXS
}

#[must_use]
pub fn visible_span(count: usize, current: usize, width: f32) -> VisibleSpan {
    if count == 0 {
        return VisibleSpan {
            range: 0..0,
            leading_slots: 0,
            trailing_slots: 0,
        };
    }
    let current = current.min(count - 1);
    let side = ((width - sizing::THUMBNAIL_CURRENT_WIDTH) / 2.0 / slot_width()).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let per_side = side.max(0.0) as usize;

    let start = current.saturating_sub(per_side);
    let end = (current + per_side + 1).min(count);
    VisibleSpan {
        range: start..end,
        leading_slots: per_side - (current - start),
        trailing_slots: per_side - (end - current - 1),
    }
}

fn placeholder<'a>() -> Container<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

fn thumbnail_view(thumbnail: Thumbnail<'_>) -> Element<'_, Message> {
    let width = if thumbnail.is_current {
        sizing::THUMBNAIL_CURRENT_WIDTH
    } else {
        sizing::THUMBNAIL_WIDTH
    };
    let alpha = if thumbnail.is_current {
        opacity::OPAQUE
    } else {
        opacity::THUMBNAIL_DIMMED
    };

    let content: Element<'_, Message> = match thumbnail.image {
        Some(data) => image::Image::new(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .opacity(alpha)
            .into(),
        None => placeholder().into(),
    };

    button(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::Select(thumbnail.index))
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let thumbnails = ctx.thumbnails;
    let current = thumbnails
        .iter()
        .position(|thumbnail| thumbnail.is_current)
        .unwrap_or(0);

    let strip = responsive(move |size| {
        let span = visible_span(thumbnails.len(), current, size.width);
        let slot = Length::Fixed(sizing::THUMBNAIL_WIDTH);

        let mut row = Row::new()
            .spacing(spacing::XXS)
            .align_y(iced::alignment::Vertical::Center);
        for _ in 0..span.leading_slots {
            row = row.push(Space::new().width(slot));
        }
        for thumbnail in &thumbnails[span.range.clone()] {
            row = row.push(thumbnail_view(*thumbnail));
        }
        for _ in 0..span.trailing_slots {
            row = row.push(Space::new().width(slot));
        }

        container(row)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    });

    container(strip)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FILMSTRIP_HEIGHT))
        .padding([spacing::XS, 0.0])
        .into()
}
