// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button floating over the photo (arrows, close, actions).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Disabled => opacity::OVERLAY_SUBTLE,
            button::Status::Active => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Default overlay style with white glyphs.
pub fn overlay_default(theme: &Theme, status: button::Status) -> button::Style {
    overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)(theme, status)
}

/// Borderless thumbnail button; brightness is applied on the image itself.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        button::Status::Active | button::Status::Disabled => Color::TRANSPARENT,
    };
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_hover_is_more_opaque() {
        let style = overlay(WHITE, 0.5, 0.8);
        let active = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);

        let alpha = |s: &button::Style| match s.background {
            Some(Background::Color(c)) => c.a,
            _ => 0.0,
        };
        assert!(alpha(&hovered) > alpha(&active));
        assert_eq!(active.text_color, WHITE);
    }

    #[test]
    fn thumbnail_highlights_on_hover() {
        let idle = thumbnail(&Theme::Dark, button::Status::Active);
        let hovered = thumbnail(&Theme::Dark, button::Status::Hovered);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(hovered.border.color, WHITE);
    }
}
