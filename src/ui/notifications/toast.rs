// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

fn resolve(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        return i18n.tr(notification.message_key());
    }
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

fn toast<'a>(notification: &'a Notification, i18n: &I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            text(notification.severity().glyph())
                .size(typography::BODY_LG)
                .color(accent),
        )
        .push(
            text(resolve(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(text("✕").size(typography::CAPTION))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(button::text),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Bottom-right stack of visible toasts.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    if manager.visible_count() == 0 {
        return Space::new().into();
    }

    let column = Column::with_children(manager.visible().map(|n| toast(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_border_uses_accent() {
        let style = toast_style(&Theme::Dark, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }
}
