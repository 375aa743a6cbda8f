// SPDX-License-Identifier: MPL-2.0
//! Overlay toolbar: zoom controls, photo actions and the close button.

use crate::domain::ui::newtypes::{ZoomPercent, ZoomScale};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing, typography};
use crate::ui::gallery::config::{InteractionMode, ViewMode};
use crate::ui::styles;
use iced::widget::{button, container, tooltip, Row, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_mode: ViewMode,
    pub interaction: InteractionMode,
    pub scale: ZoomScale,
    pub percent: ZoomPercent,
    /// Action buttons wait for the first photo to load or fail.
    pub actions_ready: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Download,
    Share,
    OpenOriginal,
    Close,
}

fn overlay_button<'a>(
    glyph: &'a str,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let button = button(
        container(Text::new(glyph).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::OVERLAY_BUTTON))
    .height(Length::Fixed(sizing::OVERLAY_BUTTON))
    .padding(0)
    .style(styles::button_overlay_default)
    .on_press_maybe(on_press);

    tooltip(button, Text::new(label), tooltip::Position::Bottom)
        .gap(4)
        .into()
}

/// Zoom out, readout, zoom in and reset.
fn zoom_group<'a>(ctx: &ViewContext<'a>) -> Row<'a, Message> {
    let scale = ctx.scale;
    let readout = ctx.i18n.tr_with_args(
        "gallery-zoom-readout",
        &[("percent", &ctx.percent.value().to_string())],
    );

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(overlay_button(
            "−",
            ctx.i18n.tr("gallery-zoom-out"),
            (!scale.is_min()).then_some(Message::ZoomOut),
        ))
        .push(
            container(Text::new(readout).size(typography::BODY).color(WHITE))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(sizing::OVERLAY_BUTTON / 2.0)),
        )
        .push(overlay_button(
            "+",
            ctx.i18n.tr("gallery-zoom-in"),
            (!scale.is_max()).then_some(Message::ZoomIn),
        ))
        .push(overlay_button(
            "⟲",
            ctx.i18n.tr("gallery-zoom-reset"),
            (!scale.is_min()).then_some(Message::ResetZoom),
        ))
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut left = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if ctx.actions_ready {
        left = left.push(overlay_button(
            "⤓",
            ctx.i18n.tr("gallery-download"),
            Some(Message::Download),
        ));
        left = match ctx.view_mode {
            ViewMode::Windowed => left.push(overlay_button(
                "↗",
                ctx.i18n.tr("gallery-open-original"),
                Some(Message::OpenOriginal),
            )),
            ViewMode::Full => left.push(overlay_button(
                "⇪",
                ctx.i18n.tr("gallery-share"),
                Some(Message::Share),
            )),
        };
    }

    if ctx.interaction == InteractionMode::Loupe {
        left = left.push(zoom_group(&ctx));
    }

    let close = overlay_button(
        ctx.view_mode.close_glyph(),
        ctx.i18n.tr("gallery-close"),
        Some(Message::Close),
    );

    Row::new()
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(left)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(close)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(i18n: &I18n, view_mode: ViewMode, actions_ready: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            view_mode,
            interaction: InteractionMode::Loupe,
            scale: ZoomScale::default(),
            percent: ZoomPercent::default(),
            actions_ready,
        }
    }

    #[test]
    fn controls_view_renders_in_both_modes() {
        let i18n = I18n::default();
        let _windowed = view(context(&i18n, ViewMode::Windowed, true));
        let _full = view(context(&i18n, ViewMode::Full, true));
    }

    #[test]
    fn controls_view_renders_before_load() {
        let i18n = I18n::default();
        let _element = view(context(&i18n, ViewMode::Windowed, false));
    }
}
