// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::notifications::{self, Manager};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: Option<&'a gallery::State>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.gallery) {
        (Screen::Gallery, Some(state)) => state.view(ctx.i18n).map(Message::Gallery),
        (Screen::Closed, Some(state)) => view_closed(state, ctx.i18n),
        _ => view_unavailable(ctx.i18n),
    };

    Stack::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(notifications::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn centered<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(content.spacing(spacing::MD).align_x(Horizontal::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_closed<'a>(state: &'a gallery::State, i18n: &'a I18n) -> Element<'a, Message> {
    let photos = state.collection().len().to_string();
    centered(
        Column::new()
            .push(Text::new(i18n.tr("gallery-closed-title")).size(typography::TITLE_MD))
            .push(
                Text::new(i18n.tr_with_args("gallery-closed-count", &[("count", &photos)]))
                    .size(typography::BODY),
            )
            .push(
                button(Text::new(i18n.tr("gallery-reopen")))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::Reopen),
            ),
    )
}

fn view_unavailable(i18n: &I18n) -> Element<'_, Message> {
    centered(
        Column::new()
            .push(Text::new(i18n.tr("startup-no-collection-title")).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("startup-no-collection-hint")).size(typography::BODY)),
    )
}
