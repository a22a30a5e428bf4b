// SPDX-License-Identifier: MPL-2.0
//! Footer below the gallery: the loading spinner and the "Load more" button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub has_more: bool,
    pub is_loading: bool,
    /// Whether a press would start a fetch right now.
    pub can_load_more: bool,
    /// Current spinner angle in radians.
    pub spinner_rotation: f32,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    LoadMorePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoadMoreRequested,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LoadMorePressed => Event::LoadMoreRequested,
    }
}

/// Whether the "Load more" button is part of the layout.
#[must_use]
pub fn is_button_visible(has_more: bool) -> bool {
    has_more
}

/// Render the footer. Returns an empty column when neither part applies.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut footer = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if ctx.is_loading {
        let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
            .with_size(sizing::ICON_LG)
            .into_element();
        footer = footer
            .push(spinner)
            .push(Text::new(ctx.i18n.tr("gallery-loading")).size(typography::BODY_SM));
    }

    if is_button_visible(ctx.has_more) {
        let label = Text::new(ctx.i18n.tr("load-more-button")).size(typography::BODY);
        let load_more = button(label)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .on_press_maybe(ctx.can_load_more.then_some(Message::LoadMorePressed));
        footer = footer.push(load_more);
    }

    Container::new(footer)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}
