// SPDX-License-Identifier: MPL-2.0
//! Search bar: a text field plus a submit button.
//!
//! The bar owns only the draft text. Submitting emits the draft to the parent,
//! which decides whether the query is acceptable.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub draft: &'a str,
}

/// Messages emitted by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(String),
}

/// Process a search bar message and return the corresponding event.
pub fn update(message: Message, draft: &mut String) -> Event {
    match message {
        Message::DraftChanged(value) => {
            *draft = value;
            Event::None
        }
        Message::Submit => Event::Submitted(draft.clone()),
    }
}

/// Render the search bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let submit = button(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit);
    let row = Container::new(row).max_width(sizing::SEARCH_BAR_MAX_WIDTH);

    Container::new(row)
        .padding(spacing::SM)
        .center_x(Length::Fill)
        .into()
}
