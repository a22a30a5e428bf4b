// SPDX-License-Identifier: MPL-2.0
//! Toast rendering, stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// The visible toasts, or an empty zero-size element when there are none.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = manager
        .visible_with_ids()
        .map(|(id, notification)| card(id, notification, i18n))
        .collect();

    if cards.is_empty() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    Container::new(
        Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD)
    .into()
}

/// Resolves the message text in the current locale.
pub fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn card<'a>(id: NotificationId, notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let glyph = Text::new(notification.severity().glyph())
        .size(sizing::ICON_SM)
        .style(move |_| text::Style {
            color: Some(accent),
        });

    let dismiss = button(Text::new("\u{2715}").size(typography::BODY))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(
            Text::new(message_text(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent))
        .into()
}
