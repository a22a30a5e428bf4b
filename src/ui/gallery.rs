// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the accumulated search results.

use crate::domain::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::thumbnails::{Thumbnail, ThumbnailCache};
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageRecord],
    pub thumbnails: &'a ThumbnailCache,
    pub columns: u16,
    pub is_loading: bool,
    pub has_searched: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The image at this position of the result list was clicked.
    ImageSelected(usize),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ThumbnailPressed(index) => Event::ImageSelected(index),
    }
}

/// Render the grid, or an empty-state message when there is nothing to show.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        return empty_state(&ctx);
    }

    let columns = usize::from(ctx.columns.max(1));
    let mut grid = Column::new().spacing(spacing::XS).width(Length::Fill);

    for (row_index, chunk) in ctx.images.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::XS).width(Length::Fill);
        for (offset, record) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            row = row.push(cell(index, ctx.thumbnails.peek(record.thumbnail_url()), ctx.i18n));
        }
        // Pad the last row so cells keep the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .padding([0.0, spacing::SM])
        .into()
}

fn cell<'a>(index: usize, thumbnail: Thumbnail, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnail {
        Thumbnail::Ready(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .into(),
        Thumbnail::Loading => placeholder(Text::new("\u{2026}").size(typography::TITLE_MD)),
        Thumbnail::Failed => placeholder(
            Text::new(i18n.tr("gallery-thumbnail-failed")).size(typography::CAPTION),
        ),
    };

    button(content)
        .on_press(Message::ThumbnailPressed(index))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .into()
}

fn placeholder<'a>(label: Text<'a>) -> Element<'a, Message> {
    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .style(styles::container::thumbnail_placeholder)
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = if ctx.is_loading {
        "gallery-loading"
    } else if ctx.has_searched {
        "gallery-empty-results"
    } else {
        "gallery-empty-initial"
    };

    Container::new(Text::new(ctx.i18n.tr(key)).size(typography::TITLE_SM))
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .into()
}
