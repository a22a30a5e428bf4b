// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: search bar, scrollable gallery with its footer.
//! The modal viewer and the toasts are stacked above.

use super::Message;
use crate::application::search::SearchController;
use crate::i18n::fluent::I18n;
use crate::ui::modal::ModalViewer;
use crate::ui::notifications;
use crate::ui::thumbnails::ThumbnailCache;
use crate::ui::{gallery, load_more, search_bar};
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search: &'a SearchController,
    pub draft: &'a str,
    pub columns: u16,
    pub thumbnails: &'a ThumbnailCache,
    pub modal: &'a ModalViewer,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let search_bar = search_bar::view(search_bar::ViewContext {
        i18n: ctx.i18n,
        draft: ctx.draft,
    })
    .map(Message::SearchBar);

    let gallery = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        images: ctx.search.images(),
        thumbnails: ctx.thumbnails,
        columns: ctx.columns,
        is_loading: ctx.search.is_loading(),
        has_searched: ctx.search.has_searched(),
    })
    .map(Message::Gallery);

    let footer = load_more::view(load_more::ViewContext {
        i18n: ctx.i18n,
        has_more: ctx.search.has_more(),
        is_loading: ctx.search.is_loading(),
        can_load_more: ctx.search.can_load_more(),
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::LoadMore);

    let results = scrollable(Column::new().push(gallery).push(footer))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Column::new()
        .push(search_bar)
        .push(results)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(page).width(Length::Fill).height(Length::Fill));

    if let Some(modal) = ctx.modal.view(ctx.i18n, ctx.thumbnails) {
        layers = layers.push(modal.map(Message::Modal));
    }

    layers
        .push(notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
