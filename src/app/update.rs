// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers translate component events into controller transitions and turn
//! the controller's fetch tickets into `Task`s.

use super::Message;
use crate::application::port::ImageSearch;
use crate::application::search::{FetchTicket, SearchController, SearchEvent};
use crate::domain::error::FetchError;
use crate::domain::gallery::ImageRecord;
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::load_more::{self, Event as LoadMoreEvent};
use crate::ui::modal::{self, Event as ModalEvent, FullImageRequest, ModalViewer};
use crate::ui::notifications::{self, Notification, Source};
use crate::ui::search_bar::{self, Event as SearchBarEvent};
use crate::ui::thumbnails::ThumbnailCache;
use crate::ui::widgets::AnimatedSpinner;
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub search: &'a mut SearchController,
    pub client: &'a Arc<dyn ImageSearch>,
    pub draft: &'a mut String,
    pub thumbnails: &'a mut ThumbnailCache,
    pub modal: &'a mut ModalViewer,
    pub notifications: &'a mut notifications::Manager,
    pub loading_started_at: &'a mut Option<Instant>,
    pub spinner_rotation: &'a mut f32,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::SearchBar(msg) => handle_search_bar(ctx, msg),
        Message::Gallery(msg) => handle_gallery(ctx, msg),
        Message::LoadMore(msg) => handle_load_more(ctx, msg),
        Message::Modal(msg) => handle_modal(ctx, msg),
        Message::Notification(msg) => {
            ctx.notifications.update(msg);
            Task::none()
        }
        Message::PageLoaded { ticket, outcome } => handle_page_loaded(ctx, ticket, outcome),
        Message::ThumbnailLoaded { url, result } => {
            handle_thumbnail_loaded(ctx.thumbnails, &url, result);
            Task::none()
        }
        Message::FullImageLoaded { id, result } => {
            ctx.modal.full_image_loaded(id, result);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(ctx, now);
            Task::none()
        }
    }
}

/// Applies a controller event and runs the fetch it asks for, if any.
pub fn apply_search_event(ctx: &mut UpdateContext<'_>, event: SearchEvent) -> Task<Message> {
    match ctx.search.apply(event) {
        Some(ticket) => fetch_page(ctx.client, ticket),
        None => Task::none(),
    }
}

fn handle_search_bar(ctx: &mut UpdateContext<'_>, message: search_bar::Message) -> Task<Message> {
    match search_bar::update(message, ctx.draft) {
        SearchBarEvent::None => Task::none(),
        SearchBarEvent::Submitted(text) => submit_query(ctx, text),
    }
}

/// Submits `text`, warning the user instead when it is blank.
pub fn submit_query(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    if text.trim().is_empty() {
        ctx.notifications.push(Notification::empty_query(), Instant::now());
        return Task::none();
    }
    ctx.thumbnails.forget_failures();
    apply_search_event(ctx, SearchEvent::QuerySubmitted(text))
}

fn handle_gallery(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match gallery::update(message) {
        GalleryEvent::ImageSelected(index) => {
            let Some(record) = ctx.search.images().get(index).cloned() else {
                tracing::warn!(index, "selected image is out of range");
                return Task::none();
            };
            let request = ctx.modal.open(record);
            fetch_full_image(ctx.client, request)
        }
    }
}

fn handle_load_more(ctx: &mut UpdateContext<'_>, message: load_more::Message) -> Task<Message> {
    match load_more::update(message) {
        LoadMoreEvent::LoadMoreRequested => {
            apply_search_event(ctx, SearchEvent::LoadMoreRequested)
        }
    }
}

fn handle_modal(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match ctx.modal.update(message) {
        ModalEvent::None => Task::none(),
        // The closed image may belong to an earlier query; let its
        // thumbnail age out with the rest.
        ModalEvent::Closed => sync_thumbnails(ctx),
    }
}

fn handle_page_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: FetchTicket,
    outcome: Result<Vec<ImageRecord>, FetchError>,
) -> Task<Message> {
    let is_current = ticket.generation() == ctx.search.generation();

    let follow_up = apply_search_event(ctx, SearchEvent::PageLoaded { ticket, outcome });

    if is_current {
        match ctx.search.last_error() {
            Some(error) => {
                ctx.notifications
                    .push(Notification::search_failed(error), Instant::now());
            }
            None => ctx.notifications.dismiss_source(Source::Search),
        }
    }

    Task::batch([follow_up, sync_thumbnails(ctx)])
}

/// Downloads every displayed thumbnail the cache does not hold, including
/// ones evicted since they were first shown.
fn sync_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let shown: Vec<&str> = ctx
        .search
        .images()
        .iter()
        .chain(ctx.modal.image())
        .map(ImageRecord::thumbnail_url)
        .collect();
    let missing = ctx.thumbnails.sync(&shown);

    Task::batch(
        missing
            .into_iter()
            .map(|url| fetch_thumbnail(ctx.client, url)),
    )
}

fn handle_thumbnail_loaded(
    thumbnails: &mut ThumbnailCache,
    url: &str,
    result: Result<Vec<u8>, FetchError>,
) {
    match result {
        Ok(bytes) => thumbnails.insert(url, bytes),
        Err(error) => {
            tracing::warn!(%url, %error, "thumbnail download failed");
            thumbnails.mark_failed(url, &error);
        }
    }
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.notifications.tick(now);

    if ctx.search.is_loading() {
        let started = *ctx.loading_started_at.get_or_insert(now);
        *ctx.spinner_rotation = AnimatedSpinner::rotation_at(now.saturating_duration_since(started));
    } else {
        *ctx.loading_started_at = None;
        *ctx.spinner_rotation = 0.0;
    }
}

fn fetch_page(client: &Arc<dyn ImageSearch>, ticket: FetchTicket) -> Task<Message> {
    tracing::debug!(query = ticket.query(), page = %ticket.page(), "issuing page fetch");
    let future = client.search(ticket.query(), ticket.page());
    Task::perform(future, move |outcome| Message::PageLoaded { ticket, outcome })
}

fn fetch_thumbnail(client: &Arc<dyn ImageSearch>, url: String) -> Task<Message> {
    let future = client.fetch_image(&url);
    Task::perform(future, move |result| Message::ThumbnailLoaded { url, result })
}

fn fetch_full_image(client: &Arc<dyn ImageSearch>, request: FullImageRequest) -> Task<Message> {
    let FullImageRequest { id, url } = request;
    let future = client.fetch_image(&url);
    Task::perform(future, move |result| Message::FullImageLoaded { id, result })
}
