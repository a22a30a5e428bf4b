// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::search::FetchTicket;
use crate::domain::error::FetchError;
use crate::domain::gallery::{ImageId, ImageRecord};
use crate::ui::{gallery, load_more, modal, notifications, search_bar};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Gallery(gallery::Message),
    LoadMore(load_more::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// A search page request settled.
    PageLoaded {
        ticket: FetchTicket,
        outcome: Result<Vec<ImageRecord>, FetchError>,
    },
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    FullImageLoaded {
        id: ImageId,
        result: Result<Vec<u8>, FetchError>,
    },
    /// Periodic tick for toast auto-dismiss and the loading spinner.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Query submitted at startup; overrides `[gallery] initial_query`.
    pub query: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// API key; overrides both the config file and `PIXABAY_API_KEY`.
    pub api_key: Option<String>,
}
