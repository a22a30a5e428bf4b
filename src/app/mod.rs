// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search controller
//! and the gallery components.
//!
//! The `App` struct wires together localization, configuration, the search
//! client and the UI components, and translates messages into side effects
//! like page fetches and image downloads.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageSearch;
use crate::application::search::{SearchController, SearchEvent};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::PixabayClient;
use crate::ui::modal::ModalViewer;
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::theming::AppTheme;
use crate::ui::thumbnails::ThumbnailCache;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    search: SearchController,
    client: Arc<dyn ImageSearch>,
    /// Text currently typed in the search bar.
    draft: String,
    columns: u16,
    thumbnails: ThumbnailCache,
    modal: ModalViewer,
    notifications: notifications::Manager,
    loading_started_at: Option<Instant>,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.search.query())
            .field("images", &self.search.images().len())
            .field("modal_open", &self.modal.is_visible())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the startup data is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || match boot_state.borrow_mut().take() {
        Some((flags, config, warning)) => App::new(flags, config, warning),
        None => App::new(Flags::default(), Config::default(), None),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the HTTP client from configuration and starts the first fetch.
    fn new(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        config.override_api_key(flags.api_key.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut warnings: Vec<String> = config_warning.into_iter().collect();
        let client = match PixabayClient::new(&config.api) {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!(%error, "invalid [api] settings, using defaults");
                warnings.push("notification-api-config-error".to_string());
                let fallback = config::ApiConfig {
                    api_key: config.api.api_key.clone(),
                    ..config::ApiConfig::default()
                };
                match PixabayClient::new(&fallback) {
                    Ok(client) => client,
                    Err(error) => {
                        tracing::error!(%error, "failed to build HTTP client");
                        return Self::failed_boot(i18n, &config, error.to_string());
                    }
                }
            }
        };
        if !client.has_api_key() {
            tracing::warn!("no API key configured; set {}", config::ENV_API_KEY);
        }

        let initial_query = flags.query.or_else(|| config.gallery.initial_query.clone());
        let (mut app, task) = Self::with_client(Arc::new(client), i18n, &config, initial_query);
        let now = Instant::now();
        for key in warnings {
            app.notifications
                .push(Notification::startup(Severity::Warning, key), now);
        }
        (app, task)
    }

    /// Builds the application around any search backend.
    ///
    /// Submits `initial_query` when present, otherwise loads the default
    /// gallery.
    pub fn with_client(
        client: Arc<dyn ImageSearch>,
        i18n: I18n,
        config: &Config,
        initial_query: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut app = Self::bare(client, i18n, config);

        let task = match initial_query.filter(|q| !q.trim().is_empty()) {
            Some(query) => {
                app.draft = query.clone();
                app.update_ctx(|ctx| {
                    update::apply_search_event(ctx, SearchEvent::QuerySubmitted(query))
                })
            }
            None => app.update_ctx(|ctx| update::apply_search_event(ctx, SearchEvent::Mounted)),
        };
        (app, task)
    }

    fn bare(client: Arc<dyn ImageSearch>, i18n: I18n, config: &Config) -> Self {
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            search: SearchController::new(),
            client,
            draft: String::new(),
            columns: config.gallery.columns(),
            thumbnails: ThumbnailCache::new(config.gallery.thumbnail_cache_size()),
            modal: ModalViewer::new(),
            notifications: notifications::Manager::new(),
            loading_started_at: None,
            spinner_rotation: 0.0,
        }
    }

    /// Starts with no search backend reachable; every request fails.
    fn failed_boot(i18n: I18n, config: &Config, detail: String) -> (Self, Task<Message>) {
        use crate::application::port::{BytesFuture, SearchFuture};
        use crate::domain::error::FetchError;
        use crate::domain::gallery::PageNumber;

        struct Unavailable(String);

        impl ImageSearch for Unavailable {
            fn search(&self, _query: &str, _page: PageNumber) -> SearchFuture {
                let detail = self.0.clone();
                Box::pin(async move { Err(FetchError::Network(detail)) })
            }

            fn fetch_image(&self, _url: &str) -> BytesFuture {
                let detail = self.0.clone();
                Box::pin(async move { Err(FetchError::Network(detail)) })
            }
        }

        let mut app = Self::bare(Arc::new(Unavailable(detail.clone())), i18n, config);
        app.notifications.push(
            Notification::startup(Severity::Error, "notification-client-error")
                .with_arg("detail", detail),
            Instant::now(),
        );
        (app, Task::none())
    }

    fn update_ctx<R>(&mut self, f: impl FnOnce(&mut update::UpdateContext<'_>) -> R) -> R {
        let mut ctx = update::UpdateContext {
            search: &mut self.search,
            client: &self.client,
            draft: &mut self.draft,
            thumbnails: &mut self.thumbnails,
            modal: &mut self.modal,
            notifications: &mut self.notifications,
            loading_started_at: &mut self.loading_started_at,
            spinner_rotation: &mut self.spinner_rotation,
        };
        f(&mut ctx)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let query = self.search.query();
        if query.is_empty() {
            app_name
        } else {
            format!("{query} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let modal_sub = self.modal.subscription().map(Message::Modal);
        let tick_sub = subscription::create_tick_subscription(
            self.search.is_loading(),
            self.notifications.has_notifications(),
        );
        Subscription::batch([modal_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_ctx(|ctx| update::update(ctx, message))
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search: &self.search,
            draft: &self.draft,
            columns: self.columns,
            thumbnails: &self.thumbnails,
            modal: &self.modal,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
