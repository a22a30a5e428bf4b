// SPDX-License-Identifier: MPL-2.0
use futures_util::future::FutureExt;
use iced_gallery::application::port::{BytesFuture, ImageSearch, SearchFuture};
use iced_gallery::application::search::{FetchTicket, SearchController, SearchEvent};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::error::FetchError;
use iced_gallery::domain::gallery::{ImageId, ImageRecord, PageNumber, PAGE_SIZE};
use iced_gallery::i18n::fluent::I18n;
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::tempdir;

type PageResult = Result<Vec<ImageRecord>, FetchError>;

/// Search service answering from a queue of canned pages and recording calls.
#[derive(Default)]
struct ScriptedSearch {
    responses: Mutex<VecDeque<PageResult>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSearch {
    fn with(responses: impl IntoIterator<Item = PageResult>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ImageSearch for ScriptedSearch {
    fn search(&self, query: &str, page: PageNumber) -> SearchFuture {
        self.calls
            .lock()
            .expect("calls lock")
            .push((query.to_string(), page.value()));
        let response = self
            .responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Ok(Vec::new()));
        async move { response }.boxed()
    }

    fn fetch_image(&self, _url: &str) -> BytesFuture {
        async { Ok(vec![0_u8; 4]) }.boxed()
    }
}

fn page(first_id: u64, count: usize) -> Vec<ImageRecord> {
    (0..count as u64)
        .map(|offset| {
            let id = first_id + offset;
            let description = format!("image {id}");
            ImageRecord::new(
                ImageId::new(id),
                format!("https://cdn.test/{id}_640.jpg"),
                format!("https://cdn.test/{id}_1280.jpg"),
                Some(&description),
            )
        })
        .collect()
}

/// Runs `ticket` against `service` and feeds the outcome back, following
/// any fetch the controller asks for next.
async fn drive(
    controller: &mut SearchController,
    service: &ScriptedSearch,
    mut ticket: Option<FetchTicket>,
) {
    while let Some(current) = ticket {
        let outcome = service.search(current.query(), current.page()).await;
        ticket = controller.apply(SearchEvent::PageLoaded {
            ticket: current,
            outcome,
        });
    }
}

#[tokio::test]
async fn searching_and_loading_more_accumulates_pages() {
    let service = ScriptedSearch::with([Ok(page(1, PAGE_SIZE)), Ok(page(100, 5))]);
    let mut controller = SearchController::new();

    let ticket = controller.apply(SearchEvent::QuerySubmitted("cats".into()));
    assert!(controller.is_loading());
    drive(&mut controller, &service, ticket).await;

    assert_eq!(controller.images().len(), PAGE_SIZE);
    assert!(controller.has_more());
    assert!(!controller.is_loading());

    let ticket = controller.apply(SearchEvent::LoadMoreRequested);
    drive(&mut controller, &service, ticket).await;

    assert_eq!(controller.images().len(), PAGE_SIZE + 5);
    assert!(!controller.has_more());
    assert_eq!(controller.page(), PageNumber::new(2));
    assert_eq!(
        service.calls(),
        vec![("cats".to_string(), 1), ("cats".to_string(), 2)]
    );

    // No further page once a short page arrived.
    assert!(controller.apply(SearchEvent::LoadMoreRequested).is_none());
}

#[tokio::test]
async fn new_query_replaces_previous_results() {
    let service = ScriptedSearch::with([Ok(page(1, PAGE_SIZE)), Ok(page(500, 3))]);
    let mut controller = SearchController::new();

    let ticket = controller.apply(SearchEvent::QuerySubmitted("cats".into()));
    drive(&mut controller, &service, ticket).await;

    let ticket = controller.apply(SearchEvent::QuerySubmitted("  dogs ".into()));
    assert!(controller.images().is_empty());
    drive(&mut controller, &service, ticket).await;

    assert_eq!(controller.query(), "dogs");
    let ids: Vec<u64> = controller
        .images()
        .iter()
        .map(|image| image.id().value())
        .collect();
    assert_eq!(ids, vec![500, 501, 502]);
}

#[tokio::test]
async fn failed_page_keeps_results_and_retries_same_page() {
    let service = ScriptedSearch::with([
        Ok(page(1, PAGE_SIZE)),
        Err(FetchError::Status(503)),
        Ok(page(200, PAGE_SIZE)),
    ]);
    let mut controller = SearchController::new();

    let ticket = controller.apply(SearchEvent::QuerySubmitted("cats".into()));
    drive(&mut controller, &service, ticket).await;

    let ticket = controller.apply(SearchEvent::LoadMoreRequested);
    drive(&mut controller, &service, ticket).await;

    assert_eq!(controller.images().len(), PAGE_SIZE);
    assert_eq!(controller.last_error(), Some(&FetchError::Status(503)));
    assert!(!controller.is_loading());

    let ticket = controller.apply(SearchEvent::LoadMoreRequested);
    drive(&mut controller, &service, ticket).await;

    assert_eq!(controller.images().len(), PAGE_SIZE * 2);
    assert!(controller.last_error().is_none());
    assert_eq!(
        service.calls(),
        vec![
            ("cats".to_string(), 1),
            ("cats".to_string(), 2),
            ("cats".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn response_for_superseded_query_is_discarded() {
    let service = ScriptedSearch::with([Ok(page(1, PAGE_SIZE)), Ok(page(900, 2))]);
    let mut controller = SearchController::new();

    let cats = controller
        .apply(SearchEvent::QuerySubmitted("cats".into()))
        .expect("first query fetches");
    // Submitted while "cats" is still outstanding: deferred.
    assert!(controller
        .apply(SearchEvent::QuerySubmitted("dogs".into()))
        .is_none());

    let outcome = service.search(cats.query(), cats.page()).await;
    let next = controller.apply(SearchEvent::PageLoaded {
        ticket: cats,
        outcome,
    });
    assert!(controller.images().is_empty());

    let next = next.expect("deferred query is issued");
    assert_eq!(next.query(), "dogs");
    drive(&mut controller, &service, Some(next)).await;

    assert_eq!(controller.images().len(), 2);
    assert_eq!(controller.images()[0].id(), ImageId::new(900));
}

#[test]
fn language_follows_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("load-more-button"), "Charger plus");

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
