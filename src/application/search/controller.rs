// SPDX-License-Identifier: MPL-2.0
//! Search state machine.
//!
//! Transitions are driven exclusively through [`SearchController::apply`].
//! A transition returns `Some(ticket)` when a fetch must be issued; the
//! controller records the ticket as in flight, so at most one fetch is ever
//! outstanding and the completion of a fetch can never re-trigger itself.
//!
//! # Stale responses
//!
//! Each accepted query bumps a generation counter carried by the tickets.
//! A response whose generation no longer matches is discarded. When a query
//! is submitted while a fetch is outstanding, its first-page fetch is
//! deferred until the outstanding one settles.

use crate::domain::error::FetchError;
use crate::domain::gallery::newtypes::is_full_page;
use crate::domain::gallery::{ImageRecord, PageNumber};

/// Instruction to fetch one page, tagged with the query generation it was
/// issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: String,
    page: PageNumber,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }
}

/// Inputs accepted by the controller.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// The gallery was shown for the first time.
    Mounted,
    /// The user submitted the search bar.
    QuerySubmitted(String),
    /// The user asked for the next page.
    LoadMoreRequested,
    /// A fetch issued earlier has settled.
    PageLoaded {
        ticket: FetchTicket,
        outcome: Result<Vec<ImageRecord>, FetchError>,
    },
}

/// Search and pagination state.
#[derive(Debug, Clone)]
pub struct SearchController {
    query: String,
    page: PageNumber,
    /// Last page merged for the current query. The next page to request is
    /// always the one after it.
    last_loaded: Option<PageNumber>,
    images: Vec<ImageRecord>,
    has_more: bool,
    has_searched: bool,
    mounted: bool,
    generation: u64,
    in_flight: Option<FetchTicket>,
    pending: Option<FetchTicket>,
    last_error: Option<FetchError>,
}

impl Default for SearchController {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: PageNumber::FIRST,
            last_loaded: None,
            images: Vec::new(),
            has_more: true,
            has_searched: false,
            mounted: false,
            generation: 0,
            in_flight: None,
            pending: None,
            last_error: None,
        }
    }
}

impl SearchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the fetch to issue, if any.
    #[must_use]
    pub fn apply(&mut self, event: SearchEvent) -> Option<FetchTicket> {
        match event {
            SearchEvent::Mounted => self.on_mount(),
            SearchEvent::QuerySubmitted(text) => self.submit_query(&text),
            SearchEvent::LoadMoreRequested => self.load_more(),
            SearchEvent::PageLoaded { ticket, outcome } => self.settle(ticket, outcome),
        }
    }

    fn on_mount(&mut self) -> Option<FetchTicket> {
        if self.mounted || self.has_searched || self.in_flight.is_some() {
            return None;
        }
        self.mounted = true;
        tracing::debug!("loading default gallery");
        let ticket = self.ticket_for(self.page);
        self.issue(ticket)
    }

    fn submit_query(&mut self, text: &str) -> Option<FetchTicket> {
        let query = text.trim();
        if query.is_empty() {
            tracing::debug!("ignoring empty query");
            return None;
        }

        self.generation += 1;
        self.query = query.to_string();
        self.page = PageNumber::FIRST;
        self.last_loaded = None;
        self.images.clear();
        self.has_more = true;
        self.has_searched = true;
        self.mounted = true;
        self.last_error = None;
        tracing::info!(query = %self.query, generation = self.generation, "new search");

        let ticket = self.ticket_for(PageNumber::FIRST);
        if self.in_flight.is_some() {
            tracing::debug!("fetch outstanding, deferring first page");
            self.pending = Some(ticket);
            return None;
        }
        self.issue(ticket)
    }

    fn load_more(&mut self) -> Option<FetchTicket> {
        if !self.can_load_more() {
            tracing::debug!(
                has_more = self.has_more,
                loading = self.is_loading(),
                "load more ignored"
            );
            return None;
        }

        self.mounted = true;
        self.page = self.last_loaded.map_or(PageNumber::FIRST, PageNumber::next);
        let ticket = self.ticket_for(self.page);
        self.issue(ticket)
    }

    fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<ImageRecord>, FetchError>,
    ) -> Option<FetchTicket> {
        if self.in_flight.as_ref() != Some(&ticket) {
            tracing::warn!(
                query = %ticket.query,
                page = %ticket.page,
                "ignoring response for a fetch that is not outstanding"
            );
            return None;
        }
        self.in_flight = None;

        if ticket.generation != self.generation {
            tracing::warn!(
                query = %ticket.query,
                page = %ticket.page,
                "discarding response for a superseded query"
            );
            return self.pending.take().and_then(|next| self.issue(next));
        }

        match outcome {
            Ok(records) => {
                self.has_more = is_full_page(records.len());
                self.last_loaded = Some(ticket.page);
                self.last_error = None;
                tracing::info!(
                    query = %ticket.query,
                    page = %ticket.page,
                    received = records.len(),
                    has_more = self.has_more,
                    "page merged"
                );
                self.images.extend(records);
            }
            Err(error) => {
                tracing::warn!(
                    query = %ticket.query,
                    page = %ticket.page,
                    %error,
                    "fetch failed"
                );
                self.last_error = Some(error);
            }
        }

        None
    }

    fn ticket_for(&self, page: PageNumber) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
            page,
        }
    }

    fn issue(&mut self, ticket: FetchTicket) -> Option<FetchTicket> {
        tracing::debug!(query = %ticket.query, page = %ticket.page, "issuing fetch");
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current query; empty for the default gallery.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Page of the most recently requested fetch for the current query.
    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Accumulated images, oldest page first.
    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether another page is worth requesting.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether `load more` would issue a fetch right now.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.is_loading()
    }

    /// Whether the user ever submitted a query.
    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Error of the last settled fetch for the current query, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Generation of the current query.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The fetch currently outstanding, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{ImageId, PAGE_SIZE};

    fn records(start: u64, count: usize) -> Vec<ImageRecord> {
        (start..start + count as u64)
            .map(|id| {
                ImageRecord::new(
                    ImageId::new(id),
                    format!("https://cdn.test/{id}_640.jpg"),
                    format!("https://cdn.test/{id}_1280.jpg"),
                    Some("tag"),
                )
            })
            .collect()
    }

    fn succeed(
        controller: &mut SearchController,
        ticket: FetchTicket,
        count: usize,
    ) -> Option<FetchTicket> {
        controller.apply(SearchEvent::PageLoaded {
            ticket,
            outcome: Ok(records(0, count)),
        })
    }

    fn fail(controller: &mut SearchController, ticket: FetchTicket) -> Option<FetchTicket> {
        controller.apply(SearchEvent::PageLoaded {
            ticket,
            outcome: Err(FetchError::Network("connection reset".into())),
        })
    }

    fn submit(controller: &mut SearchController, text: &str) -> Option<FetchTicket> {
        controller.apply(SearchEvent::QuerySubmitted(text.to_string()))
    }

    fn load_more(controller: &mut SearchController) -> Option<FetchTicket> {
        controller.apply(SearchEvent::LoadMoreRequested)
    }

    #[test]
    fn new_controller_defaults() {
        let controller = SearchController::new();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.page(), PageNumber::FIRST);
        assert!(controller.images().is_empty());
        assert!(!controller.is_loading());
        assert!(controller.has_more());
        assert!(!controller.has_searched());
    }

    #[test]
    fn submit_issues_first_page_fetch() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").expect("fetch issued");

        assert_eq!(ticket.query(), "cats");
        assert_eq!(ticket.page(), PageNumber::FIRST);
        assert!(controller.is_loading());
        assert!(controller.has_searched());
    }

    #[test]
    fn submit_trims_query() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "  red fox ").expect("fetch issued");
        assert_eq!(ticket.query(), "red fox");
        assert_eq!(controller.query(), "red fox");
    }

    #[test]
    fn new_query_resets_page_and_images() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, first, PAGE_SIZE);
        let second = load_more(&mut controller).unwrap();
        succeed(&mut controller, second, PAGE_SIZE);
        assert_eq!(controller.page().value(), 2);
        assert_eq!(controller.images().len(), 2 * PAGE_SIZE);

        let ticket = submit(&mut controller, "dogs").unwrap();
        assert_eq!(controller.page(), PageNumber::FIRST);
        assert!(controller.images().is_empty());
        assert!(controller.has_more());
        assert_eq!(ticket.page(), PageNumber::FIRST);
    }

    #[test]
    fn resubmitting_same_query_refetches_from_first_page() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, ticket, PAGE_SIZE);

        let again = submit(&mut controller, "cats").expect("resubmission fetches");
        assert_eq!(again.page(), PageNumber::FIRST);
        assert!(controller.images().is_empty());
    }

    #[test]
    fn has_more_only_for_exactly_full_page() {
        for len in 0..=PAGE_SIZE {
            let mut controller = SearchController::new();
            let ticket = submit(&mut controller, "cats").unwrap();
            succeed(&mut controller, ticket, len);
            assert_eq!(controller.has_more(), len == PAGE_SIZE, "len = {len}");
        }
    }

    #[test]
    fn cats_scenario_ends_after_short_page() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, first, 12);
        assert!(controller.has_more());
        assert!(controller.can_load_more());
        assert_eq!(controller.images().len(), 12);

        let second = load_more(&mut controller).unwrap();
        assert_eq!(second.page().value(), 2);
        succeed(&mut controller, second, 5);
        assert_eq!(controller.images().len(), 17);
        assert!(!controller.has_more());
        assert!(!controller.can_load_more());

        let before_page = controller.page();
        for _ in 0..3 {
            assert!(load_more(&mut controller).is_none());
        }
        assert_eq!(controller.images().len(), 17);
        assert_eq!(controller.page(), before_page);
        assert!(!controller.is_loading());
    }

    #[test]
    fn empty_query_is_rejected_without_state_change() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, ticket, PAGE_SIZE);
        let images_before = controller.images().to_vec();
        let generation_before = controller.generation();

        assert!(submit(&mut controller, "").is_none());
        assert!(submit(&mut controller, "   ").is_none());

        assert_eq!(controller.query(), "cats");
        assert_eq!(controller.images(), images_before.as_slice());
        assert_eq!(controller.generation(), generation_before);
        assert!(!controller.is_loading());
    }

    #[test]
    fn failed_first_page_leaves_images_empty_and_has_more() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").unwrap();
        fail(&mut controller, ticket);

        assert!(controller.images().is_empty());
        assert!(!controller.is_loading());
        assert!(controller.has_more());
        assert!(controller.last_error().is_some());
    }

    #[test]
    fn failure_keeps_previous_has_more() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, first, PAGE_SIZE);
        let second = load_more(&mut controller).unwrap();
        fail(&mut controller, second);

        assert!(controller.has_more());
        assert_eq!(controller.images().len(), PAGE_SIZE);
    }

    #[test]
    fn loading_cleared_after_every_settlement() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").unwrap();
        assert!(controller.is_loading());
        succeed(&mut controller, ticket, PAGE_SIZE);
        assert!(!controller.is_loading());

        let ticket = load_more(&mut controller).unwrap();
        assert!(controller.is_loading());
        fail(&mut controller, ticket);
        assert!(!controller.is_loading());
    }

    #[test]
    fn load_more_is_gated_while_loading() {
        let mut controller = SearchController::new();
        let _ticket = submit(&mut controller, "cats").unwrap();

        assert!(load_more(&mut controller).is_none());
        assert!(load_more(&mut controller).is_none());
        assert_eq!(controller.page(), PageNumber::FIRST);
        assert!(!controller.can_load_more());
    }

    #[test]
    fn successive_pages_increment_by_one() {
        let mut controller = SearchController::new();
        let mut ticket = submit(&mut controller, "cats").unwrap();
        let mut last_page = ticket.page().value();
        succeed(&mut controller, ticket, PAGE_SIZE);

        for _ in 0..5 {
            ticket = load_more(&mut controller).unwrap();
            assert_eq!(ticket.page().value(), last_page + 1);
            last_page = ticket.page().value();
            succeed(&mut controller, ticket, PAGE_SIZE);
        }
        assert_eq!(controller.images().len(), 6 * PAGE_SIZE);
    }

    #[test]
    fn load_more_after_failure_retries_same_page() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, first, PAGE_SIZE);

        let second = load_more(&mut controller).unwrap();
        assert_eq!(second.page().value(), 2);
        fail(&mut controller, second);

        let retry = load_more(&mut controller).unwrap();
        assert_eq!(retry.page().value(), 2);
    }

    #[test]
    fn load_more_after_failed_first_page_retries_first_page() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        fail(&mut controller, first);

        let retry = load_more(&mut controller).unwrap();
        assert_eq!(retry.page(), PageNumber::FIRST);
        assert_eq!(retry.query(), "cats");
    }

    #[test]
    fn mount_loads_default_gallery_once() {
        let mut controller = SearchController::new();
        let ticket = controller.apply(SearchEvent::Mounted).expect("fetch issued");
        assert_eq!(ticket.query(), "");
        assert_eq!(ticket.page(), PageNumber::FIRST);

        assert!(controller.apply(SearchEvent::Mounted).is_none());
        succeed(&mut controller, ticket, PAGE_SIZE);
        assert!(controller.apply(SearchEvent::Mounted).is_none());
        assert_eq!(controller.images().len(), PAGE_SIZE);
    }

    #[test]
    fn mount_after_search_does_nothing() {
        let mut controller = SearchController::new();
        let ticket = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, ticket, 3);
        assert!(controller.apply(SearchEvent::Mounted).is_none());
    }

    #[test]
    fn default_gallery_paginates() {
        let mut controller = SearchController::new();
        let ticket = controller.apply(SearchEvent::Mounted).unwrap();
        succeed(&mut controller, ticket, PAGE_SIZE);

        let next = load_more(&mut controller).unwrap();
        assert_eq!(next.query(), "");
        assert_eq!(next.page().value(), 2);
    }

    #[test]
    fn query_during_fetch_defers_and_discards_stale_page() {
        let mut controller = SearchController::new();
        let cats = submit(&mut controller, "cats").unwrap();

        assert!(submit(&mut controller, "dogs").is_none());
        assert!(controller.is_loading());
        assert_eq!(controller.query(), "dogs");
        assert!(controller.images().is_empty());

        let dogs = succeed(&mut controller, cats, PAGE_SIZE).expect("deferred fetch issued");
        assert_eq!(dogs.query(), "dogs");
        assert_eq!(dogs.page(), PageNumber::FIRST);
        assert!(controller.images().is_empty(), "stale page must not merge");
        assert!(controller.is_loading());

        succeed(&mut controller, dogs, 4);
        assert_eq!(controller.images().len(), 4);
        assert!(!controller.has_more());
        assert!(!controller.is_loading());
    }

    #[test]
    fn latest_of_several_deferred_queries_wins() {
        let mut controller = SearchController::new();
        let cats = submit(&mut controller, "cats").unwrap();
        assert!(submit(&mut controller, "dogs").is_none());
        assert!(submit(&mut controller, "birds").is_none());

        let next = fail(&mut controller, cats).expect("deferred fetch issued");
        assert_eq!(next.query(), "birds");
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut controller = SearchController::new();
        let cats = submit(&mut controller, "cats").unwrap();
        let forged = FetchTicket {
            generation: cats.generation(),
            query: "cats".into(),
            page: PageNumber::new(9),
        };

        assert!(succeed(&mut controller, forged, PAGE_SIZE).is_none());
        assert!(controller.is_loading());
        assert!(controller.images().is_empty());

        succeed(&mut controller, cats, 2);
        assert_eq!(controller.images().len(), 2);
    }

    #[test]
    fn duplicate_ids_are_kept_in_order() {
        let mut controller = SearchController::new();
        let first = submit(&mut controller, "cats").unwrap();
        succeed(&mut controller, first, PAGE_SIZE);
        let second = load_more(&mut controller).unwrap();
        succeed(&mut controller, second, PAGE_SIZE);

        let ids: Vec<u64> = controller.images().iter().map(|r| r.id().value()).collect();
        assert_eq!(ids.len(), 2 * PAGE_SIZE);
        assert_eq!(ids[0], 0);
        assert_eq!(ids[PAGE_SIZE], 0);
    }

    #[test]
    fn at_most_one_fetch_in_flight_for_any_sequence() {
        let mut controller = SearchController::new();
        let mut outstanding = Vec::new();
        outstanding.extend(submit(&mut controller, "cats"));

        for step in 0..40 {
            match step % 4 {
                0 | 1 => outstanding.extend(load_more(&mut controller)),
                2 => {
                    if let Some(ticket) = outstanding.pop() {
                        outstanding.extend(succeed(&mut controller, ticket, PAGE_SIZE));
                    }
                }
                _ => outstanding.extend(submit(&mut controller, &format!("q{step}"))),
            }
            assert!(outstanding.len() <= 1, "step {step}: {outstanding:?}");
            assert_eq!(controller.is_loading(), !outstanding.is_empty());
        }
    }
}
