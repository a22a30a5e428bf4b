// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! The search service is an external collaborator: given a query and a page
//! number it returns at most [`PAGE_SIZE`](crate::domain::gallery::PAGE_SIZE)
//! records, or fails. Rate limits, credentials and wire format belong to the
//! adapter.

use crate::domain::error::FetchError;
use crate::domain::gallery::{ImageRecord, PageNumber};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Future resolving to one page of search results.
pub type SearchFuture = BoxFuture<'static, Result<Vec<ImageRecord>, FetchError>>;

/// Future resolving to the raw bytes of an image.
pub type BytesFuture = BoxFuture<'static, Result<Vec<u8>, FetchError>>;

/// Paginated image search service.
///
/// Returned futures own everything they need (`'static`), so they can be
/// handed to the UI runtime without borrowing the adapter.
pub trait ImageSearch: Send + Sync {
    /// Fetches one page of results for `query`. An empty query asks the
    /// service for its default selection.
    fn search(&self, query: &str, page: PageNumber) -> SearchFuture;

    /// Downloads the image behind `url` (thumbnail or full size).
    fn fetch_image(&self, url: &str) -> BytesFuture;
}

impl<T: ImageSearch + ?Sized> ImageSearch for Arc<T> {
    fn search(&self, query: &str, page: PageNumber) -> SearchFuture {
        (**self).search(query, page)
    }

    fn fetch_image(&self, url: &str) -> BytesFuture {
        (**self).fetch_image(url)
    }
}
