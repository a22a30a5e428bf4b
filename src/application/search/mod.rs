// SPDX-License-Identifier: MPL-2.0
//! Search and pagination orchestration.
//!
//! [`SearchController`] owns the query, page, accumulated images and the
//! loading/end-of-results flags. It never performs I/O: every transition
//! returns at most one [`FetchTicket`] that the caller must execute and
//! report back with [`SearchEvent::PageLoaded`].

mod controller;

pub use controller::{FetchTicket, SearchController, SearchEvent};
