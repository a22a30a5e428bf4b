// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of decoded gallery thumbnails.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown thumbnails go first
//! - **Gallery stays resident**: [`ThumbnailCache::sync`] grows the capacity
//!   to the number of displayed images, so only thumbnails of earlier
//!   queries are evicted, and re-requests anything that went missing
//! - **Single request per URL**: in-flight URLs are tracked so a URL is
//!   downloaded once even if several pages reference it
//! - **Permanent failures are sticky** until
//!   [`ThumbnailCache::forget_failures`]; transient ones are retried on the
//!   next sync
//!
//! These downloads are independent of search pages; any number may run.

use crate::domain::error::FetchError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// What the gallery should draw for one URL.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Ready(Handle),
    Loading,
    Failed,
}

#[derive(Debug)]
pub struct ThumbnailCache {
    handles: LruCache<String, Handle>,
    /// Configured size; the capacity never drops below it.
    base_capacity: NonZeroUsize,
    in_flight: HashSet<String>,
    failed: HashSet<String>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            handles: LruCache::new(capacity),
            base_capacity: capacity,
            in_flight: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Makes room for every URL in `urls`, the thumbnails currently on
    /// screen, and returns the ones that must be downloaded.
    ///
    /// Cached entries outside `urls` become the first to go; the capacity
    /// shrinks back to the configured size once the gallery is small again.
    pub fn sync(&mut self, urls: &[&str]) -> Vec<String> {
        self.touch(urls.iter().copied());
        let wanted = NonZeroUsize::new(urls.len())
            .map_or(self.base_capacity, |len| len.max(self.base_capacity));
        if wanted != self.handles.cap() {
            tracing::debug!(
                from = self.handles.cap().get(),
                to = wanted.get(),
                "resizing thumbnail cache"
            );
            self.handles.resize(wanted);
        }
        self.request(urls.iter().copied())
    }

    /// Marks every URL not yet cached, requested or failed as in flight and
    /// returns them, in input order, for the caller to download.
    fn request<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut to_fetch = Vec::new();
        for url in urls {
            if self.handles.contains(url) || self.failed.contains(url) {
                continue;
            }
            if self.in_flight.insert(url.to_string()) {
                to_fetch.push(url.to_string());
            }
        }
        to_fetch
    }

    /// Stores downloaded bytes for `url`.
    pub fn insert(&mut self, url: &str, bytes: Vec<u8>) {
        self.in_flight.remove(url);
        self.failed.remove(url);
        if let Some((evicted, _)) = self.handles.push(url.to_string(), Handle::from_bytes(bytes)) {
            if evicted != url {
                tracing::trace!(url = %evicted, "thumbnail evicted");
            }
        }
    }

    /// Records a failed download. Transient failures are only released so
    /// the next [`sync`](Self::sync) asks again.
    pub fn mark_failed(&mut self, url: &str, error: &FetchError) {
        self.in_flight.remove(url);
        if !error.is_transient() {
            self.failed.insert(url.to_string());
        }
    }

    /// Lets previously failed URLs be requested again.
    pub fn forget_failures(&mut self) {
        self.failed.clear();
    }

    /// Looks up `url` without touching recency, for use from `view`.
    #[must_use]
    pub fn peek(&self, url: &str) -> Thumbnail {
        if let Some(handle) = self.handles.peek(url) {
            Thumbnail::Ready(handle.clone())
        } else if self.failed.contains(url) {
            Thumbnail::Failed
        } else {
            Thumbnail::Loading
        }
    }

    /// Marks `urls` as recently used so they survive eviction longest.
    fn touch<'a, I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for url in urls {
            let _ = self.handles.get(url);
        }
    }

    #[must_use]
    pub fn is_in_flight(&self, url: &str) -> bool {
        self.in_flight.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes() -> Vec<u8> {
        vec![0u8; 4]
    }

    #[test]
    fn request_returns_each_url_once() {
        let mut cache = ThumbnailCache::new(8);
        let first = cache.request(["a", "b", "a"]);
        assert_eq!(first, vec!["a".to_string(), "b".to_string()]);

        let second = cache.request(["a", "b", "c"]);
        assert_eq!(second, vec!["c".to_string()]);
        assert!(cache.is_in_flight("a"));
    }

    #[test]
    fn insert_makes_thumbnail_ready() {
        let mut cache = ThumbnailCache::new(8);
        cache.request(["a"]);
        cache.insert("a", bytes());

        assert!(!cache.is_in_flight("a"));
        assert!(matches!(cache.peek("a"), Thumbnail::Ready(_)));
        assert!(cache.request(["a"]).is_empty(), "cached URL is not refetched");
    }

    #[test]
    fn failures_are_not_retried_until_forgotten() {
        let mut cache = ThumbnailCache::new(8);
        cache.request(["a"]);
        cache.mark_failed("a", &FetchError::Status(404));

        assert!(matches!(cache.peek("a"), Thumbnail::Failed));
        assert!(cache.request(["a"]).is_empty());

        cache.forget_failures();
        assert_eq!(cache.request(["a"]), vec!["a".to_string()]);
        assert!(matches!(cache.peek("a"), Thumbnail::Loading));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ThumbnailCache::new(2);
        cache.insert("a", bytes());
        cache.insert("b", bytes());
        cache.touch(["a"]);
        cache.insert("c", bytes());

        assert_eq!(cache.len(), 2);
        assert!(matches!(cache.peek("a"), Thumbnail::Ready(_)));
        assert!(matches!(cache.peek("b"), Thumbnail::Loading));
        assert!(matches!(cache.peek("c"), Thumbnail::Ready(_)));
    }

    fn page(start: usize) -> Vec<String> {
        (start..start + 12)
            .map(|id| format!("https://cdn.test/{id}_640.jpg"))
            .collect()
    }

    fn load_all(cache: &mut ThumbnailCache, urls: &[String]) {
        for url in urls {
            cache.insert(url, bytes());
        }
    }

    #[test]
    fn growing_gallery_keeps_earlier_pages_cached() {
        let mut cache = ThumbnailCache::new(12);
        let mut shown = page(0);

        let first: Vec<&str> = shown.iter().map(String::as_str).collect();
        assert_eq!(cache.sync(&first).len(), 12);
        load_all(&mut cache, &shown);

        shown.extend(page(100));
        let both: Vec<&str> = shown.iter().map(String::as_str).collect();
        let fetched = cache.sync(&both);
        assert_eq!(fetched, page(100));
        load_all(&mut cache, &fetched);

        assert_eq!(cache.len(), 24);
        assert!(shown.iter().all(|url| matches!(cache.peek(url), Thumbnail::Ready(_))));
    }

    #[test]
    fn evicted_thumbnail_is_requested_again() {
        let mut cache = ThumbnailCache::new(12);
        let old = page(0);
        load_all(&mut cache, &old);

        // A new query replaces the gallery and pushes the old entries out.
        let fresh = page(100);
        let fresh_refs: Vec<&str> = fresh.iter().map(String::as_str).collect();
        let fetched = cache.sync(&fresh_refs);
        load_all(&mut cache, &fetched);
        assert!(matches!(cache.peek(&old[0]), Thumbnail::Loading));
        assert!(!cache.is_in_flight(&old[0]));

        let again = cache.sync(&[old[0].as_str()]);
        assert_eq!(again, vec![old[0].clone()]);
        assert!(cache.is_in_flight(&old[0]));
    }

    #[test]
    fn capacity_shrinks_back_to_configured_size() {
        let mut cache = ThumbnailCache::new(12);
        let many: Vec<String> = page(0).into_iter().chain(page(100)).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let fetched = cache.sync(&many_refs);
        load_all(&mut cache, &fetched);
        assert_eq!(cache.len(), 24);

        let kept = [many[0].as_str()];
        assert!(cache.sync(&kept).is_empty());
        assert_eq!(cache.len(), 12);
        assert!(matches!(cache.peek(&many[0]), Thumbnail::Ready(_)));
    }

    #[test]
    fn transient_failure_is_retried_on_next_sync() {
        let mut cache = ThumbnailCache::new(8);
        assert_eq!(cache.sync(&["a"]), vec!["a".to_string()]);
        cache.mark_failed("a", &FetchError::Network("reset".into()));

        assert!(matches!(cache.peek("a"), Thumbnail::Loading));
        assert_eq!(cache.sync(&["a"]), vec!["a".to_string()]);
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut cache = ThumbnailCache::new(0);
        assert!(cache.is_empty());
        cache.insert("a", bytes());
        assert_eq!(cache.len(), 1);
    }
}
