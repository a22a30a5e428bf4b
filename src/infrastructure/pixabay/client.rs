// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Pixabay search API.

use super::response;
use crate::application::port::{BytesFuture, ImageSearch, SearchFuture};
use crate::config::ApiConfig;
use crate::domain::error::FetchError;
use crate::domain::gallery::{PageNumber, PAGE_SIZE};
use crate::error::{Error, Result};
use reqwest::Url;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Longest query the service accepts, in characters.
const MAX_QUERY_CHARS: usize = 100;

/// Search client bound to one API endpoint and credential.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    safe_search: bool,
}

impl PixabayClient {
    /// Builds a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid api base_url: {e}")))?;

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from);

        Ok(Self {
            http,
            base_url,
            api_key,
            safe_search: config.safe_search,
        })
    }

    /// Returns whether a credential is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the request URL for one page of `query`.
    fn search_url(&self, api_key: &str, query: &str, page: PageNumber) -> Url {
        let query: String = query.chars().take(MAX_QUERY_CHARS).collect();
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("key", api_key)
            .append_pair("q", &query)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("image_type", "photo")
            .append_pair("orientation", "horizontal")
            .append_pair("safesearch", if self.safe_search { "true" } else { "false" });
        url
    }
}

impl ImageSearch for PixabayClient {
    fn search(&self, query: &str, page: PageNumber) -> SearchFuture {
        let Some(api_key) = self.api_key.as_deref() else {
            return Box::pin(async { Err(FetchError::MissingApiKey) });
        };

        let url = self.search_url(api_key, query, page);
        let http = self.http.clone();
        tracing::debug!(%query, %page, "requesting search page");

        Box::pin(async move {
            let response = http
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

            response::parse_records(&body)
        })
    }

    fn fetch_image(&self, url: &str) -> BytesFuture {
        let http = self.http.clone();
        let url = url.to_string();

        Box::pin(async move {
            let url = Url::parse(&url).map_err(|e| FetchError::Payload(e.to_string()))?;
            let response = http
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(bytes.to_vec())
        })
    }
}
