// SPDX-License-Identifier: MPL-2.0
//! Failure of a single image-search request.

use std::fmt;

/// Why a fetch against the image-search service failed.
///
/// The search controller treats every variant the same way (the request
/// failed, nothing is merged, the user may retry). The variants only exist
/// so the UI can show a meaningful message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No API credential is configured, so no request was sent.
    MissingApiKey,

    /// The request never produced a response (DNS, TLS, connection reset...).
    Network(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be decoded.
    Payload(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::MissingApiKey => "error-fetch-missing-api-key",
            FetchError::Network(_) => "error-fetch-network",
            FetchError::Status(429) => "error-fetch-rate-limited",
            FetchError::Status(401 | 403) => "error-fetch-unauthorized",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Payload(_) => "error-fetch-payload",
        }
    }

    /// Returns whether retrying later has a chance to succeed without the
    /// user changing anything.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Status(code) => *code == 429 || *code >= 500,
            FetchError::MissingApiKey | FetchError::Payload(_) => false,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingApiKey => write!(f, "No API key configured"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
            FetchError::Payload(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
