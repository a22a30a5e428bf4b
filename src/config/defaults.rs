// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **API**: Search endpoint and request bounds
//! - **Gallery**: Grid layout and thumbnail cache
//! - **Diagnostics**: Log filtering

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default search endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pixabay.com/api/";

/// Environment variable holding the API key. Takes precedence over the
/// value stored in `settings.toml`.
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

/// Default request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 20;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 2;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnail columns.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 4;

/// Minimum number of thumbnail columns.
pub const MIN_GALLERY_COLUMNS: u16 = 1;

/// Maximum number of thumbnail columns.
pub const MAX_GALLERY_COLUMNS: u16 = 8;

/// Default number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 240;

/// Minimum thumbnail cache size (one full page).
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 12;

/// Maximum thumbnail cache size.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(MIN_GALLERY_COLUMNS <= DEFAULT_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
    assert!(MIN_THUMBNAIL_CACHE_SIZE <= DEFAULT_THUMBNAIL_CACHE_SIZE);
    assert!(DEFAULT_THUMBNAIL_CACHE_SIZE <= MAX_THUMBNAIL_CACHE_SIZE);
};
