// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for pagination values,
//! ensuring they are always within valid ranges.

use std::fmt;

/// Number of records the search service returns for a full page.
///
/// A page holding fewer records than this is the last one for its query.
pub const PAGE_SIZE: usize = 12;

// =============================================================================
// PageNumber
// =============================================================================

/// One-based page index, guaranteed to be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page of every query.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, raising 0 to 1.
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    /// Returns the raw page value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns whether a page of `len` records may be followed by another one.
#[must_use]
pub fn is_full_page(len: usize) -> bool {
    len == PAGE_SIZE
}
