// SPDX-License-Identifier: MPL-2.0
//! Image records returned by a search.

use std::fmt;

/// Description used when the search service did not provide any tags.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available";

/// Identifier assigned to an image by the search service.
///
/// Ids are not guaranteed unique across pages; the gallery never
/// de-duplicates on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One search result. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    id: ImageId,
    thumbnail_url: String,
    full_url: String,
    description: String,
}

impl ImageRecord {
    /// Builds a record, substituting [`PLACEHOLDER_DESCRIPTION`] when the
    /// description is absent or blank.
    pub fn new(
        id: ImageId,
        thumbnail_url: impl Into<String>,
        full_url: impl Into<String>,
        description: Option<&str>,
    ) -> Self {
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(PLACEHOLDER_DESCRIPTION)
            .to_string();

        Self {
            id,
            thumbnail_url: thumbnail_url.into(),
            full_url: full_url.into(),
            description,
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    #[must_use]
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_description_uses_placeholder() {
        let record = ImageRecord::new(ImageId::new(1), "t", "f", None);
        assert_eq!(record.description(), PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn blank_description_uses_placeholder() {
        let record = ImageRecord::new(ImageId::new(1), "t", "f", Some("   "));
        assert_eq!(record.description(), PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn description_is_kept_when_present() {
        let record = ImageRecord::new(ImageId::new(7), "t", "f", Some("cat, kitten"));
        assert_eq!(record.description(), "cat, kitten");
        assert_eq!(record.id().value(), 7);
    }
}
