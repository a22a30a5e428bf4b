// SPDX-License-Identifier: MPL-2.0
//! Wire format of the Pixabay search endpoint.
//!
//! Only the fields the gallery uses are decoded; everything else in a hit
//! (likes, views, user...) is ignored.

use crate::domain::error::FetchError;
use crate::domain::gallery::{ImageId, ImageRecord};
use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_hits: u64,
    pub hits: Vec<Hit>,
}

/// One image in a search response.
#[derive(Debug, Deserialize)]
pub struct Hit {
    pub id: u64,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
}

impl From<Hit> for ImageRecord {
    fn from(hit: Hit) -> Self {
        ImageRecord::new(
            ImageId::new(hit.id),
            hit.webformat_url,
            hit.large_image_url,
            hit.tags.as_deref(),
        )
    }
}

/// Decodes a response body into gallery records.
pub fn parse_records(body: &str) -> Result<Vec<ImageRecord>, FetchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;
    tracing::trace!(
        total = response.total,
        total_hits = response.total_hits,
        hits = response.hits.len(),
        "decoded search response"
    );
    Ok(response.hits.into_iter().map(ImageRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::PLACEHOLDER_DESCRIPTION;

    const SAMPLE: &str = r#"{
        "total": 4692,
        "totalHits": 500,
        "hits": [
            {
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "views": 7671,
                "likes": 70
            },
            {
                "id": 73424,
                "webformatURL": "https://pixabay.com/get/a_640.jpg",
                "largeImageURL": "https://pixabay.com/get/a_1280.jpg"
            }
        ]
    }"#;

    #[test]
    fn parses_hits_in_order() {
        let records = parse_records(SAMPLE).expect("valid payload");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id().value(), 195_893);
        assert_eq!(
            records[0].thumbnail_url(),
            "https://pixabay.com/get/35bbf209e13e39d2_640.jpg"
        );
        assert_eq!(
            records[0].full_url(),
            "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg"
        );
        assert_eq!(records[0].description(), "blossom, bloom, flower");
    }

    #[test]
    fn missing_tags_use_placeholder() {
        let records = parse_records(SAMPLE).expect("valid payload");
        assert_eq!(records[1].description(), PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn empty_hits_is_a_valid_last_page() {
        let records = parse_records(r#"{"total":0,"totalHits":0,"hits":[]}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_body_is_payload_error() {
        let err = parse_records("[ERROR 400] \"key\" is wrong").unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }

    #[test]
    fn hit_without_urls_is_payload_error() {
        let err = parse_records(r#"{"hits":[{"id":1,"tags":"x"}]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Payload(_)));
    }
}
