//! Wire format of the collection endpoint
//!
//! `GET <endpoint>?page=<n>` answers with
//! `{"pagination": {"total": ..., ...}, "data": [...]}`.
//! Pages are 1-based on the wire.

use serde::{Deserialize, Serialize};

use super::aggregate::Artwork;
use crate::shared::paged_grid::{FetchFailure, LoadedPage};

/// Pagination block of a collection response. Only `total` is read;
/// `limit`, `offset`, `total_pages` and `next_url` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

/// Envelope of one page of the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    pub pagination: Pagination,
    pub data: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn into_loaded_page(self) -> LoadedPage<T> {
        LoadedPage {
            records: self.data,
            total: self.pagination.total,
        }
    }
}

/// Parse a response body into a page of artworks
pub fn decode_artwork_page(body: &str) -> Result<LoadedPage<Artwork>, FetchFailure> {
    serde_json::from_str::<CollectionResponse<Artwork>>(body)
        .map(CollectionResponse::into_loaded_page)
        .map_err(|e| FetchFailure::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artwork::ArtworkId;

    const SAMPLE: &str = r#"{
        "pagination": {
            "total": 136,
            "limit": 12,
            "offset": 12,
            "total_pages": 12,
            "current_page": 2,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=3&limit=12"
        },
        "data": [
            {
                "id": 129884,
                "title": "Starry Night and the Astronauts",
                "place_of_origin": "United States",
                "artist_display": "Alma Thomas\nAmerican, 1891–1978",
                "inscriptions": null,
                "date_start": 1972,
                "date_end": 1972
            },
            {
                "id": 656,
                "title": "Lion (One of a Pair, South Pedestal)",
                "place_of_origin": "Chicago",
                "artist_display": "Edward Kemeys",
                "inscriptions": "Signed",
                "date_start": 1893,
                "date_end": 1894
            }
        ],
        "info": {"license_text": "..."},
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    }"#;

    #[test]
    fn test_decode_page() {
        let page = decode_artwork_page(SAMPLE).unwrap();
        assert_eq!(page.total, 136);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id, ArtworkId(129884));
        assert_eq!(page.records[1].inscriptions.as_deref(), Some("Signed"));
    }

    #[test]
    fn test_decode_ignores_extra_pagination_keys() {
        let response: CollectionResponse<Artwork> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.pagination, Pagination { total: 136 });
    }

    #[test]
    fn test_decode_error_is_fetch_failure() {
        let err = decode_artwork_page(r#"{"data": []}"#).unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)));

        let err = decode_artwork_page("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)));
    }

    #[test]
    fn test_decode_empty_page() {
        let page = decode_artwork_page(r#"{"pagination": {"total": 136}, "data": []}"#).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.total, 136);
    }
}
