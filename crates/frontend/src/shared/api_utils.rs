//! API utilities for talking to the collection endpoint
//!
//! Provides helper functions for constructing page URLs.

use contracts::shared::config::ApiConfig;

/// Build the URL of one collection page
///
/// # Arguments
/// * `api` - endpoint and requested fields
/// * `page` - 1-based page index
/// * `limit` - page size
///
/// # Example
/// ```rust,ignore
/// let url = collection_page_url(&config.api, 2, 12);
/// // https://api.artic.edu/api/v1/artworks?page=2&limit=12&fields=id,title,...
/// ```
pub fn collection_page_url(api: &ApiConfig, page: u32, limit: usize) -> String {
    let endpoint = api.endpoint.trim_end_matches('/');
    let separator = if endpoint.contains('?') { '&' } else { '?' };

    let mut url = format!("{}{}page={}&limit={}", endpoint, separator, page, limit);

    if !api.fields.is_empty() {
        let fields = api
            .fields
            .iter()
            .map(|f| urlencoding::encode(f).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        url.push_str(&format!("&fields={}", fields));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(endpoint: &str, fields: &[&str]) -> ApiConfig {
        ApiConfig {
            endpoint: endpoint.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_page_url() {
        let url = collection_page_url(
            &api("https://api.artic.edu/api/v1/artworks", &["id", "title"]),
            3,
            12,
        );
        assert_eq!(
            url,
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12&fields=id,title"
        );
    }

    #[test]
    fn test_page_url_without_fields() {
        let url = collection_page_url(&api("https://example.org/items/", &[]), 1, 12);
        assert_eq!(url, "https://example.org/items?page=1&limit=12");
    }

    #[test]
    fn test_page_url_keeps_existing_query() {
        let url = collection_page_url(&api("https://example.org/items?q=cats", &[]), 2, 5);
        assert_eq!(url, "https://example.org/items?q=cats&page=2&limit=5");
    }
}
