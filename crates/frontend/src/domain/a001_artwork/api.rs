//! HTTP page loader for the artwork collection

use crate::shared::api_utils::collection_page_url;
use contracts::domain::a001_artwork::{decode_artwork_page, Artwork};
use contracts::shared::config::ApiConfig;
use contracts::shared::paged_grid::{FetchFailure, LoadedPage, PageLoader};
use gloo_net::http::Request;

/// Loads one page per call with a plain GET, no retry
#[derive(Debug, Clone)]
pub struct ArtworkPageLoader {
    api: ApiConfig,
    page_size: usize,
}

impl ArtworkPageLoader {
    pub fn new(api: ApiConfig, page_size: usize) -> Self {
        Self { api, page_size }
    }
}

impl PageLoader<Artwork> for ArtworkPageLoader {
    async fn load_page(&self, page: u32) -> Result<LoadedPage<Artwork>, FetchFailure> {
        let url = collection_page_url(&self.api, page, self.page_size);
        log::debug!("Loading artworks: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchFailure::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        decode_artwork_page(&body)
    }
}
