use thiserror::Error;

/// One page of records plus the collection total
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<R> {
    pub records: Vec<R>,
    pub total: u64,
}

/// Any transport or server failure while loading a page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Source of pages. `page` is 1-based.
///
/// Implementations make a single attempt; there is no retry.
#[allow(async_fn_in_trait)]
pub trait PageLoader<R> {
    async fn load_page(&self, page: u32) -> Result<LoadedPage<R>, FetchFailure>;
}
