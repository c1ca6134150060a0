/// The page currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<R> {
    records: Vec<R>,
    total: u64,
}

impl<R> Default for PageWindow<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> PageWindow<R> {
    /// Nothing loaded yet
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
        }
    }

    pub fn new(records: Vec<R>, total: u64) -> Self {
        Self { records, total }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Collection total as reported with this page
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of pages for the reported total
    pub fn page_count(&self, page_size: usize) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(page_size as u64);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
