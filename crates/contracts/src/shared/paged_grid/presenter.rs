use std::collections::HashSet;

use super::record::GridRecord;

/// Everything the grid widget needs for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot<R: GridRecord> {
    /// Rows of the current page
    pub records: Vec<R>,
    /// Ids of the selected rows among `records`
    pub selected_ids: HashSet<R::Id>,
    /// Selected records across all pages
    pub selection_count: usize,
    pub total: u64,
    pub page_size: usize,
    /// 1-based
    pub current_page: u32,
    pub page_count: u32,
    /// Offset of the first row, `(current_page - 1) * page_size`
    pub first: usize,
    pub loading: bool,
}

impl<R: GridRecord> Default for GridSnapshot<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            selected_ids: HashSet::new(),
            selection_count: 0,
            total: 0,
            page_size: 0,
            current_page: 1,
            page_count: 0,
            first: 0,
            loading: false,
        }
    }
}

impl<R: GridRecord> GridSnapshot<R> {
    /// 0-based page index, as the widget counts
    pub fn page_index(&self) -> usize {
        self.current_page.saturating_sub(1) as usize
    }

    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected_ids.contains(id)
    }

    /// 1-based rows shown, inclusive; `None` while the page is empty
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            return None;
        }
        Some((self.first + 1, self.first + self.records.len()))
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// The widget side of the grid.
///
/// A presenter receives snapshots through [`render`](GridPresenter::render)
/// and reports user actions back as [`GridEvent`](super::GridEvent)s to
/// whoever owns the controller.
pub trait GridPresenter<R: GridRecord> {
    fn render(&mut self, snapshot: GridSnapshot<R>);
}
