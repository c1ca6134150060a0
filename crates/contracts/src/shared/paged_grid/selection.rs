use std::collections::HashSet;

use super::record::GridRecord;

/// Selected records across all pages, unique by id.
///
/// Order is kept (older off-page selections first) but equality is set
/// equality over ids.
#[derive(Debug, Clone)]
pub struct SelectionSet<R: GridRecord> {
    records: Vec<R>,
}

impl<R: GridRecord> Default for SelectionSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GridRecord> PartialEq for SelectionSet<R> {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len() && self.ids() == other.ids()
    }
}

impl<R: GridRecord> SelectionSet<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn ids(&self) -> HashSet<R::Id> {
        self.records.iter().map(GridRecord::record_id).collect()
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.records.iter().any(|r| &r.record_id() == id)
    }

    /// Merge the widget's report for the visible page into the selection.
    ///
    /// Selected records that are not on `visible` are kept as they are.
    /// Selected records that are on `visible` are dropped and replaced by
    /// `reported`, which the widget treats as the full truth for that page.
    /// The result never holds the same id twice.
    pub fn reconcile<I>(&self, visible: &[R], reported: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let visible_ids: HashSet<R::Id> = visible.iter().map(GridRecord::record_id).collect();

        let mut seen = HashSet::with_capacity(self.records.len());
        let mut records = Vec::with_capacity(self.records.len());

        let foreign = self
            .records
            .iter()
            .filter(|r| !visible_ids.contains(&r.record_id()))
            .cloned();

        for record in foreign.chain(reported) {
            if seen.insert(record.record_id()) {
                records.push(record);
            }
        }

        Self { records }
    }

    /// Selected records among `visible`, in page order
    pub fn selected_on(&self, visible: &[R]) -> Vec<R> {
        let ids = self.ids();
        visible
            .iter()
            .filter(|r| ids.contains(&r.record_id()))
            .cloned()
            .collect()
    }
}
