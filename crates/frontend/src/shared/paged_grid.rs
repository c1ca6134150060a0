//! Leptos side of the paged grid: a presenter that publishes snapshots into a
//! signal, so the table re-renders whenever the controller changes.

use contracts::shared::paged_grid::{GridPresenter, GridRecord, GridSnapshot};
use leptos::prelude::*;

pub struct SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
    snapshot: RwSignal<GridSnapshot<R>>,
}

impl<R> Clone for SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
}

impl<R> SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(GridSnapshot::default()),
        }
    }

    /// Read side for the view
    pub fn snapshot(&self) -> ReadSignal<GridSnapshot<R>> {
        self.snapshot.read_only()
    }
}

impl<R> Default for SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GridPresenter<R> for SignalPresenter<R>
where
    R: GridRecord + Send + Sync + 'static,
    R::Id: Send + Sync,
{
    fn render(&mut self, snapshot: GridSnapshot<R>) {
        self.snapshot.set(snapshot);
    }
}

/// Visible-page selection after the user flips one row checkbox
pub fn toggle_row_selection<R: GridRecord>(
    snapshot: &GridSnapshot<R>,
    id: &R::Id,
    checked: bool,
) -> Vec<R> {
    snapshot
        .records
        .iter()
        .filter(|r| {
            let row_id = r.record_id();
            if &row_id == id {
                checked
            } else {
                snapshot.is_selected(&row_id)
            }
        })
        .cloned()
        .collect()
}

/// Visible-page selection after the header checkbox
pub fn page_selection<R: GridRecord>(snapshot: &GridSnapshot<R>, check_all: bool) -> Vec<R> {
    if check_all {
        snapshot.records.clone()
    } else {
        Vec::new()
    }
}
