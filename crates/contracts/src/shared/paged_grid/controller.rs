use super::event::GridEvent;
use super::loader::{FetchFailure, LoadedPage};
use super::presenter::{GridPresenter, GridSnapshot};
use super::record::GridRecord;
use super::selection::SelectionSet;
use super::window::PageWindow;

/// Ticket for one outstanding page load.
///
/// Hand it back to [`GridController::complete`] together with the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    seq: u64,
}

impl PageRequest {
    /// 1-based page to load
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What [`GridController::complete`] did with an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The page replaced the window
    Applied { page: u32, records: usize },
    /// The load failed; the window is unchanged
    Failed { page: u32, failure: FetchFailure },
    /// Empty page past the first one; the window is unchanged
    OutOfRange { page: u32 },
    /// A newer request was issued meanwhile; the outcome was dropped
    Superseded { page: u32 },
}

/// Owner of the page window and of the cross-page selection
#[derive(Debug, Clone)]
pub struct GridController<R: GridRecord> {
    page_size: usize,
    loading: bool,
    current_page: u32,
    window: PageWindow<R>,
    selection: SelectionSet<R>,
    last_seq: u64,
}

impl<R: GridRecord> GridController<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            loading: false,
            current_page: 1,
            window: PageWindow::empty(),
            selection: SelectionSet::new(),
            last_seq: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// 1-based page the window was loaded from
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn window(&self) -> &PageWindow<R> {
        &self.window
    }

    pub fn selection(&self) -> &SelectionSet<R> {
        &self.selection
    }

    pub fn page_count(&self) -> u32 {
        self.window.page_count(self.page_size)
    }

    /// Offset of the first visible row
    pub fn first_row(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize) * self.page_size
    }

    /// Initial load of the first page
    pub fn mount(&mut self) -> PageRequest {
        self.issue(1)
    }

    /// Start loading a 1-based page. Page 0 is rejected.
    pub fn request_page(&mut self, page: u32) -> Option<PageRequest> {
        if page == 0 {
            log::warn!("paged grid: ignoring request for page 0");
            return None;
        }
        Some(self.issue(page))
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        self.last_seq += 1;
        self.loading = true;
        log::debug!("paged grid: requesting page {} (#{})", page, self.last_seq);
        PageRequest {
            page,
            seq: self.last_seq,
        }
    }

    /// Dispatch a widget event. Returns a ticket when a page load must start.
    pub fn handle_event(&mut self, event: GridEvent<R>) -> Option<PageRequest> {
        match event {
            GridEvent::PageRequested { index } => {
                let page = u32::try_from(index).ok()?.checked_add(1)?;
                self.request_page(page)
            }
            GridEvent::SelectionChanged { records } => {
                self.apply_selection_change(records);
                None
            }
        }
    }

    /// Replace the selection with the reconciled one for the visible page
    pub fn apply_selection_change(&mut self, reported: Vec<R>) {
        let next = self.selection.reconcile(self.window.records(), reported);
        log::debug!(
            "paged grid: selection {} -> {} records",
            self.selection.len(),
            next.len()
        );
        self.selection = next;
    }

    /// Deselect everything, on every page
    pub fn clear_selection(&mut self) {
        let everything = self.selection.records().to_vec();
        self.selection = self.selection.reconcile(&everything, Vec::new());
    }

    /// Feed back the outcome of a page load
    pub fn complete(
        &mut self,
        request: PageRequest,
        outcome: Result<LoadedPage<R>, FetchFailure>,
    ) -> Completion {
        let page = request.page;

        if request.seq != self.last_seq {
            log::debug!(
                "paged grid: dropping stale page {} (#{}, latest #{})",
                page,
                request.seq,
                self.last_seq
            );
            return Completion::Superseded { page };
        }

        self.loading = false;

        match outcome {
            Ok(loaded) if loaded.records.is_empty() && page > 1 => {
                log::warn!(
                    "paged grid: page {} is empty (total {}), keeping page {}",
                    page,
                    loaded.total,
                    self.current_page
                );
                Completion::OutOfRange { page }
            }
            Ok(loaded) => {
                let records = loaded.records.len();
                self.window = PageWindow::new(loaded.records, loaded.total);
                self.current_page = page;
                log::info!(
                    "paged grid: page {} loaded, {} of {} records",
                    page,
                    records,
                    loaded.total
                );
                Completion::Applied { page, records }
            }
            Err(failure) => {
                log::error!("paged grid: failed to load page {}: {}", page, failure);
                Completion::Failed { page, failure }
            }
        }
    }

    /// Selected records among the visible ones
    pub fn visible_selection(&self) -> Vec<R> {
        self.selection.selected_on(self.window.records())
    }

    pub fn snapshot(&self) -> GridSnapshot<R> {
        let selected_ids = self
            .visible_selection()
            .iter()
            .map(GridRecord::record_id)
            .collect();
        GridSnapshot {
            records: self.window.records().to_vec(),
            selected_ids,
            selection_count: self.selection.len(),
            total: self.window.total(),
            page_size: self.page_size,
            current_page: self.current_page,
            page_count: self.page_count(),
            first: self.first_row(),
            loading: self.loading,
        }
    }

    pub fn present<P: GridPresenter<R>>(&self, presenter: &mut P) {
        presenter.render(self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_artwork::{Artwork, ArtworkId};

    const PAGE_SIZE: usize = 12;
    const TOTAL: u64 = 136;

    /// Page of the fake collection: ids `(page - 1) * 12 + 1 ..`
    fn page_of(page: u32) -> LoadedPage<Artwork> {
        let start = (page as u64 - 1) * PAGE_SIZE as u64 + 1;
        let end = (start + PAGE_SIZE as u64).min(TOTAL + 1);
        LoadedPage {
            records: (start..end)
                .map(|id| Artwork::new(id, format!("Artwork {}", id)))
                .collect(),
            total: TOTAL,
        }
    }

    fn art(id: u64) -> Artwork {
        Artwork::new(id, format!("Artwork {}", id))
    }

    fn load(controller: &mut GridController<Artwork>, page: u32) -> Completion {
        let request = controller.request_page(page).unwrap();
        controller.complete(request, Ok(page_of(page)))
    }

    fn mounted() -> GridController<Artwork> {
        let mut controller = GridController::new(PAGE_SIZE);
        let request = controller.mount();
        controller.complete(request, Ok(page_of(1)));
        controller
    }

    #[derive(Default)]
    struct RecordingPresenter {
        renders: Vec<GridSnapshot<Artwork>>,
    }

    impl GridPresenter<Artwork> for RecordingPresenter {
        fn render(&mut self, snapshot: GridSnapshot<Artwork>) {
            self.renders.push(snapshot);
        }
    }

    #[test]
    fn test_initial_state() {
        let controller: GridController<Artwork> = GridController::new(PAGE_SIZE);
        assert!(!controller.loading());
        assert_eq!(controller.current_page(), 1);
        assert!(controller.window().is_empty());
        assert!(controller.selection().is_empty());
    }

    #[test]
    fn test_mount_loads_first_page() {
        let mut controller: GridController<Artwork> = GridController::new(PAGE_SIZE);
        let request = controller.mount();
        assert_eq!(request.page(), 1);
        assert!(controller.loading());

        let completion = controller.complete(request, Ok(page_of(1)));
        assert_eq!(completion, Completion::Applied { page: 1, records: 12 });
        assert!(!controller.loading());
        assert_eq!(controller.window().len(), 12);
        assert_eq!(controller.page_count(), 12);
    }

    #[test]
    fn test_page_event_is_converted_to_one_based() {
        let mut controller = mounted();
        let request = controller
            .handle_event(GridEvent::PageRequested { index: 2 })
            .unwrap();
        assert_eq!(request.page(), 3);

        controller.complete(request, Ok(page_of(3)));
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.first_row(), 24);
        assert_eq!(controller.window().records()[0].id, ArtworkId(25));
    }

    #[test]
    fn test_selection_persists_across_pages() {
        let mut controller = mounted();
        controller.handle_event(GridEvent::SelectionChanged {
            records: vec![art(1)],
        });

        load(&mut controller, 2);
        assert!(controller.visible_selection().is_empty());
        assert!(controller.selection().contains(&ArtworkId(1)));

        load(&mut controller, 1);
        let visible: Vec<ArtworkId> = controller
            .visible_selection()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(visible, vec![ArtworkId(1)]);
    }

    #[test]
    fn test_on_page_deselection() {
        let mut controller = mounted();
        controller.apply_selection_change(vec![art(1), art(2)]);
        controller.apply_selection_change(vec![art(2)]);

        assert!(!controller.selection().contains(&ArtworkId(1)));
        assert!(controller.selection().contains(&ArtworkId(2)));
    }

    #[test]
    fn test_selection_change_does_not_touch_loading() {
        let mut controller = mounted();
        let _pending = controller.request_page(2).unwrap();
        controller.apply_selection_change(vec![art(3)]);
        assert!(controller.loading());
        assert_eq!(controller.selection().len(), 1);
    }

    #[test]
    fn test_failure_keeps_window_and_clears_loading() {
        let mut controller = mounted();
        controller.apply_selection_change(vec![art(4)]);

        let request = controller.request_page(2).unwrap();
        let completion = controller.complete(request, Err(FetchFailure::Status(503)));

        assert_eq!(
            completion,
            Completion::Failed {
                page: 2,
                failure: FetchFailure::Status(503)
            }
        );
        assert!(!controller.loading());
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.window().records()[0].id, ArtworkId(1));
        assert!(controller.selection().contains(&ArtworkId(4)));
    }

    #[test]
    fn test_page_past_the_end() {
        let mut controller = mounted();
        controller.apply_selection_change(vec![art(2)]);
        load(&mut controller, 12);
        assert_eq!(controller.window().len(), 4);
        assert_eq!(controller.snapshot().row_range(), Some((133, 136)));
        assert!(!controller.snapshot().has_next());
        let before = controller.window().clone();

        // Widget never offers page 13 for 136 records; a direct call is survivable
        assert_eq!(controller.page_count(), 12);
        let request = controller.request_page(13).unwrap();
        let completion = controller.complete(
            request,
            Ok(LoadedPage {
                records: Vec::new(),
                total: TOTAL,
            }),
        );
        assert_eq!(completion, Completion::OutOfRange { page: 13 });
        assert_eq!(controller.window(), &before);
        assert_eq!(controller.current_page(), 12);
        assert!(!controller.loading());

        let request = controller.request_page(13).unwrap();
        controller.complete(request, Err(FetchFailure::Status(404)));
        assert_eq!(controller.window(), &before);
        assert_eq!(controller.selection().len(), 1);
        assert!(controller.selection().contains(&ArtworkId(2)));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut controller = mounted();
        let slow = controller.request_page(2).unwrap();
        let fast = controller.request_page(3).unwrap();

        assert_eq!(
            controller.complete(fast, Ok(page_of(3))),
            Completion::Applied { page: 3, records: 12 }
        );
        assert_eq!(
            controller.complete(slow, Ok(page_of(2))),
            Completion::Superseded { page: 2 }
        );
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.window().records()[0].id, ArtworkId(25));
        assert!(!controller.loading());
    }

    #[test]
    fn test_stale_completion_leaves_loading_on() {
        let mut controller = mounted();
        let slow = controller.request_page(2).unwrap();
        let _fast = controller.request_page(3).unwrap();

        controller.complete(slow, Err(FetchFailure::Network("reset".into())));
        assert!(controller.loading());
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let mut controller = mounted();
        assert!(controller.request_page(0).is_none());
        assert!(!controller.loading());
    }

    #[test]
    fn test_clear_selection() {
        let mut controller = mounted();
        controller.apply_selection_change(vec![art(1)]);
        load(&mut controller, 2);
        controller.apply_selection_change(vec![art(13), art(14)]);
        assert_eq!(controller.selection().len(), 3);

        controller.clear_selection();
        assert!(controller.selection().is_empty());
        assert!(controller.visible_selection().is_empty());
    }

    #[test]
    fn test_present_renders_snapshot() {
        let mut controller = mounted();
        controller.apply_selection_change(vec![art(5)]);
        load(&mut controller, 2);
        controller.apply_selection_change(vec![art(20)]);

        let mut presenter = RecordingPresenter::default();
        controller.present(&mut presenter);

        let snapshot = presenter.renders.pop().unwrap();
        assert_eq!(snapshot.records.len(), 12);
        assert_eq!(snapshot.selection_count, 2);
        assert!(snapshot.is_selected(&ArtworkId(20)));
        assert!(!snapshot.is_selected(&ArtworkId(5)));
        assert_eq!(snapshot.selected_ids.len(), 1);
        assert_eq!(snapshot.total, 136);
        assert_eq!(snapshot.first, 12);
        assert_eq!(snapshot.row_range(), Some((13, 24)));
        assert_eq!(snapshot.page_index(), 1);
        assert!(snapshot.has_previous());
        assert!(snapshot.has_next());
        assert!(!snapshot.loading);
    }
}
