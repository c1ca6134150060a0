use contracts::domain::a001_artwork::Artwork;
use contracts::shared::paged_grid::GridController;
use leptos::prelude::*;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(page_size: usize) -> StoredValue<GridController<Artwork>> {
    StoredValue::new(GridController::new(page_size))
}
