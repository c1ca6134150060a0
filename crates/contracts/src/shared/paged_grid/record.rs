use std::fmt::Debug;
use std::hash::Hash;

/// A row that can be shown in the paged grid.
///
/// Identity for selection is the id alone.
pub trait GridRecord: Clone {
    type Id: Clone + Eq + Hash + Debug;

    fn record_id(&self) -> Self::Id;
}
