//! Paged grid with a selection that survives page changes
//!
//! The grid widget only knows about the rows it renders, so the selection
//! made on other pages is remembered here and merged with whatever the widget
//! reports for the visible page (see [`SelectionSet::reconcile`]).
//!
//! [`GridController`] owns the page window and the selection. It does no IO:
//! page requests come out as [`PageRequest`] tickets, the caller runs the
//! [`PageLoader`] and feeds the outcome back through
//! [`GridController::complete`].

pub mod controller;
pub mod event;
pub mod loader;
pub mod presenter;
pub mod record;
pub mod selection;
pub mod window;

pub use controller::{Completion, GridController, PageRequest};
pub use event::GridEvent;
pub use loader::{FetchFailure, LoadedPage, PageLoader};
pub use presenter::{GridPresenter, GridSnapshot};
pub use record::GridRecord;
pub use selection::SelectionSet;
pub use window::PageWindow;
