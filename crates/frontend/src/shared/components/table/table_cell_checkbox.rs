//! Row checkbox in a table cell
//!
//! # Example
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id
//!     selected=selected_ids
//!     on_change=Callback::new(move |(id, checked)| toggle(id, checked))
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;
use thaw::*;

/// Checkbox cell for one row.
///
/// Stops click propagation so the row itself does not react.
#[component]
pub fn TableCellCheckbox<Id>(
    /// Id of this row
    item_id: Id,

    /// Selected ids on the visible page
    #[prop(into)]
    selected: Signal<HashSet<Id>>,

    /// Called with (item_id, checked)
    on_change: Callback<(Id, bool)>,

    /// Disable while loading
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    Id: Clone + Eq + Hash + Send + Sync + 'static,
{
    let item_id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&item_id_for_checked))
                prop:disabled=move || disabled.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
