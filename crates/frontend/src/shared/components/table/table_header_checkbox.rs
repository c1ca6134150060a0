//! Header checkbox that selects or clears every row of the visible page
//!
//! # Example
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     items=items
//!     selected=selected_ids
//!     get_id=Callback::new(|row: Artwork| row.id)
//!     on_change=Callback::new(move |check_all: bool| {
//!         // report all visible rows, or none
//!     })
//! />
//! ```

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl HeaderCheckboxState {
    /// State for `selected` of `visible` rows
    pub fn from_counts(visible: usize, selected: usize) -> Self {
        if visible == 0 || selected == 0 {
            Self::Unchecked
        } else if selected >= visible {
            Self::Checked
        } else {
            Self::Indeterminate
        }
    }
}

/// Three-state checkbox in the table header.
///
/// Only the rows in `items` count; selections on other pages do not affect
/// its state.
#[component]
pub fn TableHeaderCheckbox<T, Id>(
    /// Rows of the visible page
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Selected ids on the visible page
    #[prop(into)]
    selected: Signal<HashSet<Id>>,

    /// Extracts the row id
    get_id: Callback<T, Id>,

    /// true = select all visible rows, false = clear them
    on_change: Callback<bool>,

    /// Disable while loading
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    Id: Clone + Eq + Hash + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel = selected.get();
        let selected_count = current_items
            .iter()
            .filter(|&item| sel.contains(&get_id.run(item.clone())))
            .count();
        HeaderCheckboxState::from_counts(current_items.len(), selected_count)
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only, no attribute for it
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, HeaderCheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), HeaderCheckboxState::Checked)
                prop:disabled=move || disabled.get() || items.with(|i| i.is_empty())
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}
