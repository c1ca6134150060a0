use crate::shared::components::table::format_count;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - first/prev/next/last navigation
///
/// Pages are 0-indexed here, as the grid widget counts them. The owner
/// converts to the 1-based wire index.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// 1-based rows on screen, inclusive
    #[prop(into)]
    row_range: Signal<Option<(usize, usize)>>,

    /// A page before the current one exists
    #[prop(into)]
    has_previous: Signal<bool>,

    /// A page after the current one exists
    #[prop(into)]
    has_next: Signal<bool>,

    /// Disable navigation while a page is loading
    #[prop(into)]
    disabled: Signal<bool>,

    /// Callback when page changes (0-indexed)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || disabled.get() || !has_previous.get();
    let at_end = move || disabled.get() || !has_next.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_previous.get() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get() + 1;
                    let pages = total_pages.get().max(1);
                    let count = format_count(total_count.get());
                    match row_range.get() {
                        Some((from, to)) => format!("{}–{} of {} · {} / {}", from, to, count, page, pages),
                        None => format!("{} / {} ({})", page, pages, count),
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
