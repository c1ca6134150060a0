pub mod state;

use self::state::create_state;
use crate::domain::a001_artwork::api::ArtworkPageLoader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    format_count, format_single_line, format_text, format_year, TableCellCheckbox,
    TableHeaderCheckbox,
};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::paged_grid::{page_selection, toggle_row_selection, SignalPresenter};
use contracts::domain::a001_artwork::{Artwork, ArtworkId};
use contracts::shared::config::GridConfig;
use contracts::shared::paged_grid::{GridEvent, PageLoader, PageRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-artwork-table";

#[component]
pub fn ArtworkList() -> impl IntoView {
    let config = use_context::<GridConfig>().unwrap_or_default();
    let controller = create_state(config.grid.page_size);
    let loader = StoredValue::new(ArtworkPageLoader::new(
        config.api.clone(),
        config.grid.page_size,
    ));
    let presenter = SignalPresenter::<Artwork>::new();
    let snapshot = presenter.snapshot();

    // Push the controller state to the table
    let publish = move || {
        let mut presenter = presenter;
        controller.with_value(|c| c.present(&mut presenter));
    };

    // Failures are logged by the controller and leave the previous page on screen
    let run_request = move |request: PageRequest| {
        publish();
        let loader = loader.get_value();
        spawn_local(async move {
            let outcome = loader.load_page(request.page()).await;
            controller.update_value(|c| {
                c.complete(request, outcome);
            });
            publish();
        });
    };

    let dispatch = move |event: GridEvent<Artwork>| {
        match controller.try_update_value(|c| c.handle_event(event)).flatten() {
            Some(request) => run_request(request),
            None => publish(),
        }
    };

    // Load the first page on open
    Effect::new(move |_| {
        if let Some(request) = controller.try_update_value(|c| c.mount()) {
            run_request(request);
        }
    });

    let loading = Signal::derive(move || snapshot.with(|s| s.loading));
    let items_signal = Signal::derive(move || snapshot.with(|s| s.records.clone()));
    let selected_signal = Signal::derive(move || snapshot.with(|s| s.selected_ids.clone()));
    let selection_count = Signal::derive(move || snapshot.with(|s| s.selection_count));

    let toggle_selection = move |(id, checked): (ArtworkId, bool)| {
        let records = snapshot.with_untracked(|s| toggle_row_selection(s, &id, checked));
        dispatch(GridEvent::SelectionChanged { records });
    };

    let toggle_all = move |check_all: bool| {
        let records = snapshot.with_untracked(|s| page_selection(s, check_all));
        dispatch(GridEvent::SelectionChanged { records });
    };

    let go_to_page = move |index: usize| dispatch(GridEvent::PageRequested { index });

    let clear_selection = move || {
        controller.update_value(|c| c.clear_selection());
        publish();
    };

    view! {
        <div class="page" id="a001_artwork--list" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Artworks"</h1>
                    <UiBadge variant="primary".to_string() title="Records in the collection".to_string()>
                        {move || format_count(snapshot.with(|s| s.total))}
                    </UiBadge>
                    <UiBadge
                        variant=Signal::derive(move || {
                            let variant = if selection_count.get() > 0 { "success" } else { "neutral" };
                            variant.to_string()
                        })
                        title="Selected on all pages".to_string()
                    >
                        {move || format!("Selected: {}", selection_count.get())}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| clear_selection()
                        disabled=Signal::derive(move || selection_count.get() == 0)
                    >
                        "Clear selection"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || snapshot.with(|s| s.page_index()))
                                total_pages=Signal::derive(move || snapshot.with(|s| s.page_count as usize))
                                total_count=Signal::derive(move || snapshot.with(|s| s.total))
                                row_range=Signal::derive(move || snapshot.with(|s| s.row_range()))
                                has_previous=Signal::derive(move || snapshot.with(|s| s.has_previous()))
                                has_next=Signal::derive(move || snapshot.with(|s| s.has_next()))
                                disabled=loading
                                on_page_change=Callback::new(go_to_page)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <Show when=move || loading.get()>
                                <Spinner />
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=items_signal
                                    selected=selected_signal
                                    get_id=Callback::new(|row: Artwork| row.id)
                                    on_change=Callback::new(toggle_all)
                                    disabled=loading
                                />
                                <TableHeaderCell resizable=false min_width=240.0>"Title"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Origin"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Artist"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Inscriptions"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Start Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"End Date"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || items_signal.get()
                                key=|item| item.id
                                children=move |item| {
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=item.id
                                                selected=selected_signal
                                                on_change=Callback::new(toggle_selection)
                                                disabled=loading
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_text(item.title.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_text(item.place_of_origin.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_single_line(item.artist_display.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format_single_line(item.inscriptions.as_deref())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_year(item.date_start)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_year(item.date_end)}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || !loading.get() && items_signal.with(|i| i.is_empty())>
                        <p class="table__empty">"No artworks loaded"</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
