use crate::domain::a001_artwork::ui::list::ArtworkList;
use crate::shared::config::app_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the grid configuration to the whole app via context.
    provide_context(app_config());

    view! {
        <ArtworkList />
    }
}
