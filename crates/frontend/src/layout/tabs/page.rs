//! TabPage component - wrapper around one tab's content.
//!
//! Content stays mounted for as long as the tab is open and is hidden via the
//! `tabs__item--hidden` class while another tab is active.

use super::registry::render_tab_content;
use crate::layout::tab_session::TabSessionStore;
use contracts::tabs::OpenTab;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: OpenTab) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    let tab_id = tab.id.clone();
    let tab_id_for_active_check = tab_id.clone();
    let is_active = move || tabs_store.is_active(&tab_id_for_active_check);

    log!("🔨 TabPage CREATED for: '{}'", tab_id);

    let tab_id_for_cleanup = tab_id.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab_id_for_cleanup);
    });

    let content = render_tab_content(&tab, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_id
        >
            {content}
        </div>
    }
}
