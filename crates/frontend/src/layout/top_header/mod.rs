//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the open tabs
//! dropdown.

mod tabs_dropdown;

use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use leptos::prelude::*;
use tabs_dropdown::TabsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<TabSessionStore>().expect("TabSessionStore not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Research Portal"</span>
            </div>

            <div class="top-header__actions">
                <TabsDropdown />
            </div>
        </div>
    }
}
