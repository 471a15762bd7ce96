//! TabsDropdown component - compact list of open tabs in the top header.

use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TabsDropdown() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<TabSessionStore>().expect("TabSessionStore not found");

    let is_open = RwSignal::new(false);

    let active_title = move || {
        let id = ctx.active_id();
        ctx.title(&id).unwrap_or_default()
    };

    let toggle_dropdown = move |_| {
        is_open.update(|open| *open = !*open);
    };

    let switch_tab = move |id: String| {
        ctx.activate_tab(&id);
        is_open.set(false);
    };

    view! {
        <div class="tabs-dropdown">
            <button
                class="tabs-dropdown__trigger"
                on:click=toggle_dropdown
                title="Open tabs"
            >
                <span class="tabs-dropdown__trigger-text">
                    {move || format!("{} ({})", active_title(), ctx.tab_count())}
                </span>
                {move || if is_open.get() {
                    icon("chevron-up")
                } else {
                    icon("chevron-down")
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="tabs-dropdown__menu">
                    {move || {
                        ctx.tabs().into_iter().map(|tab| {
                            let is_active = ctx.is_active(&tab.id);
                            let id_for_switch = tab.id.clone();
                            let id_for_close = tab.id.clone();

                            view! {
                                <div
                                    class="tabs-dropdown__item"
                                    class:tabs-dropdown__item--active=is_active
                                    on:click=move |_| switch_tab(id_for_switch.clone())
                                >
                                    <span class="tabs-dropdown__item-title">{tab.title.clone()}</span>
                                    {tab.closable.then(|| view! {
                                        <button
                                            class="tabs-dropdown__item-close"
                                            on:click=move |ev: ev::MouseEvent| {
                                                ev.stop_propagation();
                                                ctx.close_tab(&id_for_close);
                                            }
                                            title="Close tab"
                                        >
                                            {icon("x")}
                                        </button>
                                    })}
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
