use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use contracts::tabs::OpenTab;
use leptos::prelude::*;

/// Left zone. Shows the sidebar when open; when collapsed, a narrow rail with
/// one icon per open tab stays visible so tabs can still be switched.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");
    let is_open = move || tabs_store.left_open.get();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || !is_open()>
            <div class="left__panel" class:hidden=move || !is_open()>
                {children()}
            </div>
            <Show when=move || !is_open()>
                <nav class="left__rail">
                    <For
                        each=move || tabs_store.tabs()
                        key=|tab| (tab.id.clone(), tab.title.clone())
                        children=move |tab: OpenTab| {
                            let tab_id = StoredValue::new(tab.id.clone());
                            view! {
                                <button
                                    class="left__rail-item"
                                    class:left__rail-item--active=move || tab_id.with_value(|id| tabs_store.is_active(id))
                                    title=tab.title
                                    on:click=move |_| tab_id.with_value(|id| tabs_store.activate_tab(id))
                                >
                                    {icon(&tab.icon)}
                                </button>
                            }
                        }
                    />
                </nav>
            </Show>
        </div>
    }
}
