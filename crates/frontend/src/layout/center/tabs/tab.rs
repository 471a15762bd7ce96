use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use contracts::tabs::OpenTab;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: OpenTab) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    let tab_id = StoredValue::new(tab.id.clone());
    let is_active = Memo::new(move |_| tab_id.with_value(|id| tabs_store.is_active(id)));
    // Title is read live so renames show up without re-keying the strip
    let title = move || tab_id.with_value(|id| tabs_store.title(id)).unwrap_or_default();

    let on_click = move |_| tab_id.with_value(|id| tabs_store.activate_tab(id));

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tab_id.with_value(|id| tabs_store.close_tab(id));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.path>
            {icon(&tab.icon)}
            <span>{title}</span>
            {tab.closable.then(|| view! {
                <button class="tab-close" on:click=on_close>"×"</button>
            })}
        </div>
    }
}
