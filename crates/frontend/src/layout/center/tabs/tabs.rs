use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::tab_session::TabSessionStore;
use crate::layout::tabs::TabPage;
use contracts::tabs::OpenTab;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <div class="tabs-bar__list">
                    <For
                        each=move || tabs_store.tabs()
                        key=|tab| tab.id.clone()
                        children=move |tab| {
                            view! { <TabComponent tab=tab /> }
                        }
                    />
                </div>
                <div class="tabs-bar__actions">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| tabs_store.close_other_tabs()
                    >
                        "Close others"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| tabs_store.close_all_tabs()
                    >
                        "Close all"
                    </Button>
                </div>
            </div>
            <div class="tab-content">
                <For
                    each=move || {
                        let tabs = tabs_store.tabs();
                        log!("📋 <For> each triggered. Tabs count: {}", tabs.len());
                        tabs
                    }
                    key=|tab| tab.id.clone()
                    children=move |tab: OpenTab| {
                        view! { <TabPage tab=tab /> }
                    }
                />
            </div>
        </div>
    }
}
