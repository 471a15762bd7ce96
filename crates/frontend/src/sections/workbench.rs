//! Workbench - the permanent home tab.

use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn WorkbenchPage() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    let sections = tabs_store.sections();

    view! {
        <div class="workbench">
            <h2 class="workbench__title">"Workbench"</h2>
            <div class="workbench__grid">
                {sections.into_iter().map(|section| {
                    let subsections = tabs_store.subsections(&section.id);
                    let section_stored = StoredValue::new(section.clone());

                    view! {
                        <div class="workbench__card">
                            <div class="workbench__card-header">
                                {icon(&section.icon)}
                                <span>{section.title}</span>
                            </div>
                            <div class="workbench__card-actions">
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| tabs_store.open_tab(section_stored.get_value())
                                >
                                    "Open"
                                </Button>
                                {subsections.into_iter().map(|sub| {
                                    let title = sub.title.clone();
                                    let sub_stored = StoredValue::new(sub);
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| tabs_store.open_tab(sub_stored.get_value())
                                        >
                                            {title}
                                        </Button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
