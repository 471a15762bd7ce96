//! Generic section page. Section contents are not part of the shell; the page
//! shows where the tab is routed, links to nested sections and a notes field
//! whose draft survives switching tabs.

use crate::layout::tab_session::TabSessionStore;
use contracts::tabs::OpenTab;
use leptos::prelude::*;
use serde_json::json;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn SectionPage(tab: OpenTab) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    let subsections = tabs_store.subsections(&tab.id);
    let tab_id = StoredValue::new(tab.id.clone());
    let base_title = StoredValue::new(tab.title.clone());

    let initial_notes = tabs_store
        .get_form_state(&tab.id)
        .and_then(|state| state.get("notes").and_then(|v| v.as_str()).map(str::to_string))
        .unwrap_or_default();
    let notes = RwSignal::new(initial_notes);

    view! {
        <div class="section-page">
            <h2 class="section-page__title">{tab.title.clone()}</h2>
            <p class="section-page__path">{tab.path.clone()}</p>

            {(!subsections.is_empty()).then(|| view! {
                <div class="section-page__links">
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
            })}

            <label class="section-page__notes">
                <span>"Notes"</span>
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let id = tab_id.get_value();
                        tabs_store.set_form_state(id.clone(), json!({ "notes": value.clone() }));

                        // Unsaved draft marker in the tab strip
                        let title = base_title.get_value();
                        if value.is_empty() {
                            tabs_store.update_tab_title(&id, &title);
                        } else {
                            tabs_store.update_tab_title(&id, &format!("{} *", title));
                        }
                        notes.set(value);
                    }
                ></textarea>
            </label>
        </div>
    }
}
