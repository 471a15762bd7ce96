//! Tab content registry - maps an open tab to the view it renders.

use crate::layout::tab_session::TabSessionStore;
use crate::sections::{SectionPage, WorkbenchPage};
use contracts::tabs::OpenTab;
use leptos::prelude::*;

/// Renders the content of an open tab.
///
/// The home tab gets the workbench; every other tab renders its section page.
pub fn render_tab_content(tab: &OpenTab, tabs_store: TabSessionStore) -> AnyView {
    if tab.id == tabs_store.home_id() {
        return view! { <WorkbenchPage /> }.into_any();
    }
    view! { <SectionPage tab=tab.clone() /> }.into_any()
}
