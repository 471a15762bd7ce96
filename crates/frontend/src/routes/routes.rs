use crate::layout::center::tabs::Tabs;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tab_session::TabSessionStore;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Every route renders the same shell; the tab session decides what is shown.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
