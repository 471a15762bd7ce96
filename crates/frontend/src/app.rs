use crate::layout::tab_session::TabSessionStore;
use crate::routes::routes::AppRoutes;
use contracts::tabs::load_registry;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let registry = match load_registry(None) {
        Ok(registry) => registry,
        Err(err) => {
            log::error!("Failed to load tab registry: {:#}", err);
            return view! {
                <div class="app-error">
                    <h2>"Application sections could not be loaded"</h2>
                    <pre>{format!("{:#}", err)}</pre>
                </div>
            }
            .into_any();
        }
    };

    // Provide the tab session store to the whole app via context.
    provide_context(TabSessionStore::new(registry));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
    .into_any()
}
