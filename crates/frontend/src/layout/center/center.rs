use crate::layout::tab_session::TabSessionStore;
use contracts::tabs::route_segments;
use leptos::prelude::*;

/// Registry keys for every level of `path`, outermost first.
///
/// `/projects/new` yields `projects`, `projects/new`.
fn breadcrumb_keys(path: &str) -> Vec<String> {
    let segments = route_segments(path);
    (1..=segments.len())
        .map(|depth| segments[..depth].join("/"))
        .collect()
}

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<TabSessionStore>()
        .expect("TabSessionStore context not found");

    let active_id = move || tabs_store.active_id();
    let crumbs = move || {
        let active = tabs_store.active_tab();
        let keys = breadcrumb_keys(&active.path);
        let last = keys.len().saturating_sub(1);
        keys.into_iter()
            .enumerate()
            .map(|(depth, key)| {
                let label = if depth == last {
                    active.title.clone()
                } else {
                    tabs_store
                        .descriptor(&key)
                        .map(|d| d.title)
                        .unwrap_or_else(|| key.clone())
                };
                // Ancestors open their own section tab
                let target = (depth != last).then(|| tabs_store.descriptor(&key)).flatten();
                match target {
                    Some(descriptor) => view! {
                        <span class="breadcrumb__sep">"›"</span>
                        <a class="breadcrumb__link" on:click=move |_| tabs_store.open_tab(descriptor.clone())>
                            {label}
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <span class="breadcrumb__sep">"›"</span>
                        <span class="breadcrumb__current">{label}</span>
                    }
                    .into_any(),
                }
            })
            .collect_view()
    };

    view! {
        <div data-zone="center" data-active-tab=active_id class="app-tabs" style="flex: 1; overflow: auto;">
            <nav class="breadcrumb">
                <a class="breadcrumb__link" on:click=move |_| tabs_store.activate_tab(&tabs_store.home_id())>
                    "Research Portal"
                </a>
                {crumbs}
            </nav>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_keys() {
        assert!(breadcrumb_keys("/").is_empty());
        assert_eq!(breadcrumb_keys("/projects"), vec!["projects"]);
        assert_eq!(
            breadcrumb_keys("/projects/new?step=2"),
            vec!["projects", "projects/new"]
        );
        assert_eq!(
            breadcrumb_keys("/lab-equipment/bookings/7"),
            vec!["lab-equipment", "lab-equipment/bookings", "lab-equipment/bookings/7"]
        );
    }
}
