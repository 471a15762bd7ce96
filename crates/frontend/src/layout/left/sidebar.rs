//! Sidebar component with collapsible menu groups.
//!
//! Groups only list ids; titles, icons and paths come from the tab registry.

use crate::layout::tab_session::TabSessionStore;
use crate::shared::icons::icon;
use contracts::tabs::TabDescriptor;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<&'static str>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "research",
            label: "Research",
            icon: "folder",
            items: vec!["projects", "projects/new", "achievements"],
        },
        MenuGroup {
            id: "funding",
            label: "Funding & Compliance",
            icon: "coins",
            items: vec!["funding", "funding/applications", "ethics", "ethics/submit"],
        },
        MenuGroup {
            id: "resources",
            label: "Resources",
            icon: "flask",
            items: vec![
                "procurement",
                "procurement/requests",
                "lab-equipment",
                "lab-equipment/bookings",
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<TabSessionStore>().expect("TabSessionStore not found");

    let expanded_groups = RwSignal::new(vec!["research".to_string()]);
    let home = ctx.descriptor(&ctx.home_id());

    view! {
        <div class="app-sidebar__content">
            {home.map(|home| view! { <MenuItem descriptor=home padding="12px" /> })}

            {get_menu_groups().into_iter().map(|group| {
                let items: Vec<TabDescriptor> = group
                    .items
                    .iter()
                    .filter_map(|id| {
                        let descriptor = ctx.descriptor(id);
                        if descriptor.is_none() {
                            log::warn!("Sidebar: '{}' is not in the tab registry", id);
                        }
                        descriptor
                    })
                    .collect();

                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |groups| {
                                    if let Some(pos) = groups.iter().position(|x| x == &gid) {
                                        groups.remove(pos);
                                    } else {
                                        groups.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|descriptor| {
                                    view! { <MenuItem descriptor=descriptor padding="10px" /> }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn MenuItem(descriptor: TabDescriptor, padding: &'static str) -> impl IntoView {
    let ctx = use_context::<TabSessionStore>().expect("TabSessionStore not found");
    let item_id = StoredValue::new(descriptor.id.clone());
    let descriptor_stored = StoredValue::new(descriptor.clone());

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || item_id.with_value(|id| ctx.is_active(id))
            style:padding-left=padding
            on:click=move |_| ctx.open_tab(descriptor_stored.get_value())
        >
            <div class="app-sidebar__item-content">
                {icon(&descriptor.icon)}
                <span>{descriptor.title}</span>
            </div>
        </div>
    }
}
