//! Tab session store - the single owner of the tab session in the UI.
//!
//! Wraps `contracts::tabs::TabSession` in signals and is provided to the whole
//! app via context. Components only read through the accessors and mutate
//! through the named operations; navigation requests produced by the session
//! are handed to the router by `init_router_integration`.

use contracts::tabs::{Navigation, OpenTab, TabCommand, TabDescriptor, TabRegistry, TabSession};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct TabSessionStore {
    session: RwSignal<TabSession>,
    registry: StoredValue<TabRegistry>,
    navigation: RwSignal<Option<Navigation>>,
    pub left_open: RwSignal<bool>,
    form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl TabSessionStore {
    pub fn new(registry: TabRegistry) -> Self {
        Self {
            session: RwSignal::new(TabSession::from_registry(&registry)),
            registry: StoredValue::new(registry),
            navigation: RwSignal::new(None),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    /// Wires the store to the router. Must be called inside `<Router>`, once.
    ///
    /// Route changes are fed to the synchronizer; navigation requests from
    /// the session are pushed to the router.
    pub fn init_router_integration(&self) {
        let location = use_location();
        let navigate = use_navigate();
        let this = *self;

        Effect::new(move |_| {
            let path = location.pathname.get();
            this.sync_route(&path);
        });

        Effect::new(move |_| {
            if let Some(nav) = this.navigation.get() {
                log!("🧭 navigate: {}", nav.path);
                navigate(&nav.path, NavigateOptions::default());
            }
        });

        Effect::new(move |_| {
            let title = this.session.with(|s| s.active_tab().title.clone());
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} · Research Portal", title));
            }
        });
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn tabs(&self) -> Vec<OpenTab> {
        self.session.with(|s| s.tabs().to_vec())
    }

    pub fn tab_count(&self) -> usize {
        self.session.with(|s| s.tabs().len())
    }

    pub fn active_id(&self) -> String {
        self.session.with(|s| s.active_id().to_string())
    }

    pub fn active_tab(&self) -> OpenTab {
        self.session.with(|s| s.active_tab().clone())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.session.with(|s| s.is_active(id))
    }

    pub fn title(&self, id: &str) -> Option<String> {
        self.session.with(|s| s.get(id).map(|t| t.title.clone()))
    }

    pub fn home_id(&self) -> String {
        self.registry.with_value(|r| r.home_id().to_string())
    }

    /// Registry entry for a section or custom key.
    pub fn descriptor(&self, id: &str) -> Option<TabDescriptor> {
        self.registry.with_value(|r| r.lookup(id).cloned())
    }

    /// Top-level sections, home excluded.
    pub fn sections(&self) -> Vec<TabDescriptor> {
        self.registry.with_value(|r| {
            r.tabs()
                .iter()
                .filter(|t| t.id != r.home_id())
                .cloned()
                .collect()
        })
    }

    /// Custom entries nested under `section_id`.
    pub fn subsections(&self, section_id: &str) -> Vec<TabDescriptor> {
        let prefix = format!("{}/", section_id);
        self.registry.with_value(|r| {
            r.custom_tabs()
                .iter()
                .filter(|t| t.id.starts_with(&prefix))
                .cloned()
                .collect()
        })
    }

    // ── Operations ──────────────────────────────────────────────────────

    pub fn dispatch(&self, command: TabCommand) {
        log!("🔷 dispatch: {:?}", command);
        let navigation = self.session.try_update(|s| s.apply(command)).flatten();
        self.prune_form_states();
        if let Some(nav) = navigation {
            self.navigation.set(Some(nav));
        }
    }

    pub fn open_tab(&self, info: TabDescriptor) {
        self.dispatch(TabCommand::Open(info));
    }

    pub fn activate_tab(&self, id: &str) {
        self.dispatch(TabCommand::Activate(id.to_string()));
    }

    pub fn close_tab(&self, id: &str) {
        self.dispatch(TabCommand::Close(id.to_string()));
    }

    pub fn close_other_tabs(&self) {
        self.dispatch(TabCommand::CloseOthers);
    }

    pub fn close_all_tabs(&self) {
        self.dispatch(TabCommand::CloseAll);
    }

    pub fn update_tab_title(&self, id: &str, title: &str) {
        self.session.maybe_update(|s| s.update_tab_title(id, title));
    }

    /// Route synchronizer entry point.
    pub fn sync_route(&self, path: &str) {
        self.registry.with_value(|registry| {
            self.session.maybe_update(|s| s.sync_route(path, registry));
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    // ── Per-tab form state ──────────────────────────────────────────────

    pub fn get_form_state(&self, tab_id: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(tab_id).cloned())
    }

    pub fn set_form_state(&self, tab_id: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(tab_id, state);
        });
    }

    /// Drops form state of tabs that are no longer open.
    fn prune_form_states(&self) {
        let open: Vec<String> = self
            .session
            .with_untracked(|s| s.tabs().iter().map(|t| t.id.clone()).collect());
        self.form_states.maybe_update(|states| {
            let before = states.len();
            states.retain(|id, _| open.contains(id));
            states.len() != before
        });
    }
}
