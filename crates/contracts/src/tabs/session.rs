//! Tab session state machine.
//!
//! Owns the ordered list of open tabs, the active tab id and the history of
//! previously active ids. Every mutation goes through the methods below (or
//! `apply` with a `TabCommand`); operations that change the visible tab return
//! a `Navigation` the UI layer hands to the router.

use super::descriptor::{OpenTab, TabDescriptor};
use super::registry::{normalize_path, TabRegistry};
use log::{debug, warn};

/// Request to move the router to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
}

impl Navigation {
    fn to(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

/// Explicit command form of the session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCommand {
    Open(TabDescriptor),
    Activate(String),
    Close(String),
    CloseOthers,
    CloseAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSession {
    home: OpenTab,
    tabs: Vec<OpenTab>,
    active: String,
    history: Vec<String>,
}

impl TabSession {
    /// Fresh session with only the home tab open.
    pub fn new(home: &TabDescriptor) -> Self {
        let home = OpenTab::pinned(home);
        Self {
            tabs: vec![home.clone()],
            active: home.id.clone(),
            history: vec![home.id.clone()],
            home,
        }
    }

    pub fn from_registry(registry: &TabRegistry) -> Self {
        Self::new(registry.home())
    }

    pub fn tabs(&self) -> &[OpenTab] {
        &self.tabs
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    pub fn active_tab(&self) -> &OpenTab {
        self.get(&self.active).unwrap_or(&self.home)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn home_id(&self) -> &str {
        &self.home.id
    }

    pub fn get(&self, id: &str) -> Option<&OpenTab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn apply(&mut self, command: TabCommand) -> Option<Navigation> {
        match command {
            TabCommand::Open(info) => self.open_tab(info),
            TabCommand::Activate(id) => self.activate_tab(&id),
            TabCommand::Close(id) => self.close_tab(&id),
            TabCommand::CloseOthers => {
                self.close_other_tabs();
                None
            }
            TabCommand::CloseAll => Some(self.close_all_tabs()),
        }
    }

    /// Opens (or re-activates) a tab and always requests navigation to it.
    pub fn open_tab(&mut self, info: TabDescriptor) -> Option<Navigation> {
        if info.id.is_empty() {
            warn!("open_tab: rejected tab with empty id (title='{}')", info.title);
            return None;
        }

        let path = match self.get(&info.id) {
            Some(existing) => {
                debug!("open_tab: '{}' already open, activating", info.id);
                existing.path.clone()
            }
            None => {
                debug!("open_tab: adding '{}' -> {}", info.id, info.path);
                self.tabs.push(OpenTab::closable(&info));
                info.path.clone()
            }
        };
        self.set_active(info.id);
        Some(Navigation { path })
    }

    /// Activates an already open tab. Unknown ids are ignored.
    pub fn activate_tab(&mut self, id: &str) -> Option<Navigation> {
        let path = self.get(id)?.path.clone();
        self.set_active(id.to_string());
        Some(Navigation { path })
    }

    pub fn close_tab(&mut self, id: &str) -> Option<Navigation> {
        if id == self.home.id {
            debug!("close_tab: home tab '{}' cannot be closed", id);
            return None;
        }
        if !self.contains(id) {
            debug!("close_tab: '{}' is not open", id);
            return None;
        }

        self.tabs.retain(|t| t.id != id);
        if self.active != id {
            // History keeps the id of a closed inactive tab
            return None;
        }

        let next = self
            .history
            .iter()
            .rev()
            .filter(|h| h.as_str() != id)
            .find(|h| self.contains(h))
            .cloned()
            .unwrap_or_else(|| self.home.id.clone());
        debug!("close_tab: '{}' was active, next is '{}'", id, next);

        self.history.retain(|h| h != id);
        self.set_active(next);
        Some(Navigation::to(&self.active_tab().path))
    }

    /// Keeps only the home tab and the active tab.
    pub fn close_other_tabs(&mut self) {
        let home = self.home.id.clone();
        let active = self.active.clone();
        self.tabs.retain(|t| t.id == home || t.id == active);
        self.history = vec![active];
    }

    pub fn close_all_tabs(&mut self) -> Navigation {
        self.tabs = vec![self.home.clone()];
        self.active = self.home.id.clone();
        self.history = vec![self.home.id.clone()];
        Navigation::to(&self.home.path)
    }

    /// Renames an open tab. Returns `false` when the id is not open.
    pub fn update_tab_title(&mut self, id: &str, title: &str) -> bool {
        match self.tabs.iter_mut().find(|t| t.id == id) {
            Some(tab) => {
                tab.title = title.to_string();
                true
            }
            None => false,
        }
    }

    /// Brings the session in line with the current route.
    ///
    /// Returns `true` when the tab list or the active tab changed. Routes with
    /// no registered section leave the session untouched.
    pub fn sync_route(&mut self, path: &str, registry: &TabRegistry) -> bool {
        let route = normalize_path(path);
        let before = (self.tabs.len(), self.active.clone());

        // A tab opened on exactly this route wins over section derivation
        let by_path = self
            .tabs
            .iter()
            .find(|t| normalize_path(&t.path) == route)
            .map(|t| t.id.clone());

        if let Some(id) = by_path {
            self.set_active(id);
        } else {
            match registry.derive(&route) {
                Some(descriptor) if self.contains(&descriptor.id) => {
                    self.set_active(descriptor.id.clone());
                }
                Some(descriptor) => {
                    debug!("sync_route: '{}' opens registered tab '{}'", route, descriptor.id);
                    self.tabs.push(OpenTab::closable(descriptor));
                    self.set_active(descriptor.id.clone());
                }
                None => debug!("sync_route: '{}' has no registered tab", route),
            }
        }

        before != (self.tabs.len(), self.active.clone())
    }

    fn set_active(&mut self, id: String) {
        self.active = id;
        if self.history.last() != Some(&self.active) {
            self.history.push(self.active.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::registry::{derive_tab_from_path, DEFAULT_REGISTRY};

    fn registry() -> TabRegistry {
        TabRegistry::from_toml(DEFAULT_REGISTRY).unwrap()
    }

    fn info(id: &str) -> TabDescriptor {
        TabDescriptor::new(id, id.to_uppercase(), "", format!("/{}", id))
    }

    fn ids(session: &TabSession) -> Vec<&str> {
        session.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    fn assert_invariants(session: &TabSession) {
        assert!(!session.tabs().is_empty());
        assert!(session.contains(session.home_id()));
        assert!(session.contains(session.active_id()));
        assert!(!session.get(session.home_id()).unwrap().closable);
    }

    /// Session with `ids` opened in order (home first).
    fn session_with(ids: &[&str]) -> TabSession {
        let mut session = TabSession::from_registry(&registry());
        for id in ids {
            session.open_tab(info(id));
        }
        session
    }

    #[test]
    fn test_new_session() {
        let session = TabSession::from_registry(&registry());
        assert_eq!(ids(&session), vec!["workbench"]);
        assert_eq!(session.active_id(), "workbench");
        assert_eq!(session.history(), ["workbench"]);
        assert_invariants(&session);
    }

    #[test]
    fn test_open_tab_appends_and_navigates() {
        let mut session = TabSession::from_registry(&registry());
        let nav = session.open_tab(TabDescriptor::new("projects", "Projects", "folder", "/projects"));

        assert_eq!(ids(&session), vec!["workbench", "projects"]);
        assert_eq!(session.active_id(), "projects");
        assert_eq!(nav, Some(Navigation::to("/projects")));
        assert!(session.get("projects").unwrap().closable);
        assert_invariants(&session);
    }

    #[test]
    fn test_open_tab_is_idempotent() {
        let mut session = session_with(&["a", "b"]);
        session.open_tab(info("a"));
        let tabs_after_first = session.tabs().to_vec();
        assert_eq!(session.active_id(), "a");

        // Different payload for the same id: stored path wins, nothing reordered
        let nav = session.open_tab(TabDescriptor::new("a", "Other", "", "/elsewhere"));
        assert_eq!(session.tabs(), tabs_after_first.as_slice());
        assert_eq!(session.active_id(), "a");
        assert_eq!(nav, Some(Navigation::to("/a")));
    }

    #[test]
    fn test_open_tab_rejects_empty_id() {
        let mut session = session_with(&["a"]);
        let before = session.clone();
        assert_eq!(session.open_tab(info("")), None);
        assert_eq!(session, before);
    }

    #[test]
    fn test_close_home_is_noop() {
        let mut session = session_with(&["a", "b"]);
        let before = session.clone();
        assert_eq!(session.close_tab("workbench"), None);
        assert_eq!(session, before);
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut session = session_with(&["a"]);
        let before = session.clone();
        assert_eq!(session.close_tab("missing"), None);
        assert_eq!(session, before);
    }

    #[test]
    fn test_close_active_falls_back_to_history() {
        let mut session = session_with(&["a", "b"]);
        assert_eq!(session.history(), ["workbench", "a", "b"]);
        assert_eq!(session.active_id(), "b");

        let nav = session.close_tab("b");
        assert_eq!(ids(&session), vec!["workbench", "a"]);
        assert_eq!(session.active_id(), "a");
        assert_eq!(session.history(), ["workbench", "a"]);
        assert_eq!(nav, Some(Navigation::to("/a")));
        assert_invariants(&session);
    }

    #[test]
    fn test_close_active_skips_stale_history() {
        let mut session = session_with(&["a", "b", "c"]);
        // Non-active close keeps "b" in history
        session.close_tab("b");
        assert_eq!(session.history(), ["workbench", "a", "b", "c"]);

        session.close_tab("c");
        assert_eq!(session.active_id(), "a");
        assert_eq!(session.history(), ["workbench", "a", "b", "a"]);
        assert_invariants(&session);
    }

    #[test]
    fn test_close_active_without_history_goes_home() {
        let mut session = session_with(&["a", "b"]);
        session.close_other_tabs();
        assert_eq!(session.history(), ["b"]);

        let nav = session.close_tab("b");
        assert_eq!(session.active_id(), "workbench");
        assert_eq!(session.history(), ["workbench"]);
        assert_eq!(nav, Some(Navigation::to("/")));
        assert_invariants(&session);
    }

    #[test]
    fn test_close_inactive_keeps_active_and_history() {
        let mut session = session_with(&["a", "b", "c"]);
        assert_eq!(session.history(), ["workbench", "a", "b", "c"]);

        assert_eq!(session.close_tab("b"), None);
        assert_eq!(ids(&session), vec!["workbench", "a", "c"]);
        assert_eq!(session.active_id(), "c");
        assert_eq!(session.history(), ["workbench", "a", "b", "c"]);
    }

    #[test]
    fn test_close_other_tabs() {
        let mut session = session_with(&["a", "b", "c"]);
        session.activate_tab("b");
        session.close_other_tabs();

        assert_eq!(ids(&session), vec!["workbench", "b"]);
        assert_eq!(session.active_id(), "b");
        assert_eq!(session.history(), ["b"]);
        assert_invariants(&session);
    }

    #[test]
    fn test_close_other_tabs_when_minimal() {
        let mut session = TabSession::from_registry(&registry());
        session.open_tab(TabDescriptor::new("projects", "Projects", "folder", "/projects"));
        session.close_other_tabs();

        assert_eq!(ids(&session), vec!["workbench", "projects"]);
        assert_eq!(session.active_id(), "projects");
        assert_eq!(session.history(), ["projects"]);
    }

    #[test]
    fn test_close_other_tabs_on_home() {
        let mut session = session_with(&["a", "b"]);
        session.activate_tab("workbench");
        session.close_other_tabs();

        assert_eq!(ids(&session), vec!["workbench"]);
        assert_eq!(session.history(), ["workbench"]);
    }

    #[test]
    fn test_close_all_tabs() {
        let mut session = session_with(&["a", "b", "c"]);
        session.close_tab("a");

        let nav = session.close_all_tabs();
        assert_eq!(ids(&session), vec!["workbench"]);
        assert_eq!(session.active_id(), "workbench");
        assert_eq!(session.history(), ["workbench"]);
        assert_eq!(nav, Navigation::to("/"));

        // Already reset: same result
        session.close_all_tabs();
        assert_eq!(session, TabSession::from_registry(&registry()));
    }

    #[test]
    fn test_activate_tab() {
        let mut session = session_with(&["a", "b"]);
        assert_eq!(session.activate_tab("a"), Some(Navigation::to("/a")));
        assert_eq!(session.history(), ["workbench", "a", "b", "a"]);

        // Re-activating the same tab does not repeat history
        session.activate_tab("a");
        assert_eq!(session.history(), ["workbench", "a", "b", "a"]);

        assert_eq!(session.activate_tab("missing"), None);
        assert_eq!(session.active_id(), "a");
    }

    #[test]
    fn test_apply_commands() {
        let mut session = TabSession::from_registry(&registry());
        let nav = session.apply(TabCommand::Open(info("a")));
        assert_eq!(nav, Some(Navigation::to("/a")));
        session.apply(TabCommand::Open(info("b")));
        assert_eq!(session.apply(TabCommand::Activate("a".into())), Some(Navigation::to("/a")));
        assert_eq!(session.apply(TabCommand::CloseOthers), None);
        assert_eq!(ids(&session), vec!["workbench", "a"]);
        assert_eq!(session.apply(TabCommand::Close("a".into())), Some(Navigation::to("/")));
        assert_eq!(session.apply(TabCommand::CloseAll), Some(Navigation::to("/")));
        assert_invariants(&session);
    }

    #[test]
    fn test_update_tab_title() {
        let mut session = session_with(&["a"]);
        assert!(session.update_tab_title("a", "Renamed"));
        assert_eq!(session.get("a").unwrap().title, "Renamed");
        assert!(!session.update_tab_title("missing", "x"));
    }

    #[test]
    fn test_sync_route_opens_registered_section() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);

        assert!(session.sync_route("/projects", &registry));
        assert_eq!(ids(&session), vec!["workbench", "projects"]);
        assert_eq!(session.active_id(), "projects");
        assert_eq!(session.get("projects").unwrap().title, "Projects");
        assert_eq!(session.history(), ["workbench", "projects"]);

        // Same route again: nothing to do
        assert!(!session.sync_route("/projects/", &registry));
        assert_eq!(ids(&session), vec!["workbench", "projects"]);
    }

    #[test]
    fn test_sync_route_custom_and_existing() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        session.sync_route("/funding", &registry);

        assert!(session.sync_route("/funding/applications", &registry));
        assert_eq!(session.active_id(), "funding/applications");
        assert_eq!(
            session.get("funding/applications").unwrap().path,
            "/funding/applications"
        );

        // Unregistered subpage activates its open section
        assert!(session.sync_route("/funding/2024", &registry));
        assert_eq!(session.active_id(), "funding");
        assert_eq!(ids(&session), vec!["workbench", "funding", "funding/applications"]);
    }

    #[test]
    fn test_sync_route_root_activates_home() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        session.sync_route("/ethics", &registry);

        assert!(session.sync_route("/", &registry));
        assert_eq!(session.active_id(), "workbench");
        assert_eq!(session.history(), ["workbench", "ethics", "workbench"]);
    }

    #[test]
    fn test_sync_route_prefers_tab_opened_on_route() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        session.sync_route("/projects", &registry);
        session.open_tab(TabDescriptor::new(
            "project-42",
            "Project #42",
            "folder",
            "/projects/42",
        ));
        session.activate_tab("projects");

        assert!(session.sync_route("/projects/42", &registry));
        assert_eq!(session.active_id(), "project-42");
    }

    #[test]
    fn test_sync_route_unknown_is_noop() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        session.sync_route("/projects", &registry);
        let before = session.clone();

        assert!(!session.sync_route("/settings/profile", &registry));
        assert_eq!(session, before);
    }

    #[test]
    fn test_sync_route_encoded_slash_is_not_a_separator() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        let before = session.clone();

        assert!(!session.sync_route("/projects%2Fnew", &registry));
        assert_eq!(session, before);
        assert!(!session.contains("projects/new"));
    }

    #[test]
    fn test_sync_route_agrees_with_derive_tab_from_path() {
        let registry = registry();
        let routes = [
            "/",
            "/projects",
            "/projects/new",
            "/funding/2024",
            "/ethics/submit?draft=1",
            "/lab-equipment/bookings/",
            "/projects%2Fnew",
            "/settings",
        ];

        for route in routes {
            let mut session = TabSession::from_registry(&registry);
            let before = session.clone();
            let changed = session.sync_route(route, &registry);

            match derive_tab_from_path(route, &registry) {
                Some(derived) => {
                    assert_eq!(session.active_id(), derived.id, "route {}", route);
                    assert_eq!(session.active_tab().path, derived.path, "route {}", route);
                    assert_eq!(changed, derived.id != registry.home_id(), "route {}", route);
                }
                None => {
                    assert!(!changed, "route {}", route);
                    assert_eq!(session, before, "route {}", route);
                }
            }
            assert_invariants(&session);
        }
    }

    #[test]
    fn test_invariants_hold_across_mixed_operations() {
        let registry = registry();
        let mut session = TabSession::from_registry(&registry);
        let commands = vec![
            TabCommand::Open(info("a")),
            TabCommand::Open(info("b")),
            TabCommand::Close("workbench".into()),
            TabCommand::Open(info("c")),
            TabCommand::Activate("a".into()),
            TabCommand::Close("a".into()),
            TabCommand::CloseOthers,
            TabCommand::Close("c".into()),
            TabCommand::Close("b".into()),
            TabCommand::Open(info("d")),
            TabCommand::CloseAll,
        ];
        for command in commands {
            session.apply(command);
            assert_invariants(&session);
        }
        for path in ["/lab-equipment", "/nowhere", "/", "/procurement/requests"] {
            session.sync_route(path, &registry);
            assert_invariants(&session);
        }
    }
}
