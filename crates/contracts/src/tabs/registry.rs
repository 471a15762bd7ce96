//! Tab registry - the static table of sections that can be opened as tabs.
//!
//! The table is configuration: an embedded TOML document with the home id,
//! the top-level sections (`[[tabs]]`) and sections addressed by a
//! multi-segment path (`[[custom_tabs]]`, keyed by the joined path).

use super::descriptor::TabDescriptor;
use super::error::RegistryError;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

/// Registry embedded in the binary
pub const DEFAULT_REGISTRY: &str = r#"
home = "workbench"

[[tabs]]
id = "workbench"
title = "Workbench"
icon = "home"
path = "/"

[[tabs]]
id = "projects"
title = "Projects"
icon = "folder"
path = "/projects"

[[tabs]]
id = "funding"
title = "Funding"
icon = "coins"
path = "/funding"

[[tabs]]
id = "ethics"
title = "Ethics Review"
icon = "shield"
path = "/ethics"

[[tabs]]
id = "achievements"
title = "Achievements"
icon = "award"
path = "/achievements"

[[tabs]]
id = "procurement"
title = "Procurement"
icon = "cart"
path = "/procurement"

[[tabs]]
id = "lab-equipment"
title = "Lab Equipment"
icon = "flask"
path = "/lab-equipment"

[[custom_tabs]]
key = "projects/new"
title = "New Project"
icon = "plus"
path = "/projects/new"

[[custom_tabs]]
key = "funding/applications"
title = "Funding Applications"
icon = "file"
path = "/funding/applications"

[[custom_tabs]]
key = "ethics/submit"
title = "Submit for Ethics Review"
icon = "shield"
path = "/ethics/submit"

[[custom_tabs]]
key = "procurement/requests"
title = "Purchase Requests"
icon = "cart"
path = "/procurement/requests"

[[custom_tabs]]
key = "lab-equipment/bookings"
title = "Equipment Bookings"
icon = "flask"
path = "/lab-equipment/bookings"
"#;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    home: String,
    #[serde(default)]
    tabs: Vec<TabDescriptor>,
    #[serde(default)]
    custom_tabs: Vec<CustomTabEntry>,
}

#[derive(Debug, Deserialize)]
struct CustomTabEntry {
    key: String,
    title: String,
    #[serde(default)]
    icon: String,
    path: String,
}

impl From<CustomTabEntry> for TabDescriptor {
    fn from(entry: CustomTabEntry) -> Self {
        TabDescriptor {
            id: entry.key,
            title: entry.title,
            icon: entry.icon,
            path: entry.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    home: TabDescriptor,
    tabs: Vec<TabDescriptor>,
    custom: Vec<TabDescriptor>,
}

impl TabRegistry {
    /// Parses and validates a registry document.
    pub fn from_toml(source: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(source)?;
        let custom: Vec<TabDescriptor> = file.custom_tabs.into_iter().map(Into::into).collect();

        {
            let mut seen = HashSet::new();
            for entry in file.tabs.iter().chain(custom.iter()) {
                if entry.id.trim().is_empty() {
                    return Err(RegistryError::EmptyId(entry.title.clone()));
                }
                if !seen.insert(entry.id.as_str()) {
                    return Err(RegistryError::DuplicateId(entry.id.clone()));
                }
                if !entry.path.starts_with('/') {
                    return Err(RegistryError::InvalidPath {
                        id: entry.id.clone(),
                        path: entry.path.clone(),
                    });
                }
            }
        }

        // Custom keys double as their route
        if let Some(entry) = custom
            .iter()
            .find(|c| route_segments(&c.path).join("/") != c.id)
        {
            return Err(RegistryError::CustomKeyPath {
                key: entry.id.clone(),
                path: entry.path.clone(),
            });
        }

        let home = file
            .tabs
            .iter()
            .find(|t| t.id == file.home)
            .cloned()
            .ok_or_else(|| RegistryError::MissingHome(file.home.clone()))?;
        if home.path != "/" {
            return Err(RegistryError::HomePath(home.path));
        }

        Ok(Self {
            home,
            tabs: file.tabs,
            custom,
        })
    }

    pub fn home(&self) -> &TabDescriptor {
        &self.home
    }

    pub fn home_id(&self) -> &str {
        &self.home.id
    }

    /// Top-level sections in declaration order.
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Multi-segment sections in declaration order.
    pub fn custom_tabs(&self) -> &[TabDescriptor] {
        &self.custom
    }

    pub fn get(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_custom(&self, key: &str) -> Option<&TabDescriptor> {
        self.custom.iter().find(|t| t.id == key)
    }

    /// Looks an id up in the static table first, then in the custom table.
    pub fn lookup(&self, id: &str) -> Option<&TabDescriptor> {
        self.get(id).or_else(|| self.get_custom(id))
    }

    /// Candidate section id for a route.
    ///
    /// Root maps to the home id. A multi-segment path whose joined form is a
    /// custom key maps to that key; anything else maps to its first segment.
    pub fn section_id_for_path(&self, path: &str) -> String {
        let segments = route_segments(path);
        let Some(first) = segments.first() else {
            return self.home.id.clone();
        };
        if segments.len() > 1 {
            let joined = segments.join("/");
            if self.get_custom(&joined).is_some() {
                return joined;
            }
        }
        first.clone()
    }

    /// Registry entry a route belongs to, if any.
    pub fn derive(&self, path: &str) -> Option<&TabDescriptor> {
        let id = self.section_id_for_path(path);
        if id == self.home.id {
            return Some(&self.home);
        }
        self.lookup(&id)
    }
}

/// Pure route-to-tab derivation used by the route synchronizer.
pub fn derive_tab_from_path(path: &str, registry: &TabRegistry) -> Option<TabDescriptor> {
    registry.derive(path).cloned()
}

/// Splits a route into decoded, non-empty path segments.
///
/// Query string and fragment are ignored. A segment whose decoded form would
/// contain `/` is kept encoded so it never acts as a separator.
pub fn route_segments(path: &str) -> Vec<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match urlencoding::decode(s) {
            Ok(decoded) if !decoded.contains('/') => decoded.into_owned(),
            _ => s.to_string(),
        })
        .collect()
}

/// Canonical form of a route: `/` followed by decoded segments.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", route_segments(path).join("/"))
}

/// Loads the tab registry.
///
/// Uses `source` when given (an override document), otherwise the embedded
/// default.
pub fn load_registry(source: Option<&str>) -> anyhow::Result<TabRegistry> {
    match source {
        Some(doc) => {
            log::info!("Loading tab registry from override document");
            TabRegistry::from_toml(doc).context("invalid tab registry override")
        }
        None => {
            log::info!("Using default embedded tab registry");
            TabRegistry::from_toml(DEFAULT_REGISTRY).context("invalid embedded tab registry")
        }
    }
}
