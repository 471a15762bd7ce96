use serde::{Deserialize, Serialize};

/// Registry entry for a section. Also the payload of an "open section" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: String,
    pub title: String,
    /// Icon name resolved by the UI layer
    #[serde(default)]
    pub icon: String,
    pub path: String,
}

impl TabDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTab {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub path: String,
    pub closable: bool,
}

impl OpenTab {
    /// Builds a closable tab from a descriptor.
    pub fn closable(info: &TabDescriptor) -> Self {
        Self {
            id: info.id.clone(),
            title: info.title.clone(),
            icon: info.icon.clone(),
            path: info.path.clone(),
            closable: true,
        }
    }

    /// Builds the permanent home tab.
    pub fn pinned(info: &TabDescriptor) -> Self {
        Self {
            closable: false,
            ..Self::closable(info)
        }
    }
}
