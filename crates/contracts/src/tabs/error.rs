use thiserror::Error;

/// Errors raised while loading the tab registry configuration.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse tab registry: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("home tab '{0}' is not declared in [[tabs]]")]
    MissingHome(String),

    #[error("home tab must be routed at '/', found '{0}'")]
    HomePath(String),

    #[error("tab entry with title '{0}' has an empty id")]
    EmptyId(String),

    #[error("tab id '{0}' is declared more than once")]
    DuplicateId(String),

    #[error("tab '{id}' has invalid path '{path}' (must start with '/')")]
    InvalidPath { id: String, path: String },

    #[error("custom tab '{key}' must be routed at '/{key}', found '{path}'")]
    CustomKeyPath { key: String, path: String },
}
