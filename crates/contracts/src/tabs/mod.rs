//! Tab session management
//!
//! Contains:
//! - `descriptor` - registry entries and open tab records
//! - `registry` - the section table and route-to-section derivation
//! - `session` - the tab session state machine (open / close / history)
//! - `error` - registry loading errors

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod session;

pub use descriptor::{OpenTab, TabDescriptor};
pub use error::RegistryError;
pub use registry::{
    derive_tab_from_path, load_registry, normalize_path, route_segments, TabRegistry,
    DEFAULT_REGISTRY,
};
pub use session::{Navigation, TabCommand, TabSession};
