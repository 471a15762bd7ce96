//! Tab content
//!
//! Contains:
//! - `page` - TabPage wrapper that keeps a tab's content mounted while it is open
//! - `registry` - mapping tab id → View

pub mod page;
pub mod registry;

pub use page::TabPage;
