//! Section pages rendered inside tabs.

pub mod section;
pub mod workbench;

pub use section::SectionPage;
pub use workbench::WorkbenchPage;
