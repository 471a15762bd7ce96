//! Shared contracts for the research portal.
//!
//! Everything here is target-independent so it can be exercised with plain
//! `cargo test` on the host, while the frontend consumes it from wasm.

pub mod tabs;
