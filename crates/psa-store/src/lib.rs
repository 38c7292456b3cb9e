//! # psa-store
//!
//! The in-memory entity store: authoritative collections for projects and
//! everything they own, with append-only mutations and per-project
//! revision tracking.

pub mod store;

pub use store::*;
