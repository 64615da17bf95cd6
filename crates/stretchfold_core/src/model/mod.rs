//! Recipe domain model.
//!
//! # Invariants
//! - Every recipe is identified by a caller-supplied string id.
//! - Deletion is a hard removal from the collection; no tombstones are kept.

pub mod recipe;
