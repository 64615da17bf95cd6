//! Repository layer over the key-value medium.
//!
//! # Responsibility
//! - Own the serialized recipe collection and its storage key.
//! - Isolate JSON encoding and medium access from facade orchestration.
//!
//! # Invariants
//! - The collection is read and written as a whole under one key.
//! - Persisted recipes are unique by id.

pub mod recipe_store;
