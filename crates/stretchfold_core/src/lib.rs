//! Core domain logic for the Stretch Fold Repeat recipe tracker.
//! This crate is the single source of truth for recipe storage invariants.

pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::recipe::{
    format_duration_compact, format_duration_long, IngredientSection, Recipe, RecipeId,
    RecipeStep,
};
pub use repo::recipe_store::{RecipeStore, StorageError, StorageResult, RECIPES_STORAGE_KEY};
pub use seed::sample_recipes;
pub use service::recipe_service::{RecipeService, DELETE_ERROR_MESSAGE, SAVE_ERROR_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
