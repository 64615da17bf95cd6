//! Recipe access facade.
//!
//! # Responsibility
//! - Seed storage once and keep an in-memory copy of the collection.
//! - Resynchronize the copy from durable state after every mutation.
//! - Track loading/error status for consuming views.
//!
//! # Invariants
//! - `error` is cleared at the start of every operation attempt.
//! - After a successful `save_recipe`, or a `delete_recipe` that removed
//!   something, the cache equals the durable collection.
//! - `get_recipe_by_id` never touches storage and may return stale data.

use crate::kv::KeyValueStore;
use crate::model::recipe::Recipe;
use crate::repo::recipe_store::{RecipeStore, StorageResult};
use crate::seed::sample_recipes;
use log::info;

pub const SAVE_ERROR_MESSAGE: &str = "Failed to save recipe";
pub const DELETE_ERROR_MESSAGE: &str = "Failed to delete recipe";

/// Cached view of the recipe collection for one UI session.
///
/// Mutating calls take `&mut self`, so one facade never runs two operations
/// at once. Separate facades over the same medium are not coordinated.
pub struct RecipeService<S: KeyValueStore> {
    store: RecipeStore<S>,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<String>,
}

impl<S: KeyValueStore> RecipeService<S> {
    /// Creates a facade seeded with the built-in sample recipes.
    pub fn new(store: RecipeStore<S>) -> Self {
        Self::with_samples(store, &sample_recipes())
    }

    /// Creates a facade, seeding empty storage with `samples`, then loading.
    pub fn with_samples(store: RecipeStore<S>, samples: &[Recipe]) -> Self {
        let mut service = Self {
            store,
            recipes: Vec::new(),
            loading: true,
            error: None,
        };
        service.store.seed_if_empty(samples);
        service.reload_recipes();
        service
    }

    /// Replaces the cache with the durable collection.
    ///
    /// Reads through the degrading `get_all`: an unreadable collection loads
    /// as empty and leaves `error` clear.
    pub fn reload_recipes(&mut self) {
        self.loading = true;
        self.error = None;
        self.recipes = self.store.get_all();
        info!(
            "event=recipes_reload module=service status=ok count={}",
            self.recipes.len()
        );
        self.loading = false;
    }

    /// Persists `recipe` and reloads the cache from storage.
    ///
    /// On failure the error is recorded and returned; the cache is untouched.
    pub fn save_recipe(&mut self, recipe: Recipe) -> StorageResult<()> {
        self.error = None;
        if let Err(err) = self.store.save(recipe) {
            self.error = Some(SAVE_ERROR_MESSAGE.to_string());
            return Err(err);
        }
        self.reload_recipes();
        Ok(())
    }

    /// Deletes by id; reloads only when something was removed.
    pub fn delete_recipe(&mut self, id: &str) -> StorageResult<bool> {
        self.error = None;
        match self.store.delete_by_id(id) {
            Ok(true) => {
                self.reload_recipes();
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(err) => {
                self.error = Some(DELETE_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Looks `id` up in the cache only.
    pub fn get_recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }
}
