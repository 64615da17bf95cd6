//! Recipe store: whole-collection CRUD under a single storage key.
//!
//! # Responsibility
//! - Persist the full recipe collection as one JSON array.
//! - Expose create/read/update/delete and one-time seeding.
//!
//! # Invariants
//! - Entries are unique by id; `save` replaces in place, preserving position.
//! - Read paths degrade to "no data"; write paths surface `StorageError`.
//! - Read-modify-write spans are not transactional. Two writers that read the
//!   same snapshot race, and the last write wins.

use crate::kv::{KeyValueStore, KvError};
use crate::model::recipe::Recipe;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized recipe collection.
pub const RECIPES_STORAGE_KEY: &str = "@stretchfoldrepeat:recipes";

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure of a recipe store operation.
#[derive(Debug)]
pub enum StorageError {
    /// The key-value medium failed to read, write or remove.
    Backend(KvError),
    /// The stored document is not a valid recipe array, or a recipe could
    /// not be encoded.
    Serialization(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "invalid recipe document: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<KvError> for StorageError {
    fn from(value: KvError) -> Self {
        Self::Backend(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Recipe persistence over an explicit key-value medium handle.
pub struct RecipeStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> RecipeStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Returns the underlying medium.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Reads the full collection, reporting every failure.
    ///
    /// An absent key is not a failure and yields an empty collection.
    pub fn try_get_all(&self) -> StorageResult<Vec<Recipe>> {
        match self.backend.get_item(RECIPES_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Reads the full collection, degrading any failure to empty.
    ///
    /// Callers cannot tell an empty collection from a failed read; use
    /// `try_get_all` where the distinction matters.
    pub fn get_all(&self) -> Vec<Recipe> {
        self.try_get_all().unwrap_or_else(|err| {
            warn!("event=recipes_load module=store status=degraded error={err}");
            Vec::new()
        })
    }

    /// Returns the first recipe with `id`, or `None`. Read failures read as
    /// not found.
    pub fn get_by_id(&self, id: &str) -> Option<Recipe> {
        self.get_all().into_iter().find(|recipe| recipe.id == id)
    }

    /// Inserts or replaces `recipe` by id and persists the whole collection.
    ///
    /// Replacement keeps the entry's position; a new id is appended.
    pub fn save(&self, recipe: Recipe) -> StorageResult<Recipe> {
        let result = self.try_get_all().and_then(|mut recipes| {
            match recipes.iter().position(|existing| existing.id == recipe.id) {
                Some(index) => recipes[index] = recipe.clone(),
                None => recipes.push(recipe.clone()),
            }
            self.write_all(&recipes)?;
            Ok(recipes.len())
        });

        match result {
            Ok(count) => {
                info!(
                    "event=recipe_save module=store status=ok recipe_id={} count={count}",
                    recipe.id
                );
                Ok(recipe)
            }
            Err(err) => {
                error!(
                    "event=recipe_save module=store status=error recipe_id={} error={err}",
                    recipe.id
                );
                Err(err)
            }
        }
    }

    /// Removes every entry with `id`.
    ///
    /// Reads through the degrading `get_all`, so an unreadable collection
    /// matches nothing. Returns `Ok(false)` without writing when nothing
    /// matched; only the write can fail.
    pub fn delete_by_id(&self, id: &str) -> StorageResult<bool> {
        let recipes = self.get_all();
        let before = recipes.len();
        let remaining: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| recipe.id != id)
            .collect();
        let result = if remaining.len() == before {
            Ok(false)
        } else {
            self.write_all(&remaining).map(|()| true)
        };

        match &result {
            Ok(deleted) => info!(
                "event=recipe_delete module=store status=ok recipe_id={id} deleted={deleted}"
            ),
            Err(err) => error!(
                "event=recipe_delete module=store status=error recipe_id={id} error={err}"
            ),
        }
        result
    }

    /// Writes `samples` verbatim when, and only when, the collection is empty.
    ///
    /// Best effort: failures are logged and swallowed so startup never aborts.
    pub fn seed_if_empty(&self, samples: &[Recipe]) {
        let result = self.try_get_all().and_then(|existing| {
            if !existing.is_empty() {
                return Ok(false);
            }
            self.write_all(samples)?;
            Ok(true)
        });

        match result {
            Ok(true) => info!(
                "event=recipes_seed module=store status=ok count={}",
                samples.len()
            ),
            Ok(false) => debug!("event=recipes_seed module=store status=skipped reason=not_empty"),
            Err(err) => warn!("event=recipes_seed module=store status=error error={err}"),
        }
    }

    /// Removes the storage key entirely.
    ///
    /// Later reads take the absent-key path and return empty.
    pub fn clear_all(&self) -> StorageResult<()> {
        match self.backend.remove_item(RECIPES_STORAGE_KEY) {
            Ok(()) => {
                info!("event=recipes_clear module=store status=ok");
                Ok(())
            }
            Err(err) => {
                error!("event=recipes_clear module=store status=error error={err}");
                Err(err.into())
            }
        }
    }

    fn write_all(&self, recipes: &[Recipe]) -> StorageResult<()> {
        let raw = serde_json::to_string(recipes)?;
        self.backend.set_item(RECIPES_STORAGE_KEY, &raw)?;
        Ok(())
    }
}
