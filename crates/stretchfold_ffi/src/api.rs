//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the recipe consumer interface to Dart via FRB.
//! - Own the single process-wide recipe session.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported inside response envelopes, never thrown.
//! - Every call is serialized through the session lock.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use stretchfold_core::{
    core_version as core_version_inner, format_duration_compact, format_duration_long,
    init_logging as init_logging_inner, ping as ping_inner, IngredientSection, Recipe,
    RecipeService, RecipeStep, RecipeStore, SqliteKeyValueStore,
};

const DB_FILE_NAME: &str = "stretchfold_recipes.sqlite3";
const DB_PATH_ENV: &str = "STRETCHFOLD_DB_PATH";

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: Mutex<Option<RecipeService<SqliteKeyValueStore>>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Ingredient group as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientSectionItem {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Recipe step as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStepItem {
    pub step_number: u32,
    pub instruction: String,
    pub duration_minutes: Option<u32>,
}

/// Full recipe as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_time_minutes: u32,
    pub yield_label: Option<String>,
    pub ingredient_sections: Vec<IngredientSectionItem>,
    pub steps: Vec<RecipeStepItem>,
}

/// Snapshot of the session cache and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipesResponse {
    /// Cached recipes in storage order.
    pub items: Vec<RecipeItem>,
    pub loading: bool,
    /// Short user-facing message of the last failed operation.
    pub error: Option<String>,
    /// Diagnostic message.
    pub message: String,
}

impl RecipesResponse {
    fn failure(message: String) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            message,
        }
    }
}

/// Result envelope for mutating recipe calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeActionResponse {
    pub ok: bool,
    pub recipe_id: Option<String>,
    /// For deletes: whether a stored recipe was actually removed.
    pub deleted: bool,
    pub message: String,
}

impl RecipeActionResponse {
    fn success(message: impl Into<String>, recipe_id: Option<String>, deleted: bool) -> Self {
        Self {
            ok: true,
            recipe_id,
            deleted,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            recipe_id: None,
            deleted: false,
            message: message.into(),
        }
    }
}

/// Returns the cached recipe list, opening the session on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn recipes_list() -> RecipesResponse {
    with_session(|service| snapshot(service))
        .unwrap_or_else(|err| RecipesResponse::failure(format!("recipes_list failed: {err}")))
}

/// Reloads the cache from storage and returns it.
#[flutter_rust_bridge::frb(sync)]
pub fn recipes_reload() -> RecipesResponse {
    with_session(|service| {
        service.reload_recipes();
        snapshot(service)
    })
    .unwrap_or_else(|err| RecipesResponse::failure(format!("recipes_reload failed: {err}")))
}

/// Looks one recipe up in the session cache.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_get(id: String) -> Option<RecipeItem> {
    with_session(|service| service.get_recipe_by_id(&id).map(to_recipe_item))
        .ok()
        .flatten()
}

/// Inserts or replaces one recipe by id. The id is stored verbatim.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_save(item: RecipeItem) -> RecipeActionResponse {
    let recipe = from_recipe_item(item);
    let recipe_id = recipe.id.clone();
    match with_session(|service| service.save_recipe(recipe)) {
        Ok(Ok(())) => RecipeActionResponse::success("Recipe saved.", Some(recipe_id), false),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipe_save failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipe_save failed: {err}")),
    }
}

/// Deletes one recipe by id. Deleting an unknown id succeeds with
/// `deleted = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn recipe_delete(id: String) -> RecipeActionResponse {
    match with_session(|service| service.delete_recipe(&id)) {
        Ok(Ok(true)) => RecipeActionResponse::success("Recipe deleted.", Some(id), true),
        Ok(Ok(false)) => RecipeActionResponse::success("Recipe not found.", Some(id), false),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipe_delete failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipe_delete failed: {err}")),
    }
}

/// Removes every stored recipe and reloads the now-empty cache.
///
/// Samples are not re-seeded until the next process start.
#[flutter_rust_bridge::frb(sync)]
pub fn recipes_clear() -> RecipeActionResponse {
    match with_session(|service| {
        service.store().clear_all()?;
        service.reload_recipes();
        Ok::<_, stretchfold_core::StorageError>(())
    }) {
        Ok(Ok(())) => RecipeActionResponse::success("Recipes cleared.", None, false),
        Ok(Err(err)) => RecipeActionResponse::failure(format!("recipes_clear failed: {err}")),
        Err(err) => RecipeActionResponse::failure(format!("recipes_clear failed: {err}")),
    }
}

/// Formats a minute count for display (`compact`: `2h 30m`, otherwise
/// `2 hours 30 minutes`).
#[flutter_rust_bridge::frb(sync)]
pub fn format_duration(minutes: u32, compact: bool) -> String {
    if compact {
        format_duration_compact(minutes)
    } else {
        format_duration_long(minutes)
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_session<T>(
    f: impl FnOnce(&mut RecipeService<SqliteKeyValueStore>) -> T,
) -> Result<T, String> {
    let mut guard = SESSION.lock().map_err(|_| {
        warn!("event=session_lock module=ffi status=error error_code=lock_poisoned");
        "recipe session lock poisoned".to_string()
    })?;

    if guard.is_none() {
        let backend = SqliteKeyValueStore::open(resolve_db_path())
            .map_err(|err| format!("recipe DB open failed: {err}"))?;
        *guard = Some(RecipeService::new(RecipeStore::new(backend)));
    }
    match guard.as_mut() {
        Some(service) => Ok(f(service)),
        None => Err("recipe session unavailable".to_string()),
    }
}

fn snapshot(service: &RecipeService<SqliteKeyValueStore>) -> RecipesResponse {
    let items: Vec<RecipeItem> = service.recipes().iter().map(to_recipe_item).collect();
    let message = match service.error() {
        Some(error) => error.to_string(),
        None => format!("Loaded {} recipe(s).", items.len()),
    };
    RecipesResponse {
        items,
        loading: service.is_loading(),
        error: service.error().map(str::to_string),
        message,
    }
}

fn to_recipe_item(recipe: &Recipe) -> RecipeItem {
    RecipeItem {
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        total_time_minutes: recipe.total_time_minutes,
        yield_label: recipe.yield_label.clone(),
        ingredient_sections: recipe
            .ingredient_sections
            .iter()
            .map(|section| IngredientSectionItem {
                name: section.name.clone(),
                ingredients: section.ingredients.clone(),
            })
            .collect(),
        steps: recipe
            .steps
            .iter()
            .map(|step| RecipeStepItem {
                step_number: step.step_number,
                instruction: step.instruction.clone(),
                duration_minutes: step.duration_minutes,
            })
            .collect(),
    }
}

fn from_recipe_item(item: RecipeItem) -> Recipe {
    Recipe {
        id: item.id,
        name: item.name,
        description: item.description,
        total_time_minutes: item.total_time_minutes,
        yield_label: item.yield_label,
        ingredient_sections: item
            .ingredient_sections
            .into_iter()
            .map(|section| IngredientSection::new(section.name, section.ingredients))
            .collect(),
        steps: item
            .steps
            .into_iter()
            .map(|step| RecipeStep {
                step_number: step.step_number,
                instruction: step.instruction,
                duration_minutes: step.duration_minutes,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, format_duration, from_recipe_item, init_logging, ping, recipe_delete,
        recipe_get, recipe_save, recipes_clear, recipes_list, recipes_reload, to_recipe_item,
        RecipeItem, RecipeStepItem, DB_FILE_NAME, DB_PATH,
    };
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use std::time::{SystemTime, UNIX_EPOCH};
    use stretchfold_core::sample_recipes;
    use tempfile::TempDir;

    static TEST_DB_DIR: OnceLock<TempDir> = OnceLock::new();
    static SESSION_TEST_LOCK: Mutex<()> = Mutex::new(());

    /// Points the session at a private temp database and serializes tests
    /// that share the process-wide session.
    fn session_guard() -> MutexGuard<'static, ()> {
        let dir = TEST_DB_DIR.get_or_init(|| tempfile::tempdir().expect("create temp db dir"));
        DB_PATH.get_or_init(|| dir.path().join(DB_FILE_NAME));
        SESSION_TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn format_duration_switches_style() {
        assert_eq!(format_duration(150, true), "2h 30m");
        assert_eq!(format_duration(150, false), "2 hours 30 minutes");
    }

    #[test]
    fn item_conversion_preserves_recipe() {
        for recipe in sample_recipes() {
            assert_eq!(from_recipe_item(to_recipe_item(&recipe)), recipe);
        }
    }

    #[test]
    fn save_get_and_delete_through_session() {
        let _guard = session_guard();
        let id = unique_id("ffi-recipe");
        let saved = recipe_save(item(&id, "Focaccia"));
        assert!(saved.ok, "{}", saved.message);
        assert_eq!(saved.recipe_id.as_deref(), Some(id.as_str()));

        let listed = recipes_list();
        assert!(listed.items.iter().any(|recipe| recipe.id == id));
        assert!(!listed.loading);

        let loaded = recipe_get(id.clone()).expect("saved recipe should be cached");
        assert_eq!(loaded.name, "Focaccia");
        assert_eq!(loaded.steps[0].duration_minutes, Some(20));

        let deleted = recipe_delete(id.clone());
        assert!(deleted.ok && deleted.deleted, "{}", deleted.message);
        assert!(recipe_get(id.clone()).is_none());

        let again = recipe_delete(id);
        assert!(again.ok);
        assert!(!again.deleted);
    }

    #[test]
    fn save_replaces_existing_entry_in_place() {
        let _guard = session_guard();
        let id = unique_id("ffi-replace");
        assert!(recipe_save(item(&id, "First")).ok);
        assert!(recipe_save(item(&id, "Second")).ok);

        let reloaded = recipes_reload();
        let matches: Vec<&RecipeItem> =
            reloaded.items.iter().filter(|recipe| recipe.id == id).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Second");

        recipe_delete(id);
    }

    #[test]
    fn ids_with_surrounding_whitespace_are_kept_verbatim() {
        let _guard = session_guard();
        let base = unique_id("ffi-padded");
        let padded = format!(" {base} ");
        assert!(recipe_save(item(&base, "Plain")).ok);

        let saved = recipe_save(item(&padded, "Padded"));
        assert!(saved.ok, "{}", saved.message);
        assert_eq!(saved.recipe_id.as_deref(), Some(padded.as_str()));

        let listed = recipes_list();
        assert!(listed.items.iter().any(|r| r.id == base && r.name == "Plain"));
        assert!(listed.items.iter().any(|r| r.id == padded && r.name == "Padded"));
        assert_eq!(recipe_get(padded.clone()).map(|r| r.name).as_deref(), Some("Padded"));

        assert!(recipe_delete(padded.clone()).deleted);
        assert!(recipe_get(padded).is_none());
        assert!(recipe_get(base.clone()).is_some());
        recipe_delete(base);
    }

    #[test]
    fn clear_empties_storage_and_cache() {
        let _guard = session_guard();
        assert!(recipe_save(item(&unique_id("ffi-clear"), "Doomed")).ok);
        assert!(!recipes_list().items.is_empty());

        let cleared = recipes_clear();
        assert!(cleared.ok, "{}", cleared.message);
        let listed = recipes_list();
        assert!(listed.items.is_empty());
        assert_eq!(listed.error, None);
        assert!(!listed.loading);

        let reloaded = recipes_reload();
        assert!(reloaded.items.is_empty());
        assert_eq!(reloaded.error, None);
    }

    fn item(id: &str, name: &str) -> RecipeItem {
        RecipeItem {
            id: id.to_string(),
            name: name.to_string(),
            description: "test".to_string(),
            total_time_minutes: 90,
            yield_label: Some("1 tray".to_string()),
            ingredient_sections: Vec::new(),
            steps: vec![RecipeStepItem {
                step_number: 1,
                instruction: "Bake".to_string(),
                duration_minutes: Some(20),
            }],
        }
    }

    fn unique_id(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
