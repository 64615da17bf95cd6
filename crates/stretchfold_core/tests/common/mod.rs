#![allow(dead_code)]

use std::cell::Cell;
use stretchfold_core::{
    IngredientSection, KeyValueStore, KvError, KvResult, MemoryKeyValueStore, Recipe, RecipeStep,
};

/// Memory medium with switchable failures and a write counter.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryKeyValueStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub fail_removes: Cell<bool>,
    pub writes: Cell<usize>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).unwrap()
    }
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> KvResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(KvError::Unavailable("injected read failure".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.get() {
            return Err(KvError::Unavailable("injected write failure".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> KvResult<()> {
        if self.fail_removes.get() {
            return Err(KvError::Unavailable("injected remove failure".to_string()));
        }
        self.inner.remove_item(key)
    }
}

pub fn test_recipe(id: &str) -> Recipe {
    Recipe::with_id(id, "Test Recipe", "A test recipe", 60)
        .with_yield("1 loaf")
        .with_section(IngredientSection::new(
            "Ingredients",
            ["Flour", "Water", "Salt"],
        ))
        .with_step(RecipeStep::timed(1, "Mix ingredients", 10))
}

pub fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.id.as_str()).collect()
}
