//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `stretchfold_core` linkage without the Flutter runtime.
//! - Print the seeded sample collection from a throwaway in-memory store.

use stretchfold_core::{format_duration_compact, RecipeService, RecipeStore, SqliteKeyValueStore};

fn main() {
    println!("stretchfold_core ping={}", stretchfold_core::ping());
    println!("stretchfold_core version={}", stretchfold_core::core_version());

    let backend = match SqliteKeyValueStore::open_in_memory() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("stretchfold_core store open failed: {err}");
            std::process::exit(1);
        }
    };
    let service = RecipeService::new(RecipeStore::new(backend));
    for recipe in service.recipes() {
        println!(
            "recipe id={} steps={} total={} name={}",
            recipe.id,
            recipe.steps.len(),
            format_duration_compact(recipe.total_time_minutes),
            recipe.name
        );
    }
}
