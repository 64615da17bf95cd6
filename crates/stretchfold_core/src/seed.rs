//! Built-in sample recipes written once into empty storage.

use crate::model::recipe::{IngredientSection, Recipe, RecipeStep};

/// Returns the three bundled sourdough recipes, ids `1`, `2` and `3`.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![basic_sourdough(), whole_wheat_sourdough(), sourdough_baguettes()]
}

fn basic_sourdough() -> Recipe {
    Recipe::with_id(
        "1",
        "Basic Sourdough Bread",
        "A classic sourdough loaf with a crispy crust and chewy interior. Perfect for beginners.",
        1440,
    )
    .with_yield("1 loaf")
    .with_section(IngredientSection::new(
        "Starter",
        [
            "100g active sourdough starter",
            "100g bread flour",
            "100g water",
        ],
    ))
    .with_section(IngredientSection::new(
        "Dough",
        ["500g bread flour", "350g water", "10g salt"],
    ))
    .with_step(RecipeStep::timed(
        1,
        "Feed your sourdough starter and let it become active (bubbly and doubled in size).",
        240,
    ))
    .with_step(RecipeStep::timed(
        2,
        "Mix the active starter with water in a large bowl until well combined.",
        5,
    ))
    .with_step(RecipeStep::timed(
        3,
        "Add the flour and mix until no dry flour remains. Let rest for 30 minutes (autolyse).",
        30,
    ))
    .with_step(RecipeStep::timed(
        4,
        "Add salt and work it into the dough by folding and kneading for 5 minutes.",
        5,
    ))
    .with_step(RecipeStep::timed(
        5,
        "Perform stretch and folds every 30 minutes for 3-4 hours during bulk fermentation.",
        240,
    ))
    .with_step(RecipeStep::timed(
        6,
        "Shape the dough and place in a proofing basket. Cover and refrigerate overnight.",
        720,
    ))
    .with_step(RecipeStep::timed(
        7,
        "Preheat oven to 450°F (230°C) with a Dutch oven inside for 45 minutes.",
        45,
    ))
    .with_step(RecipeStep::timed(
        8,
        "Score the dough and bake covered for 20 minutes, then uncovered for 25-30 minutes until golden brown.",
        50,
    ))
}

fn whole_wheat_sourdough() -> Recipe {
    Recipe::with_id(
        "2",
        "Whole Wheat Sourdough",
        "A hearty whole wheat sourdough with nutty flavor and dense texture.",
        1500,
    )
    .with_yield("1 loaf")
    .with_section(IngredientSection::new(
        "Dough",
        [
            "150g active sourdough starter",
            "300g whole wheat flour",
            "200g bread flour",
            "350g water",
            "12g salt",
            "30g honey",
        ],
    ))
    .with_step(RecipeStep::timed(
        1,
        "Mix active starter, water, and honey in a bowl until dissolved.",
        5,
    ))
    .with_step(RecipeStep::timed(
        2,
        "Add both flours and mix until combined. Rest for 45 minutes.",
        45,
    ))
    .with_step(RecipeStep::timed(
        3,
        "Add salt and knead into the dough for 10 minutes.",
        10,
    ))
    .with_step(RecipeStep::timed(
        4,
        "Perform stretch and folds every 45 minutes for 4-5 hours.",
        300,
    ))
    .with_step(RecipeStep::timed(
        5,
        "Shape and place in proofing basket. Refrigerate for 12-16 hours.",
        840,
    ))
    .with_step(RecipeStep::timed(
        6,
        "Preheat oven to 450°F with Dutch oven for 45 minutes.",
        45,
    ))
    .with_step(RecipeStep::timed(
        7,
        "Score and bake covered for 25 minutes, uncovered for 30 minutes.",
        55,
    ))
}

fn sourdough_baguettes() -> Recipe {
    Recipe::with_id(
        "3",
        "Sourdough Baguettes",
        "Crispy French-style baguettes with an open crumb structure.",
        960,
    )
    .with_yield("3 baguettes")
    .with_section(IngredientSection::new(
        "Dough",
        [
            "200g active sourdough starter",
            "500g bread flour",
            "320g water",
            "10g salt",
        ],
    ))
    .with_step(RecipeStep::timed(
        1,
        "Mix starter and water, then add flour. Rest for 30 minutes.",
        30,
    ))
    .with_step(RecipeStep::timed(
        2,
        "Add salt and knead for 5 minutes until smooth.",
        5,
    ))
    .with_step(RecipeStep::timed(
        3,
        "Perform 4 sets of stretch and folds, 30 minutes apart.",
        120,
    ))
    .with_step(RecipeStep::timed(
        4,
        "Let dough bulk ferment for 6-8 hours at room temperature.",
        420,
    ))
    .with_step(RecipeStep::timed(
        5,
        "Divide dough into 3 pieces and pre-shape into logs. Rest 20 minutes.",
        20,
    ))
    .with_step(RecipeStep::timed(
        6,
        "Shape into baguettes and place in floured couche. Proof for 2-3 hours.",
        150,
    ))
    .with_step(RecipeStep::timed(
        7,
        "Preheat oven to 475°F with baking stone and steam pan.",
        45,
    ))
    .with_step(RecipeStep::timed(
        8,
        "Score baguettes, add steam, and bake for 20-25 minutes until golden.",
        25,
    ))
}
