//! Recipe domain model.
//!
//! # Responsibility
//! - Define the recipe document persisted as one JSON array.
//! - Provide duration formatting used by list and detail projections.
//!
//! # Invariants
//! - `id` is supplied by the caller and never rewritten by storage.
//! - Recipes change only by full replacement; there are no field patches.
//! - Step numbers are 1-indexed but not validated here or in storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied recipe identifier.
pub type RecipeId = String;

/// Named group of ingredient lines, e.g. "Starter" or "Dough".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSection {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl IngredientSection {
    pub fn new<I, T>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// One timed instruction in a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// 1-indexed position; expected contiguous but unchecked.
    pub step_number: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl RecipeStep {
    pub fn new(step_number: u32, instruction: impl Into<String>) -> Self {
        Self {
            step_number,
            instruction: instruction.into(),
            duration_minutes: None,
        }
    }

    pub fn timed(step_number: u32, instruction: impl Into<String>, minutes: u32) -> Self {
        Self {
            duration_minutes: Some(minutes),
            ..Self::new(step_number, instruction)
        }
    }
}

/// Complete recipe document.
///
/// Serialized with camelCase field names; `yield` is a reserved word in Rust
/// and is mapped from `yield_label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub total_time_minutes: u32,
    pub ingredient_sections: Vec<IngredientSection>,
    pub steps: Vec<RecipeStep>,
    /// Optional yield label such as "1 loaf" or "3 baguettes".
    #[serde(rename = "yield", default, skip_serializing_if = "Option::is_none")]
    pub yield_label: Option<String>,
}

impl Recipe {
    /// Creates an empty recipe with a freshly minted UUID v4 id.
    ///
    /// For UI flows that create a recipe from scratch; storage itself never
    /// generates ids.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        total_time_minutes: u32,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            name,
            description,
            total_time_minutes,
        )
    }

    /// Creates an empty recipe with a caller-provided id.
    pub fn with_id(
        id: impl Into<RecipeId>,
        name: impl Into<String>,
        description: impl Into<String>,
        total_time_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            total_time_minutes,
            ingredient_sections: Vec::new(),
            steps: Vec::new(),
            yield_label: None,
        }
    }

    pub fn with_yield(mut self, label: impl Into<String>) -> Self {
        self.yield_label = Some(label.into());
        self
    }

    pub fn with_section(mut self, section: IngredientSection) -> Self {
        self.ingredient_sections.push(section);
        self
    }

    pub fn with_step(mut self, step: RecipeStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Sum of the step durations that are present, saturating at `u32::MAX`.
    ///
    /// Independent from `total_time_minutes`, which is authored separately
    /// and may include idle time between steps.
    pub fn steps_total_minutes(&self) -> u32 {
        self.steps
            .iter()
            .filter_map(|step| step.duration_minutes)
            .fold(0, u32::saturating_add)
    }
}

/// Formats minutes for detail views: `45 minutes`, `1 hour`, `2 hours 30 minutes`.
pub fn format_duration_long(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    let unit = if hours > 1 { "hours" } else { "hour" };
    if rest == 0 {
        format!("{hours} {unit}")
    } else {
        format!("{hours} {unit} {rest} minutes")
    }
}

/// Formats minutes for list cards: `45m`, `2h`, `2h 30m`.
pub fn format_duration_compact(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}m")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_duration_compact, format_duration_long, IngredientSection, Recipe, RecipeStep,
    };

    #[test]
    fn long_format_pluralizes_hours() {
        assert_eq!(format_duration_long(45), "45 minutes");
        assert_eq!(format_duration_long(60), "1 hour");
        assert_eq!(format_duration_long(1440), "24 hours");
        assert_eq!(format_duration_long(90), "1 hour 30 minutes");
        assert_eq!(format_duration_long(150), "2 hours 30 minutes");
    }

    #[test]
    fn compact_format_drops_zero_minutes() {
        assert_eq!(format_duration_compact(5), "5m");
        assert_eq!(format_duration_compact(960), "16h");
        assert_eq!(format_duration_compact(1500), "25h");
        assert_eq!(format_duration_compact(125), "2h 5m");
    }

    #[test]
    fn new_mints_distinct_ids() {
        let first = Recipe::new("a", "", 0);
        let second = Recipe::new("a", "", 0);
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let recipe = Recipe::with_id("test-1", "Test Recipe", "A test recipe", 60)
            .with_yield("1 loaf")
            .with_section(IngredientSection::new("Ingredients", ["Flour", "Water"]))
            .with_step(RecipeStep::timed(1, "Mix ingredients", 10))
            .with_step(RecipeStep::new(2, "Rest"));

        let value = serde_json::to_value(&recipe).expect("serialize recipe");
        assert_eq!(value["totalTimeMinutes"], 60);
        assert_eq!(value["yield"], "1 loaf");
        assert_eq!(value["ingredientSections"][0]["name"], "Ingredients");
        assert_eq!(value["steps"][0]["stepNumber"], 1);
        assert_eq!(value["steps"][0]["durationMinutes"], 10);
        assert!(value["steps"][1].get("durationMinutes").is_none());
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "id": "x",
            "name": "Plain",
            "description": "",
            "totalTimeMinutes": 0,
            "ingredientSections": [],
            "steps": [{"stepNumber": 1, "instruction": "Bake"}]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).expect("parse recipe");
        assert_eq!(recipe.yield_label, None);
        assert_eq!(recipe.steps[0].duration_minutes, None);
    }

    #[test]
    fn steps_total_ignores_untimed_steps() {
        let recipe = Recipe::with_id("r", "n", "d", 100)
            .with_step(RecipeStep::timed(1, "a", 30))
            .with_step(RecipeStep::new(2, "b"))
            .with_step(RecipeStep::timed(3, "c", 15));
        assert_eq!(recipe.steps_total_minutes(), 45);
    }

    #[test]
    fn steps_total_saturates_instead_of_overflowing() {
        let recipe = Recipe::with_id("r", "n", "d", 0)
            .with_step(RecipeStep::timed(1, "a", u32::MAX))
            .with_step(RecipeStep::timed(2, "b", 10));
        assert_eq!(recipe.steps_total_minutes(), u32::MAX);
    }
}
