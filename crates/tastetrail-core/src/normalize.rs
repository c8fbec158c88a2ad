//! Reconciliation of stored recipe documents into the canonical [`Recipe`].
//!
//! Precedence, first present value wins (empty strings and zero counts
//! count as absent):
//!
//! | field        | sources                              | default |
//! |--------------|--------------------------------------|---------|
//! | name / title | `title`, `name`                      | `"Untitled recipe"` |
//! | diet         | `diet`, `dietType`                   | omnivore |
//! | cookTime     | `cookTime`                           | 15 |
//! | servings     | `servings`                           | 4 |
//! | prepTime     | `prepTime`                           | 0 |
//! | description  | `description`                        | synthesized from the name |
//! | image        | `image`, title lookup                | generic fallback |

use crate::images::default_image;
use crate::ingredient;
use crate::models::recipe::{Instructions, Recipe, StoredRecipe};
use crate::scale::DEFAULT_SERVINGS;

pub const DEFAULT_COOK_TIME: u32 = 15;

pub const UNTITLED: &str = "Untitled recipe";

/// Step delimiter inside single-string instructions.
const STEP_DELIMITER: &str = ". ";

/// Produce the canonical shape of a stored recipe. Never fails.
pub fn normalize(stored: &StoredRecipe) -> Recipe {
    let name = non_empty(stored.title.as_deref())
        .or_else(|| non_empty(stored.name.as_deref()))
        .unwrap_or(UNTITLED)
        .to_string();

    let diet = [stored.diet.as_ref(), stored.diet_type.as_ref()]
        .into_iter()
        .flatten()
        .find(|d| !d.as_str().is_empty())
        .cloned()
        .unwrap_or_default();

    let description = non_empty(stored.description.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| synthesize_description(&name));

    let image = non_empty(stored.image.as_deref())
        .unwrap_or_else(|| default_image(&name))
        .to_string();

    Recipe {
        id: stored.id.clone(),
        title: name.clone(),
        ingredients: stored.ingredients.iter().map(ingredient::resolve).collect(),
        instructions: split_instructions(&stored.instructions),
        prep_time: stored.prep_time.unwrap_or(0),
        diet_type: diet.clone(),
        diet,
        cuisine: stored.cuisine.clone().unwrap_or_default(),
        cook_time: positive(stored.cook_time).unwrap_or(DEFAULT_COOK_TIME),
        servings: positive(stored.servings).unwrap_or(DEFAULT_SERVINGS),
        description,
        image,
        author: stored.author,
        name,
    }
}

/// Normalize a whole collection, preserving order.
pub fn normalize_all<'a>(stored: impl IntoIterator<Item = &'a StoredRecipe>) -> Vec<Recipe> {
    stored.into_iter().map(normalize).collect()
}

pub fn synthesize_description(name: &str) -> String {
    format!("Delicious {name} recipe with authentic flavors and easy preparation.")
}

/// Turn stored instructions into a list of non-empty, trimmed,
/// period-terminated steps.
///
/// A single string is split on `". "` first; a list is cleaned step by step
/// without further splitting, so already-clean lists come back unchanged.
pub fn split_instructions(instructions: &Instructions) -> Vec<String> {
    match instructions {
        Instructions::Steps(steps) => steps.iter().filter_map(|s| clean_step(s)).collect(),
        Instructions::Text(text) => text
            .split(STEP_DELIMITER)
            .filter_map(clean_step)
            .collect(),
    }
}

fn clean_step(step: &str) -> Option<String> {
    let step = step.trim();
    if step.is_empty() {
        return None;
    }
    if step.ends_with('.') {
        Some(step.to_string())
    } else {
        Some(format!("{step}."))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}
