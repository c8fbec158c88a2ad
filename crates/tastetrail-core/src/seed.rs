//! The built-in recipe catalogue, written to an empty store on first start.
//!
//! Entries are kept in the legacy document shape (`_id`, `title`, `diet`,
//! free-text ingredients, single-string instructions) and go through the
//! normalizer like any other stored recipe.

use crate::error::CoreError;
use crate::models::recipe::StoredRecipe;

const SEED_RECIPES_JSON: &str = include_str!("../data/seed_recipes.json");

pub fn seed_recipes() -> Result<Vec<StoredRecipe>, CoreError> {
    Ok(serde_json::from_str(SEED_RECIPES_JSON)?)
}
