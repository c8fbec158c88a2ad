//! Document key conventions.
//!
//! Pure string functions with no storage dependency. These define the canonical
//! layout of JSON documents in the TasteTrail store, whichever backend holds
//! them.

use uuid::Uuid;

pub const RECIPES_PREFIX: &str = "recipes/";

pub const USERS_PREFIX: &str = "users/";

pub fn recipe(id: &str) -> String {
    format!("recipes/{id}.json")
}

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub fn reviews_prefix(recipe_id: &str) -> String {
    format!("reviews/{recipe_id}/")
}

pub fn review(recipe_id: &str, review_id: Uuid) -> String {
    format!("reviews/{recipe_id}/{review_id}.json")
}

pub fn meal_plan(user_id: Uuid, week: &str) -> String {
    format!("meal_plans/{user_id}/{week}.json")
}

/// A recipe id must be usable as a single key segment.
pub fn is_valid_recipe_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
