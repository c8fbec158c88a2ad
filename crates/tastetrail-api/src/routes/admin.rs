use axum::extract::State;
use serde::Deserialize;

use tastetrail_core::doc_keys;
use tastetrail_core::models::recipe::RecipeDraft;
use tastetrail_core::normalize::normalize;
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::middleware::auth::AdminUser;
use crate::routes::Success;
use crate::routes::recipes::{RecipeResponse, insert_recipe, load_recipe, remove_recipe, replace_recipe};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub cuisine: String,
}

pub async fn create_recipe(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = insert_recipe(&state, draft, Some(admin.id)).await?;
    Ok(Json(RecipeResponse::new(recipe)))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let existing = load_recipe(&state, &id).await?;
    let recipe = replace_recipe(&state, existing, draft).await?;
    Ok(Json(RecipeResponse::new(recipe)))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<Success>, ApiError> {
    let existing = load_recipe(&state, &id).await?;
    remove_recipe(&state, &existing.id).await?;
    Ok(Json(Success::ok()))
}

/// Reassign a recipe's cuisine.
pub async fn categorize_recipe(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<String>,
    Json(req): Json<CategorizeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let cuisine = req.cuisine.trim().to_string();
    if cuisine.is_empty() {
        return Err(ApiError::BadRequest("cuisine is required".to_string()));
    }

    let mut stored = load_recipe(&state, &id).await?;
    stored.cuisine = Some(cuisine);
    documents::save_json(&state.store, &doc_keys::recipe(&stored.id), &stored).await?;

    tracing::info!(recipe_id = %stored.id, cuisine = ?stored.cuisine, "recipe recategorized");
    Ok(Json(RecipeResponse::new(normalize(&stored))))
}
