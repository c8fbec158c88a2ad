use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tastetrail_core::doc_keys;
use tastetrail_core::filter::{self, RecipeFilter, RecipeQueryParams};
use tastetrail_core::models::recipe::{Recipe, RecipeDraft, StoredRecipe, sort_catalogue};
use tastetrail_core::normalize::{normalize, normalize_all};
use tastetrail_core::scale::{scale_recipe, serving_ratio};
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::routes::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub success: bool,
    pub recipe: Recipe,
}

impl RecipeResponse {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            success: true,
            recipe,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScaleQuery {
    pub servings: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ScaledRecipeResponse {
    pub success: bool,
    pub recipe: Recipe,
    pub servings: u32,
    pub ratio: f64,
}

pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeQueryParams>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipe_filter = RecipeFilter::from_params(&params)?;
    let mut stored: Vec<StoredRecipe> =
        documents::list_json(&state.store, doc_keys::RECIPES_PREFIX).await?;
    sort_catalogue(&mut stored);
    let recipes = normalize_all(&stored);

    if recipe_filter.is_empty() {
        return Ok(Json(recipes));
    }
    Ok(Json(filter::filter(&recipes, &recipe_filter)))
}

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let stored = load_recipe(&state, &id).await?;
    Ok(Json(RecipeResponse::new(normalize(&stored))))
}

pub async fn get_scaled_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ScaleQuery>,
) -> Result<Json<ScaledRecipeResponse>, ApiError> {
    let recipe = normalize(&load_recipe(&state, &id).await?);
    let servings = query.servings.unwrap_or(recipe.servings).max(1);
    let ratio = serving_ratio(servings, Some(recipe.servings));

    Ok(Json(ScaledRecipeResponse {
        success: true,
        recipe: scale_recipe(&recipe, servings),
        servings,
        ratio,
    }))
}

pub async fn create_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = insert_recipe(&state, draft, Some(user.id)).await?;
    Ok(Json(RecipeResponse::new(recipe)))
}

pub async fn update_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let existing = load_recipe(&state, &id).await?;
    require_author(&existing, user.id)?;
    let recipe = replace_recipe(&state, existing, draft).await?;
    Ok(Json(RecipeResponse::new(recipe)))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Success>, ApiError> {
    let existing = load_recipe(&state, &id).await?;
    require_author(&existing, user.id)?;
    remove_recipe(&state, &existing.id).await?;
    Ok(Json(Success::ok()))
}

/// Load a stored recipe, mapping unknown or malformed ids to
/// `404 Recipe not found`.
pub async fn load_recipe(state: &AppState, id: &str) -> Result<StoredRecipe, ApiError> {
    fetch_recipe(state, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))
}

/// Load a stored recipe if the id names one.
pub async fn fetch_recipe(state: &AppState, id: &str) -> Result<Option<StoredRecipe>, ApiError> {
    if !doc_keys::is_valid_recipe_id(id) {
        return Ok(None);
    }
    Ok(documents::try_load_json(&state.store, &doc_keys::recipe(id)).await?)
}

/// Canonical recipes for a list of ids, in the given order. Ids that no
/// longer resolve are skipped.
pub async fn resolve_recipes<'a>(
    state: &AppState,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Recipe>, ApiError> {
    let mut recipes = Vec::new();
    for id in ids {
        match fetch_recipe(state, id).await? {
            Some(stored) => recipes.push(normalize(&stored)),
            None => tracing::debug!(recipe_id = %id, "skipping unknown recipe"),
        }
    }
    Ok(recipes)
}

pub(crate) async fn insert_recipe(
    state: &AppState,
    draft: RecipeDraft,
    author: Option<Uuid>,
) -> Result<Recipe, ApiError> {
    draft.validate()?;
    let stored = draft.into_stored(
        Uuid::new_v4().to_string(),
        author,
        Some(jiff::Timestamp::now()),
    );
    documents::save_json(&state.store, &doc_keys::recipe(&stored.id), &stored).await?;
    tracing::info!(recipe_id = %stored.id, "recipe created");
    Ok(normalize(&stored))
}

/// Replace a recipe's content, keeping its id, author and creation time.
pub(crate) async fn replace_recipe(
    state: &AppState,
    existing: StoredRecipe,
    draft: RecipeDraft,
) -> Result<Recipe, ApiError> {
    draft.validate()?;
    let stored = draft.into_stored(existing.id, existing.author, existing.created_at);
    documents::save_json(&state.store, &doc_keys::recipe(&stored.id), &stored).await?;
    tracing::info!(recipe_id = %stored.id, "recipe updated");
    Ok(normalize(&stored))
}

/// Delete a recipe together with its reviews.
pub(crate) async fn remove_recipe(state: &AppState, id: &str) -> Result<(), ApiError> {
    let review_keys = state
        .store
        .list_objects(&doc_keys::reviews_prefix(id))
        .await?;
    for key in &review_keys {
        state.store.delete_object(key).await?;
    }
    state.store.delete_object(&doc_keys::recipe(id)).await?;
    tracing::info!(recipe_id = %id, reviews = review_keys.len(), "recipe deleted");
    Ok(())
}

fn require_author(recipe: &StoredRecipe, user_id: Uuid) -> Result<(), ApiError> {
    if recipe.author == Some(user_id) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only the author can modify this recipe".to_string(),
        ))
    }
}
