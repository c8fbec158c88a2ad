use axum::extract::State;
use serde::{Deserialize, Serialize};

use tastetrail_core::doc_keys;
use tastetrail_core::models::recipe::Recipe;
use tastetrail_core::models::user::{User, UserProfile};
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::routes::Success;
use crate::routes::recipes::{load_recipe, resolve_recipes};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub recipe_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub diet: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub cuisines: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedIdsResponse {
    pub success: bool,
    pub saved_recipes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedRecipesResponse {
    pub success: bool,
    pub recipes: Vec<Recipe>,
}

pub async fn saved_ids(AuthUser(user): AuthUser) -> Json<SavedIdsResponse> {
    Json(SavedIdsResponse {
        success: true,
        saved_recipes: user.saved_recipes,
    })
}

pub async fn saved_recipes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<SavedRecipesResponse>, ApiError> {
    let recipes = resolve_recipes(&state, user.saved_recipes.iter().map(String::as_str)).await?;
    Ok(Json(SavedRecipesResponse {
        success: true,
        recipes,
    }))
}

pub async fn save_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<SaveRecipeRequest>,
) -> Result<Json<Success>, ApiError> {
    let recipe = load_recipe(&state, &req.recipe_id).await?;
    update_user(&state, &user, |u| {
        u.save_recipe(&recipe.id);
    })
    .await?;
    Ok(Json(Success::ok()))
}

pub async fn unsave_recipe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<SaveRecipeRequest>,
) -> Result<Json<Success>, ApiError> {
    update_user(&state, &user, |u| {
        u.unsave_recipe(&req.recipe_id);
    })
    .await?;
    Ok(Json(Success::ok()))
}

pub async fn get_profile(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(user.profile())
}

pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, ApiError> {
    let updated = update_user(&state, &user, |u| {
        if let Some(name) = update.name.map(|n| n.trim().to_string())
            && !name.is_empty()
        {
            u.name = name;
        }
        if let Some(diet) = update.diet {
            u.diet = diet;
        }
        if let Some(allergies) = update.allergies {
            u.allergies = allergies;
        }
        if let Some(cuisines) = update.cuisines {
            u.cuisines = cuisines;
        }
    })
    .await?;
    Ok(Json(updated.profile()))
}

/// Re-read the user record under the write lock, apply `change` and store
/// the result.
async fn update_user(
    state: &AppState,
    user: &User,
    change: impl FnOnce(&mut User),
) -> Result<User, ApiError> {
    let _guard = state.writes.lock().await;
    let key = doc_keys::user(user.id);

    let mut current: User = documents::load_json(&state.store, &key).await?;
    change(&mut current);
    documents::save_json(&state.store, &key, &current).await?;

    Ok(current)
}
