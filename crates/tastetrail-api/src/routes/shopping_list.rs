use axum::extract::State;
use serde::Deserialize;

use tastetrail_core::categorize::build_shopping_list;
use tastetrail_core::models::shopping::{ShoppingItemInput, ShoppingList};
use tastetrail_core::scale::scale_recipe;

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::middleware::auth::AuthUser;
use crate::routes::meal_plans::load_meal_plan;
use crate::routes::recipes::resolve_recipes;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    #[serde(default)]
    pub items: Vec<ShoppingItemInput>,
}

#[derive(Debug, Deserialize)]
pub struct ShoppingQuery {
    pub servings: Option<u32>,
}

/// Group free-form items by grocery category.
pub async fn categorize_items(Json(req): Json<CategorizeRequest>) -> Json<ShoppingList> {
    Json(build_shopping_list(&req.items))
}

/// Shopping list for every meal of the caller's plan for `week`.
pub async fn meal_plan_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(week): Path<String>,
    Query(query): Query<ShoppingQuery>,
) -> Result<Json<ShoppingList>, ApiError> {
    let plan = load_meal_plan(&state, &user.id, &week).await?;
    let recipes = resolve_recipes(&state, plan.recipe_ids()).await?;

    let items: Vec<ShoppingItemInput> = recipes
        .iter()
        .map(|recipe| match query.servings {
            Some(servings) => scale_recipe(recipe, servings),
            None => recipe.clone(),
        })
        .flat_map(|recipe| {
            recipe
                .ingredients
                .iter()
                .map(ShoppingItemInput::from)
                .collect::<Vec<_>>()
        })
        .collect();

    tracing::debug!(week = %plan.week, recipes = recipes.len(), items = items.len(), "shopping list built");
    Ok(Json(build_shopping_list(&items)))
}
