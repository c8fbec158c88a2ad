use axum::extract::State;
use serde::{Deserialize, Serialize};

use tastetrail_core::doc_keys;
use tastetrail_core::models::meal_plan::{MealPlan, MealPlanDay, parse_week};
use tastetrail_core::models::recipe::Recipe;
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::middleware::auth::AuthUser;
use crate::routes::Success;
use crate::routes::recipes::resolve_recipes;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default)]
    pub days: Vec<MealPlanDay>,
}

/// A meal plan with each day's meals resolved to canonical recipes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMealPlan {
    pub week: String,
    pub days: Vec<ResolvedDay>,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Serialize)]
pub struct ResolvedDay {
    pub day: String,
    pub meals: Vec<Recipe>,
}

pub async fn put_meal_plan(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(week): Path<String>,
    Json(req): Json<MealPlanRequest>,
) -> Result<Json<MealPlan>, ApiError> {
    let week = parse_week(&week)?;
    let plan = MealPlan {
        user_id: user.id,
        week,
        days: req.days,
        updated_at: jiff::Timestamp::now(),
    };
    documents::save_json(&state.store, &doc_keys::meal_plan(user.id, &plan.week), &plan).await?;

    tracing::info!(user_id = %user.id, week = %plan.week, "meal plan saved");
    Ok(Json(plan))
}

pub async fn get_meal_plan(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(week): Path<String>,
) -> Result<Json<ResolvedMealPlan>, ApiError> {
    let plan = load_meal_plan(&state, &user.id, &week).await?;

    let mut days = Vec::with_capacity(plan.days.len());
    for day in plan.days {
        let meals = resolve_recipes(&state, day.meals.iter().map(String::as_str)).await?;
        days.push(ResolvedDay { day: day.day, meals });
    }

    Ok(Json(ResolvedMealPlan {
        week: plan.week,
        days,
        updated_at: plan.updated_at,
    }))
}

pub async fn delete_meal_plan(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(week): Path<String>,
) -> Result<Json<Success>, ApiError> {
    let plan = load_meal_plan(&state, &user.id, &week).await?;
    state
        .store
        .delete_object(&doc_keys::meal_plan(user.id, &plan.week))
        .await?;
    Ok(Json(Success::ok()))
}

/// The caller's plan for a week; `404 Meal plan not found` when absent.
pub async fn load_meal_plan(
    state: &AppState,
    user_id: &uuid::Uuid,
    week: &str,
) -> Result<MealPlan, ApiError> {
    let week = parse_week(week)?;
    let plan: Option<MealPlan> =
        documents::try_load_json(&state.store, &doc_keys::meal_plan(*user_id, &week)).await?;
    plan.ok_or_else(|| ApiError::NotFound("Meal plan not found".to_string()))
}
