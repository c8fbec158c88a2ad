use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tastetrail_core::doc_keys;
use tastetrail_core::models::review::{RATING_RANGE, Review, ReviewSummary};
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::middleware::auth::AuthUser;
use crate::routes::recipes::load_recipe;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub success: bool,
    pub reviews: Vec<Review>,
    pub summary: ReviewSummary,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub success: bool,
    pub review: Review,
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewListResponse>, ApiError> {
    if !doc_keys::is_valid_recipe_id(&id) {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }
    let reviews = load_reviews(&state, &id).await?;
    let summary = ReviewSummary::from_reviews(&reviews);

    Ok(Json(ReviewListResponse {
        success: true,
        reviews,
        summary,
    }))
}

pub async fn create_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let rating = u8::try_from(req.rating)
        .ok()
        .filter(|r| RATING_RANGE.contains(r))
        .ok_or_else(|| ApiError::BadRequest("Rating must be between 1 and 5".to_string()))?;

    let recipe = load_recipe(&state, &id).await?;

    let _guard = state.writes.lock().await;

    let existing = load_reviews(&state, &recipe.id).await?;
    if existing.iter().any(|r| r.user_id == user.id) {
        return Err(ApiError::BadRequest(
            "You have already reviewed this recipe".to_string(),
        ));
    }

    let review = Review {
        id: Uuid::new_v4(),
        recipe_id: recipe.id.clone(),
        user_id: user.id,
        username: user.name.clone(),
        rating,
        comment: req.comment.unwrap_or_default(),
        photo: req.photo.filter(|p| !p.is_empty()),
        created_at: jiff::Timestamp::now(),
    };
    documents::save_json(&state.store, &doc_keys::review(&recipe.id, review.id), &review).await?;

    tracing::info!(recipe_id = %recipe.id, review_id = %review.id, rating, "review added");
    Ok(Json(ReviewResponse {
        success: true,
        review,
    }))
}

/// Reviews of one recipe, newest first.
async fn load_reviews(state: &AppState, recipe_id: &str) -> Result<Vec<Review>, ApiError> {
    let mut reviews: Vec<Review> =
        documents::list_json(&state.store, &doc_keys::reviews_prefix(recipe_id)).await?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(reviews)
}
