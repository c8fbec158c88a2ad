//! tastetrail-api
//!
//! HTTP surface of TasteTrail: an axum router over the document store,
//! served from a TCP listener or an AWS Lambda function.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login))
        // Recipes: reads are public, writes need the author
        .route(
            "/api/recipes",
            get(routes::recipes::list_recipes).post(routes::recipes::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            get(routes::recipes::get_recipe)
                .put(routes::recipes::update_recipe)
                .delete(routes::recipes::delete_recipe),
        )
        .route(
            "/api/recipes/{id}/scaled",
            get(routes::recipes::get_scaled_recipe),
        )
        .route(
            "/api/recipes/{id}/reviews",
            get(routes::reviews::list_reviews).post(routes::reviews::create_review),
        )
        // Users
        .route("/api/user/saved", get(routes::users::saved_ids))
        .route("/api/user/saved/recipes", get(routes::users::saved_recipes))
        .route("/api/user/recipes/save", post(routes::users::save_recipe))
        .route("/api/user/recipes/unsave", post(routes::users::unsave_recipe))
        .route(
            "/api/users/profile",
            get(routes::users::get_profile).put(routes::users::update_profile),
        )
        // Meal plans and shopping lists
        .route(
            "/api/meal-plans/{week}",
            get(routes::meal_plans::get_meal_plan)
                .put(routes::meal_plans::put_meal_plan)
                .delete(routes::meal_plans::delete_meal_plan),
        )
        .route(
            "/api/shopping-list/categorize",
            post(routes::shopping_list::categorize_items),
        )
        .route(
            "/api/shopping-list/{week}",
            get(routes::shopping_list::meal_plan_list),
        )
        // Admin
        .route("/api/admin/recipes", post(routes::admin::create_recipe))
        .route(
            "/api/admin/recipes/{id}",
            put(routes::admin::update_recipe).delete(routes::admin::delete_recipe),
        )
        .route(
            "/api/admin/recipes/{id}/categorize",
            put(routes::admin::categorize_recipe),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
