use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tastetrail_auth::password::{hash_password, verify_password};
use tastetrail_core::doc_keys;
use tastetrail_core::models::user::{Role, User, UserProfile, normalize_email};
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, alias = "username")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = req.name.trim().to_string();
    let email = normalize_email(&req.email);
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Name, email and password are required".to_string(),
        ));
    }

    ensure_email_free(&state, &email).await?;

    let cost = state.config.bcrypt_cost;
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost)).await??;

    // Checked again: another registration may have landed while hashing.
    let _guard = state.writes.lock().await;
    ensure_email_free(&state, &email).await?;

    let role = if state.config.is_admin_email(&email) {
        Role::Admin
    } else {
        Role::User
    };

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash,
        role,
        diet: req.diet.unwrap_or_default(),
        allergies: req.allergies,
        cuisines: req.cuisines,
        saved_recipes: Vec::new(),
        created_at: jiff::Timestamp::now(),
    };
    documents::save_json(&state.store, &doc_keys::user(user.id), &user).await?;

    tracing::info!(user_id = %user.id, role = ?user.role, "user registered");

    let token = state.tokens.issue(user.id, user.role)?;
    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = normalize_email(&req.email);
    let user = find_by_email(&state, &email)
        .await?
        .ok_or_else(|| ApiError::BadRequest("User not found".to_string()))?;

    let password = req.password;
    let hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?;
    if !valid {
        tracing::info!(user_id = %user.id, "login refused");
        return Err(ApiError::BadRequest("Invalid credentials".to_string()));
    }

    let token = state.tokens.issue(user.id, user.role)?;
    Ok(Json(AuthResponse {
        token,
        user: user.profile(),
    }))
}

async fn ensure_email_free(state: &AppState, email: &str) -> Result<(), ApiError> {
    if find_by_email(state, email).await?.is_some() {
        return Err(ApiError::BadRequest(
            "User already exists with this email".to_string(),
        ));
    }
    Ok(())
}

async fn find_by_email(state: &AppState, email: &str) -> Result<Option<User>, ApiError> {
    let users: Vec<User> = documents::list_json(&state.store, doc_keys::USERS_PREFIX).await?;
    Ok(users.into_iter().find(|u| u.email == email))
}
