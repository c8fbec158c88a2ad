use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use tastetrail_core::doc_keys;
use tastetrail_core::models::user::{Role, User};
use tastetrail_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller behind a valid `Authorization: Bearer <token>` header.
///
/// Extracting it validates the token and loads the user record, so a
/// handler taking `AuthUser` only runs for callers that still exist.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// An [`AuthUser`] with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.validate(token)?;

        let user: Option<User> =
            documents::try_load_json(&state.store, &doc_keys::user(claims.sub)).await?;
        let user = user.ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))?;

        Ok(AuthUser(user))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Admin {
            tracing::warn!(user_id = %user.id, "admin route refused");
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }
        Ok(AdminUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Access denied".to_string()))?;

    let value = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        return Err(ApiError::Unauthorized("Access denied".to_string()));
    }
    Ok(token)
}
