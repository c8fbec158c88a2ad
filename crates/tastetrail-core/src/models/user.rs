use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A user document as stored. Carries the password hash, so it is never
/// returned to clients directly; see [`UserProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub saved_recipes: Vec<String>,
    pub created_at: jiff::Timestamp,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            diet: self.diet.clone(),
            allergies: self.allergies.clone(),
            cuisines: self.cuisines.clone(),
            saved_recipes: self.saved_recipes.clone(),
            created_at: self.created_at,
        }
    }

    /// Returns `true` if the list changed.
    pub fn save_recipe(&mut self, recipe_id: &str) -> bool {
        if self.saved_recipes.iter().any(|id| id == recipe_id) {
            return false;
        }
        self.saved_recipes.push(recipe_id.to_string());
        true
    }

    /// Returns `true` if the list changed.
    pub fn unsave_recipe(&mut self, recipe_id: &str) -> bool {
        let before = self.saved_recipes.len();
        self.saved_recipes.retain(|id| id != recipe_id);
        self.saved_recipes.len() != before
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub diet: String,
    pub allergies: Vec<String>,
    pub cuisines: Vec<String>,
    pub saved_recipes: Vec<String>,
    pub created_at: jiff::Timestamp,
}

/// Emails compare case-insensitively and ignore surrounding whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
