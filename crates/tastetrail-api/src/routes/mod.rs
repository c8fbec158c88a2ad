pub mod admin;
pub mod auth;
pub mod health;
pub mod meal_plans;
pub mod recipes;
pub mod reviews;
pub mod shopping_list;
pub mod users;

use serde::Serialize;

/// `{"success": true}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
