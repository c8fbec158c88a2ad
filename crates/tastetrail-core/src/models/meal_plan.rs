use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One user's plan for one week, keyed by the week's start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MealPlan {
    pub user_id: Uuid,
    pub week: String,
    pub days: Vec<MealPlanDay>,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealPlanDay {
    pub day: String,
    /// Recipe ids, in serving order.
    #[serde(default)]
    pub meals: Vec<String>,
}

impl MealPlan {
    /// Every planned recipe id, day by day. Repeats are kept: a recipe
    /// planned twice is shopped for twice.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .flat_map(|d| d.meals.iter().map(String::as_str))
    }
}

/// Validate a week key (`YYYY-MM-DD`) and return it in canonical form.
pub fn parse_week(week: &str) -> Result<String, CoreError> {
    let date: jiff::civil::Date = week
        .parse()
        .map_err(|_| CoreError::InvalidWeek(week.to_string()))?;
    Ok(date.to_string())
}
