use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Review {
    pub id: Uuid,
    pub recipe_id: String,
    pub user_id: Uuid,
    pub username: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    /// Photo URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewSummary {
    pub count: usize,
    /// Mean rating rounded to one decimal; `0.0` with no reviews.
    pub average_rating: f64,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self {
                count: 0,
                average_rating: 0.0,
            };
        }
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(total) / reviews.len() as f64;
        Self {
            count: reviews.len(),
            average_rating: (mean * 10.0).round() / 10.0,
        }
    }
}
