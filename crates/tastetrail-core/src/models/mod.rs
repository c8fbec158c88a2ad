pub mod ingredient;
pub mod meal_plan;
pub mod recipe;
pub mod review;
pub mod shopping;
pub mod user;
