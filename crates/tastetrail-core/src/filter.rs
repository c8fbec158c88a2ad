//! Recipe filtering and search.
//!
//! All constraints are optional and conjunctive. Results keep the order of
//! the input collection; an empty result is not an error.

use serde::Deserialize;

use crate::error::CoreError;
use crate::models::recipe::{Diet, Recipe};

/// Raw query-string parameters, as received over HTTP.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQueryParams {
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub prep_time: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Exact match on the diet label.
    pub diet: Option<Diet>,
    /// Exact match on the cuisine label.
    pub cuisine: Option<String>,
    /// Inclusive upper bound on prep time, in minutes.
    pub max_prep_time: Option<u32>,
    /// Case-insensitive substring of the title or of any ingredient name.
    pub search: Option<String>,
}

impl RecipeFilter {
    /// Build a filter from query parameters. Empty values mean "no
    /// constraint"; a `prepTime` that is not a whole number is rejected.
    pub fn from_params(params: &RecipeQueryParams) -> Result<Self, CoreError> {
        let max_prep_time = match given(params.prep_time.as_deref()) {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|_| {
                CoreError::InvalidQuery {
                    param: "prepTime".to_string(),
                    value: raw.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            diet: given(params.diet.as_deref()).map(Diet::parse),
            cuisine: given(params.cuisine.as_deref()).map(str::to_string),
            max_prep_time,
            search: given(params.search.as_deref()).map(str::to_lowercase),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.diet.is_none()
            && self.cuisine.is_none()
            && self.max_prep_time.is_none()
            && self.search.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(diet) = &self.diet
            && recipe.diet != *diet
        {
            return false;
        }
        if let Some(cuisine) = &self.cuisine
            && recipe.cuisine != *cuisine
        {
            return false;
        }
        if let Some(max) = self.max_prep_time
            && recipe.prep_time > max
        {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_title = recipe.title.to_lowercase().contains(&term);
            let in_ingredients = recipe
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&term));
            if !in_title && !in_ingredients {
                return false;
            }
        }
        true
    }
}

/// Keep the recipes that pass every supplied constraint, in input order.
pub fn filter(recipes: &[Recipe], filter: &RecipeFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
