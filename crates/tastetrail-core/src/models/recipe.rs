use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::ingredient::{Ingredient, IngredientEntry};
use crate::error::CoreError;

/// Dietary category of a recipe. Unknown labels are kept verbatim in
/// [`Diet::Other`] so the set stays open to extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Diet {
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    GlutenFree,
    #[default]
    Omnivore,
    Other(String),
}

impl Diet {
    pub fn as_str(&self) -> &str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::Keto => "keto",
            Diet::Paleo => "paleo",
            Diet::GlutenFree => "gluten-free",
            Diet::Omnivore => "omnivore",
            Diet::Other(label) => label,
        }
    }

    /// Exact, case-sensitive match against the known labels.
    pub fn parse(label: &str) -> Self {
        match label {
            "vegetarian" => Diet::Vegetarian,
            "vegan" => Diet::Vegan,
            "keto" => Diet::Keto,
            "paleo" => Diet::Paleo,
            "gluten-free" => Diet::GlutenFree,
            "omnivore" => Diet::Omnivore,
            other => Diet::Other(other.to_string()),
        }
    }
}

impl From<String> for Diet {
    fn from(label: String) -> Self {
        Diet::parse(&label)
    }
}

impl From<Diet> for String {
    fn from(diet: Diet) -> Self {
        diet.as_str().to_string()
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instructions as held by the store: a step list, or one block of text
/// with steps separated by `". "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
    Steps(Vec<String>),
    Text(String),
}

impl Default for Instructions {
    fn default() -> Self {
        Instructions::Steps(Vec::new())
    }
}

/// A recipe document exactly as the store holds it.
///
/// Legacy documents use `_id`, `title` and `diet`; newer ones may use
/// `name` and `dietType`. Every field except `id` and `ingredients` may be
/// absent; [`crate::normalize::normalize`] fills the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecipe {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub instructions: Instructions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<Diet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<Diet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Uuid>,
    /// Absent on seeded and legacy documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

impl StoredRecipe {
    /// Ordering within the catalogue: undated documents first, by numeric
    /// id where the id is a number, then dated documents oldest first.
    pub fn catalogue_cmp(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| numeric_id(&self.id).cmp(&numeric_id(&other.id)))
            .then_with(|| self.id.cmp(&other.id))
    }
}

fn numeric_id(id: &str) -> u64 {
    id.parse().unwrap_or(u64::MAX)
}

/// Put stored recipes into catalogue order (see [`StoredRecipe::catalogue_cmp`]).
pub fn sort_catalogue(recipes: &mut [StoredRecipe]) {
    recipes.sort_by(StoredRecipe::catalogue_cmp);
}

/// The canonical recipe shape every client sees.
///
/// `title`/`name` and `diet`/`dietType` carry the same value so that
/// clients written against either field name keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    #[ts(type = "string")]
    pub diet: Diet,
    #[ts(type = "string")]
    pub diet_type: Diet,
    pub cuisine: String,
    pub cook_time: u32,
    pub servings: u32,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Uuid>,
}

impl From<Recipe> for StoredRecipe {
    fn from(recipe: Recipe) -> Self {
        StoredRecipe {
            id: recipe.id,
            title: Some(recipe.title),
            name: Some(recipe.name),
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(IngredientEntry::Structured)
                .collect(),
            instructions: Instructions::Steps(recipe.instructions),
            prep_time: Some(recipe.prep_time),
            diet: Some(recipe.diet),
            diet_type: Some(recipe.diet_type),
            cuisine: Some(recipe.cuisine),
            cook_time: Some(recipe.cook_time),
            servings: Some(recipe.servings),
            description: Some(recipe.description),
            image: Some(recipe.image),
            author: recipe.author,
            created_at: None,
        }
    }
}

/// Client-supplied recipe body for create and update requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(alias = "name")]
    pub title: String,
    pub ingredients: Vec<IngredientEntry>,
    #[serde(default)]
    pub instructions: Instructions,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default, alias = "dietType")]
    pub diet: Option<Diet>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl RecipeDraft {
    /// A draft needs a title; everything else has a default.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::MissingField("title".to_string()));
        }
        Ok(())
    }

    pub fn into_stored(
        self,
        id: String,
        author: Option<Uuid>,
        created_at: Option<jiff::Timestamp>,
    ) -> StoredRecipe {
        StoredRecipe {
            id,
            title: Some(self.title),
            name: None,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            diet: self.diet,
            diet_type: None,
            cuisine: self.cuisine,
            cook_time: self.cook_time,
            servings: self.servings,
            description: self.description,
            image: self.image,
            author,
            created_at,
        }
    }
}
