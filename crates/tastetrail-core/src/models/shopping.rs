use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::ingredient::Ingredient;

/// Shopping-list aisle. Declaration order is the classification priority
/// and the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Proteins,
    Vegetables,
    Fruits,
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[serde(rename = "Grains & Bread")]
    GrainsAndBread,
    #[serde(rename = "Spices & Seasonings")]
    SpicesAndSeasonings,
    Pantry,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Proteins,
        Category::Vegetables,
        Category::Fruits,
        Category::DairyAndEggs,
        Category::GrainsAndBread,
        Category::SpicesAndSeasonings,
        Category::Pantry,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Proteins => "Proteins",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::DairyAndEggs => "Dairy & Eggs",
            Category::GrainsAndBread => "Grains & Bread",
            Category::SpicesAndSeasonings => "Spices & Seasonings",
            Category::Pantry => "Pantry",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything a client may put on a shopping list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShoppingItemInput {
    Text(String),
    Ingredient {
        #[serde(default)]
        amount: Option<Value>,
        #[serde(default)]
        unit: Option<Value>,
        name: String,
    },
    Labeled {
        text: String,
    },
    Other(Value),
}

impl ShoppingItemInput {
    /// The display text the item is classified and listed under.
    pub fn text(&self) -> String {
        match self {
            ShoppingItemInput::Text(text) => text.clone(),
            ShoppingItemInput::Ingredient { amount, unit, name } => format!(
                "{} {} {}",
                value_text(amount.as_ref()),
                value_text(unit.as_ref()),
                name
            )
            .trim()
            .to_string(),
            ShoppingItemInput::Labeled { text } => text.clone(),
            ShoppingItemInput::Other(value) => value_text(Some(value)),
        }
    }
}

impl From<&Ingredient> for ShoppingItemInput {
    fn from(ingredient: &Ingredient) -> Self {
        ShoppingItemInput::Ingredient {
            amount: Some(Value::String(ingredient.amount.clone())),
            unit: Some(Value::String(ingredient.unit.clone())),
            name: ingredient.name.clone(),
        }
    }
}

impl From<&str> for ShoppingItemInput {
    fn from(text: &str) -> Self {
        ShoppingItemInput::Text(text.to_string())
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingListItem {
    /// Position of the item in the submitted list.
    pub id: usize,
    pub text: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ShoppingListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingList {
    pub categories: Vec<CategoryGroup>,
}

impl ShoppingList {
    pub fn items(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.categories.iter().flat_map(|g| g.items.iter())
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.categories.iter().find(|g| g.category == category)
    }
}
