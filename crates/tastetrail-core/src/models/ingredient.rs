use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A structured ingredient line, as exposed to clients.
///
/// `amount` stays textual so fractions like `"1/2"` survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ingredient {
    #[serde(default = "default_amount")]
    pub amount: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub name: String,
}

pub const DEFAULT_AMOUNT: &str = "1";

pub const DEFAULT_UNIT: &str = "piece";

fn default_amount() -> String {
    DEFAULT_AMOUNT.to_string()
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl Ingredient {
    pub fn new(
        amount: impl Into<String>,
        unit: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
            name: name.into(),
        }
    }

    /// Render as `"<amount> <unit> <name>"`, the form used on shopping lists.
    pub fn display_text(&self) -> String {
        format!("{} {} {}", self.amount, self.unit, self.name)
            .trim()
            .to_string()
    }
}

/// An ingredient as held by the store: either a free-text line or an
/// already-structured entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    Structured(Ingredient),
    RawText(String),
}

impl From<Ingredient> for IngredientEntry {
    fn from(ingredient: Ingredient) -> Self {
        IngredientEntry::Structured(ingredient)
    }
}

impl From<&str> for IngredientEntry {
    fn from(text: &str) -> Self {
        IngredientEntry::RawText(text.to_string())
    }
}
