//! Free-text ingredient parsing.
//!
//! A line like `"2 cups flour"` splits into amount, unit and name. Lines
//! that do not start with a number or fraction keep their whole text as the
//! name, with a default amount of `"1"` and unit of `"piece"`. Parsing
//! never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ingredient::{DEFAULT_AMOUNT, DEFAULT_UNIT, Ingredient, IngredientEntry};

/// Leading number or fraction, an optional single word, then the rest.
/// ASCII classes keep digits and words to `[0-9]` and `[A-Za-z0-9_]`.
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:/[0-9]+)?)\s*([A-Za-z0-9_]+)?\s*(.+)")
        .expect("ingredient pattern is valid")
});

/// Parse one free-text ingredient line.
pub fn parse(raw: &str) -> Ingredient {
    let Some(caps) = INGREDIENT_LINE.captures(raw) else {
        return Ingredient::new(DEFAULT_AMOUNT, DEFAULT_UNIT, raw);
    };

    let amount = caps.get(1).map_or(DEFAULT_AMOUNT, |m| m.as_str());
    let unit = caps.get(2).map_or(DEFAULT_UNIT, |m| m.as_str());
    let name = caps.get(3).map_or(raw, |m| m.as_str());

    Ingredient::new(amount, unit, name)
}

/// Resolve a stored entry to its structured form. Structured entries pass
/// through unchanged.
pub fn resolve(entry: &IngredientEntry) -> Ingredient {
    match entry {
        IngredientEntry::Structured(ingredient) => ingredient.clone(),
        IngredientEntry::RawText(raw) => parse(raw),
    }
}
