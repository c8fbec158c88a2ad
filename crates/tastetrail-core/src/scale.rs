//! Serving-size scaling of ingredient amounts.

use crate::models::ingredient::Ingredient;
use crate::models::recipe::Recipe;

/// Servings assumed when a recipe does not state any.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Ratio between the desired and the original serving count.
///
/// `desired` is clamped to at least one serving. A missing or zero
/// `original` falls back to [`DEFAULT_SERVINGS`].
pub fn serving_ratio(desired: u32, original: Option<u32>) -> f64 {
    let desired = desired.max(1);
    let original = match original {
        Some(n) if n > 0 => n,
        _ => DEFAULT_SERVINGS,
    };
    f64::from(desired) / f64::from(original)
}

/// Rescale an ingredient's amount. Only the amount changes; amounts that are
/// not numeric (`"a pinch"`) are returned untouched.
pub fn scale(ingredient: &Ingredient, ratio: f64) -> Ingredient {
    match parse_amount(&ingredient.amount) {
        Some(value) => Ingredient {
            amount: format_amount(value * ratio),
            ..ingredient.clone()
        },
        None => ingredient.clone(),
    }
}

/// Rescale every ingredient of a recipe to `desired` servings and record the
/// new serving count.
pub fn scale_recipe(recipe: &Recipe, desired: u32) -> Recipe {
    let ratio = serving_ratio(desired, Some(recipe.servings));
    Recipe {
        ingredients: recipe.ingredients.iter().map(|i| scale(i, ratio)).collect(),
        servings: desired.max(1),
        ..recipe.clone()
    }
}

/// Decimal (`"1.5"`) or simple fraction (`"1/2"`) amounts.
pub fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim();
    if amount.is_empty()
        || !amount
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/')
    {
        return None;
    }

    let value = match amount.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.parse().ok()?;
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => amount.parse().ok()?,
    };

    value.is_finite().then_some(value)
}

/// Two decimal places, without trailing zeros or a dangling point:
/// `2.00` → `"2"`, `1.50` → `"1.5"`. Halves round away from zero, so
/// `0.125` → `"0.13"`.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
