//! Shopping-list categorization by keyword matching.
//!
//! Item text is lower-cased and checked against each category's keywords in
//! [`Category::ALL`] order; the first category with a keyword contained in
//! the text wins. Containment is plain substring matching, so `"pineapple"`
//! counts as apple. Overlaps always resolve to the earlier category:
//! `"chicken broth"` is a protein, never pantry.

use crate::models::shopping::{
    Category, CategoryGroup, ShoppingItemInput, ShoppingList, ShoppingListItem,
};

const PROTEINS: &[&str] = &[
    "chicken", "beef", "pork", "salmon", "fish", "turkey", "lamb", "bacon", "eggs",
];

const VEGETABLES: &[&str] = &[
    "tomato", "onion", "garlic", "bell pepper", "cucumber", "lettuce", "spinach", "broccoli",
    "carrot", "asparagus", "zucchini", "kale",
];

const FRUITS: &[&str] = &["avocado", "lemon", "lime", "berries", "apple", "banana"];

const DAIRY_AND_EGGS: &[&str] = &[
    "cheese", "milk", "cream", "yogurt", "butter", "ricotta", "mozzarella", "parmesan", "feta",
];

const GRAINS_AND_BREAD: &[&str] = &[
    "quinoa", "rice", "bread", "pasta", "flour", "dough", "shells", "pita",
];

const SPICES_AND_SEASONINGS: &[&str] = &[
    "salt", "pepper", "cumin", "paprika", "oregano", "basil", "thyme", "rosemary",
    "garam masala", "turmeric", "chili", "herbs", "seasoning", "spice",
];

const PANTRY: &[&str] = &[
    "oil", "vinegar", "sauce", "broth", "stock", "honey", "maple syrup", "cocoa", "vanilla",
];

/// Keywords for a category. [`Category::Other`] has none: it is the
/// fallback.
///
/// Vegetables only claim `"bell pepper"`; any other pepper is a seasoning.
pub fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Proteins => PROTEINS,
        Category::Vegetables => VEGETABLES,
        Category::Fruits => FRUITS,
        Category::DairyAndEggs => DAIRY_AND_EGGS,
        Category::GrainsAndBread => GRAINS_AND_BREAD,
        Category::SpicesAndSeasonings => SPICES_AND_SEASONINGS,
        Category::Pantry => PANTRY,
        Category::Other => &[],
    }
}

/// Classify rendered item text.
pub fn categorize_text(text: &str) -> Category {
    let lower = text.to_lowercase();
    Category::ALL
        .into_iter()
        .find(|c| keywords(*c).iter().any(|k| lower.contains(k)))
        .unwrap_or(Category::Other)
}

/// Classify any shopping-list input.
pub fn categorize(item: &ShoppingItemInput) -> Category {
    categorize_text(&item.text())
}

/// Classify every item and group them in category order. Item ids are their
/// positions in `items`; empty categories are left out.
pub fn build_shopping_list(items: &[ShoppingItemInput]) -> ShoppingList {
    let classified: Vec<ShoppingListItem> = items
        .iter()
        .enumerate()
        .map(|(id, item)| {
            let text = item.text();
            let category = categorize_text(&text);
            ShoppingListItem { id, text, category }
        })
        .collect();

    let categories = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let items: Vec<ShoppingListItem> = classified
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();
            (!items.is_empty()).then_some(CategoryGroup { category, items })
        })
        .collect();

    ShoppingList { categories }
}
