//! Default recipe images, keyed by recipe title.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1546548970-71785318a17b?w=500";

static DEFAULT_IMAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Mediterranean Quinoa Salad",
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=500",
        ),
        (
            "Classic Margherita Pizza",
            "https://images.unsplash.com/photo-1604382354936-07c5d9983bd3?w=500",
        ),
        (
            "Creamy Mushroom Risotto",
            "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=500",
        ),
        (
            "Indian Paneer Butter Masala",
            "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=500",
        ),
        (
            "Vegan Chocolate Avocado Mousse",
            "https://images.unsplash.com/photo-1551024506-0bccd828d307?w=500",
        ),
        (
            "Vegan Buddha Bowl",
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=500",
        ),
        (
            "Vegan Lentil Curry",
            "https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd?w=500",
        ),
        (
            "Keto Salmon with Asparagus",
            "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=500",
        ),
        (
            "Keto Chicken Alfredo Zucchini Noodles",
            "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=500",
        ),
        (
            "Keto Avocado Bacon Salad",
            "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=500",
        ),
        (
            "Paleo Grilled Chicken with Sweet Potato",
            "https://images.unsplash.com/photo-1598515213345-d710d121c709?w=500",
        ),
        (
            "Paleo Beef and Vegetable Stir Fry",
            "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=500",
        ),
        (
            "Gluten-Free Chicken Parmesan",
            "https://images.unsplash.com/photo-1632778149955-e80f8ceca2e8?w=500",
        ),
        (
            "Gluten-Free Quinoa Stuffed Bell Peppers",
            "https://images.unsplash.com/photo-1563379091339-03246cea421d?w=500",
        ),
        (
            "Spicy Thai Basil Stir Fry",
            "https://images.unsplash.com/photo-1559847844-d724c5632a85?w=500",
        ),
        (
            "Classic Beef Tacos",
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=500",
        ),
        (
            "Honey Garlic Pork Chops",
            "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=500",
        ),
        (
            "Mediterranean Lamb Kebabs",
            "https://images.unsplash.com/photo-1529042410759-befb1204b468?w=500",
        ),
    ])
});

/// Image for a title, or [`FALLBACK_IMAGE`] when the title is unknown.
pub fn default_image(title: &str) -> &'static str {
    DEFAULT_IMAGES.get(title).copied().unwrap_or(FALLBACK_IMAGE)
}
