use tastetrail_core::ingredient::{parse, resolve};
use tastetrail_core::models::ingredient::{Ingredient, IngredientEntry};

#[test]
fn amount_unit_and_name_are_split() {
    assert_eq!(parse("2 cups flour"), Ingredient::new("2", "cups", "flour"));
}

#[test]
fn text_without_leading_number_degrades_to_defaults() {
    assert_eq!(
        parse("salt and pepper"),
        Ingredient::new("1", "piece", "salt and pepper")
    );
    assert_eq!(
        parse("Fresh basil leaves"),
        Ingredient::new("1", "piece", "Fresh basil leaves")
    );
}

#[test]
fn fractions_are_kept_as_text() {
    assert_eq!(
        parse("1/2 red onion, diced"),
        Ingredient::new("1/2", "red", "onion, diced")
    );
}

#[test]
fn unit_may_be_glued_to_the_amount() {
    assert_eq!(
        parse("400g paneer cubes"),
        Ingredient::new("400", "g", "paneer cubes")
    );
}

#[test]
fn multi_word_names_survive() {
    assert_eq!(
        parse("1 lb chicken breast, sliced"),
        Ingredient::new("1", "lb", "chicken breast, sliced")
    );
}

#[test]
fn empty_text_degrades_to_defaults() {
    assert_eq!(parse(""), Ingredient::new("1", "piece", ""));
}

#[test]
fn structured_entries_pass_through() {
    let ingredient = Ingredient::new("a pinch", "of", "saffron");
    let entry = IngredientEntry::Structured(ingredient.clone());
    assert_eq!(resolve(&entry), ingredient);
    assert_eq!(resolve(&IngredientEntry::Structured(resolve(&entry))), ingredient);
}

#[test]
fn raw_entries_are_parsed() {
    let entry = IngredientEntry::from("3 tbsp olive oil");
    assert_eq!(resolve(&entry), Ingredient::new("3", "tbsp", "olive oil"));
}

#[test]
fn stored_entries_deserialize_from_either_shape() {
    let entries: Vec<IngredientEntry> = serde_json::from_str(
        r#"["1 cup quinoa", {"amount": "2", "unit": "cups", "name": "kale"}, {"name": "salt"}]"#,
    )
    .unwrap();

    assert_eq!(entries[0], IngredientEntry::RawText("1 cup quinoa".to_string()));
    assert_eq!(
        entries[1],
        IngredientEntry::Structured(Ingredient::new("2", "cups", "kale"))
    );
    assert_eq!(
        entries[2],
        IngredientEntry::Structured(Ingredient::new("1", "piece", "salt"))
    );
}
