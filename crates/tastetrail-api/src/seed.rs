use tastetrail_core::doc_keys;
use tastetrail_core::seed::seed_recipes;
use tastetrail_storage::documents;
use tastetrail_storage::objects::ObjectStore;

/// Write the built-in recipe catalogue when the store holds no recipes.
/// Returns how many recipes were written.
pub async fn seed_catalogue(store: &ObjectStore) -> eyre::Result<usize> {
    let existing = store.list_objects(doc_keys::RECIPES_PREFIX).await?;
    if !existing.is_empty() {
        tracing::debug!(recipes = existing.len(), "catalogue present, not seeding");
        return Ok(0);
    }

    let recipes = seed_recipes()?;
    for recipe in &recipes {
        documents::save_json(store, &doc_keys::recipe(&recipe.id), recipe).await?;
    }

    tracing::info!(recipes = recipes.len(), "seeded recipe catalogue");
    Ok(recipes.len())
}
