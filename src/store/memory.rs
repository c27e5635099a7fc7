use super::{RecipeStore, StoreError};
use crate::model::{Recipe, RecipeId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory `RecipeStore` used by tests and the demo binary.
///
/// Swappable stand-in for the real persistence layer; records are cloned in
/// and out, so no caller ever observes a half-written image.
#[derive(Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<HashMap<RecipeId, Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        InMemoryRecipeStore::default()
    }

    /// Create a store pre-seeded with the given recipes
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let map = recipes
            .into_iter()
            .map(|recipe| (recipe.id, recipe))
            .collect();
        InMemoryRecipeStore {
            recipes: RwLock::new(map),
        }
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError> {
        let recipes = self
            .recipes
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(recipes.get(&id).cloned())
    }

    async fn save(&self, recipe: Recipe) -> Result<(), StoreError> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        recipes.insert(recipe.id, recipe);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_id_missing_recipe() {
        let store = InMemoryRecipeStore::new();
        let found = store.find_by_id(RecipeId(1)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_save_then_find() {
        let store = InMemoryRecipeStore::new();
        store
            .save(Recipe::new(RecipeId(1), "Cottage pie"))
            .await
            .unwrap();

        let found = store.find_by_id(RecipeId(1)).await.unwrap().unwrap();
        assert_eq!(found.id, RecipeId(1));
        assert_eq!(found.description, "Cottage pie");
    }

    #[tokio::test]
    async fn test_save_replaces_previous_record() {
        let store = InMemoryRecipeStore::with_recipes([Recipe::new(RecipeId(1), "old")]);
        store.save(Recipe::new(RecipeId(1), "new")).await.unwrap();

        let found = store.find_by_id(RecipeId(1)).await.unwrap().unwrap();
        assert_eq!(found.description, "new");
    }
}
