use crate::model::{Recipe, RecipeId};
use async_trait::async_trait;
use thiserror::Error;

mod memory;

pub use self::memory::InMemoryRecipeStore;

/// Failure surfaced by a store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not complete the operation
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// Contract the hosting application's persistence layer fulfils.
///
/// Recipes are read and written as whole records; concurrent saves to the
/// same identifier are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Look up a recipe by id. `Ok(None)` when no record exists.
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, StoreError>;

    /// Persist the record, replacing any previous version.
    async fn save(&self, recipe: Recipe) -> Result<(), StoreError>;
}
