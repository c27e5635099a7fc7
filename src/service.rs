use crate::codec;
use crate::config::ImageConfig;
use crate::error::ImageError;
use crate::model::{Recipe, RecipeId, UploadedFile};
use crate::store::RecipeStore;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

/// Orchestrates image persistence and recipe lookup for the endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Attach an uploaded payload to the recipe with the given id.
    ///
    /// Fails with [`ImageError::RecipeNotFound`] when no recipe exists; the
    /// stored record is unchanged on any failure.
    async fn save_image(&self, id: RecipeId, upload: &UploadedFile) -> Result<(), ImageError>;

    /// Fetch the recipe backing the upload form and the streaming endpoint.
    async fn find_recipe(&self, id: RecipeId) -> Result<Recipe, ImageError>;
}

/// `ImageService` backed by a [`RecipeStore`].
pub struct RecipeImageService<S> {
    store: Arc<S>,
    config: ImageConfig,
}

impl<S: RecipeStore> RecipeImageService<S> {
    pub fn new(store: Arc<S>) -> Self {
        RecipeImageService::with_config(store, ImageConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: ImageConfig) -> Self {
        RecipeImageService { store, config }
    }
}

#[async_trait]
impl<S: RecipeStore> ImageService for RecipeImageService<S> {
    async fn save_image(&self, id: RecipeId, upload: &UploadedFile) -> Result<(), ImageError> {
        let size = upload.data.len();
        if size > self.config.max_upload_bytes {
            return Err(ImageError::TooLarge {
                size,
                limit: self.config.max_upload_bytes,
            });
        }

        let mut recipe = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ImageError::RecipeNotFound(id))?;

        // The updated record is built in full before the single save call,
        // so a failure anywhere leaves the stored record untouched.
        recipe.image = Some(codec::encode(upload.data.clone()));
        self.store.save(recipe).await?;

        info!(
            "stored {} byte image '{}' for recipe {}",
            size, upload.filename, id
        );
        Ok(())
    }

    async fn find_recipe(&self, id: RecipeId) -> Result<Recipe, ImageError> {
        debug!("looking up recipe {}", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ImageError::RecipeNotFound(id))
    }
}
