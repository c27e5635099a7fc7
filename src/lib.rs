//! Image upload and retrieval for recipe records.
//!
//! Server-agnostic: the hosting web framework parses requests into the value
//! types in [`model`] and [`dispatch`], and renders the [`Reply`] values this
//! crate returns. Persistence is behind the [`RecipeStore`] seam.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod model;
pub mod reply;
pub mod service;
pub mod store;

use std::sync::Arc;

pub use crate::config::ImageConfig;
pub use crate::dispatch::{ImageRoutes, Method, Request};
pub use crate::endpoint::{ImageEndpoint, IMAGE_FIELD};
pub use crate::error::ImageError;
pub use crate::model::{MultipartForm, Recipe, RecipeId, UploadedFile};
pub use crate::reply::{Reply, ViewModel};
pub use crate::service::{ImageService, RecipeImageService};
pub use crate::store::{InMemoryRecipeStore, RecipeStore, StoreError};

/// Wire the full image path on top of a recipe store.
pub fn image_routes<S: RecipeStore>(
    store: Arc<S>,
    config: ImageConfig,
) -> ImageRoutes<RecipeImageService<S>> {
    let service = RecipeImageService::with_config(store, config.clone());
    ImageRoutes::new(ImageEndpoint::with_config(service, config))
}
