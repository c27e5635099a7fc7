use crate::model::RecipeId;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur while handling recipe image requests
#[derive(Error, Debug)]
pub enum ImageError {
    /// The recipe identifier in the request path is not an integer literal
    #[error("Invalid recipe identifier: {0}")]
    InvalidIdentifier(String),

    /// No recipe exists for a well-formed identifier
    #[error("Recipe {0} not found")]
    RecipeNotFound(RecipeId),

    /// The recipe exists but has no stored image
    #[error("Recipe {0} has no stored image")]
    NoImage(RecipeId),

    /// The multipart body does not contain the expected file part
    #[error("Missing multipart file part: {0}")]
    MissingFile(&'static str),

    /// The uploaded payload exceeds the configured size ceiling
    #[error("Upload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    /// The request does not match any image route
    #[error("No handler for {0}")]
    UnknownRoute(String),

    /// Failed to persist or read through the recipe store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Failed to serialize a record into a view model
    #[error("View model error: {0}")]
    Render(#[from] serde_json::Error),
}
