use crate::codec;
use crate::config::ImageConfig;
use crate::error::ImageError;
use crate::model::{MultipartForm, RecipeId};
use crate::reply::{Reply, ViewModel, UPLOAD_FORM_VIEW};
use crate::service::ImageService;
use log::debug;

/// Multipart field the upload form sends the image under
pub const IMAGE_FIELD: &str = "imageFile";

/// Handlers for the three image operations.
///
/// Each handler parses the raw identifier segment itself and returns an
/// explicit `Result`; translating errors into status-coded replies is the
/// dispatch layer's job. No state is retained across requests.
pub struct ImageEndpoint<S> {
    service: S,
    config: ImageConfig,
}

impl<S: ImageService> ImageEndpoint<S> {
    pub fn new(service: S) -> Self {
        ImageEndpoint::with_config(service, ImageConfig::default())
    }

    pub fn with_config(service: S, config: ImageConfig) -> Self {
        ImageEndpoint { service, config }
    }

    /// GET `/recipe/{id}/image` — upload form with the recipe bound as
    /// `recipe`.
    pub async fn show_form(&self, recipe_id: &str) -> Result<Reply, ImageError> {
        let id: RecipeId = recipe_id.parse()?;
        let recipe = self.service.find_recipe(id).await?;

        let mut model = ViewModel::new();
        model.insert("recipe", serde_json::to_value(&recipe)?);
        Ok(Reply::view(UPLOAD_FORM_VIEW, model))
    }

    /// POST `/recipe/{id}/image` — persist the `imageFile` part, then
    /// redirect to the recipe detail page.
    pub async fn accept_upload(
        &self,
        recipe_id: &str,
        form: &MultipartForm,
    ) -> Result<Reply, ImageError> {
        let id: RecipeId = recipe_id.parse()?;
        let file = form
            .file(IMAGE_FIELD)
            .ok_or(ImageError::MissingFile(IMAGE_FIELD))?;

        debug!(
            "upload for recipe {}: '{}' ({}, {} bytes)",
            id,
            file.filename,
            file.content_type,
            file.data.len()
        );
        self.service.save_image(id, file).await?;

        Ok(Reply::redirect(format!("/recipe/{}/show", id)))
    }

    /// GET `/recipe/{id}/recipeimage` — stream the stored bytes with a
    /// binary content type.
    pub async fn stream_image(&self, recipe_id: &str) -> Result<Reply, ImageError> {
        let id: RecipeId = recipe_id.parse()?;
        let recipe = self.service.find_recipe(id).await?;
        let stored = recipe.image.as_ref().ok_or(ImageError::NoImage(id))?;

        Ok(Reply::body(
            self.config.stream_content_type.clone(),
            codec::decode(stored),
        ))
    }
}
