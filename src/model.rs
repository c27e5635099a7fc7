use crate::codec::StoredImage;
use crate::error::ImageError;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a recipe record, assigned by the recipe CRUD layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = ImageError;

    /// Parse a path segment into a recipe identifier.
    /// Anything that is not an integer literal is rejected as
    /// [`ImageError::InvalidIdentifier`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(RecipeId)
            .map_err(|_| ImageError::InvalidIdentifier(s.to_string()))
    }
}

/// A recipe record as seen by the image path.
///
/// Everything besides the image field is owned by the out-of-scope recipe
/// CRUD operations; this crate only ever sets `image`, and only through the
/// image service.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub description: String,
    /// Stored image, if one has been uploaded. Rendered through the
    /// streaming endpoint, never through the view model.
    #[serde(skip)]
    pub image: Option<StoredImage>,
}

impl Recipe {
    pub fn new(id: RecipeId, description: impl Into<String>) -> Self {
        Recipe {
            id,
            description: description.into(),
            image: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A single file part from an already-parsed multipart body.
///
/// Request-scoped: the hosting framework parses the wire-level multipart
/// grammar and hands the parts over as values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Name of the form field this part was sent under
    pub field: String,
    /// Client-side filename
    pub filename: String,
    /// Declared content type, as sent by the client
    pub content_type: String,
    /// Raw payload
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(
        field: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        UploadedFile {
            field: field.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

/// The parsed multipart body of an upload request.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<UploadedFile>,
}

impl MultipartForm {
    pub fn new() -> Self {
        MultipartForm::default()
    }

    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.parts.push(file);
        self
    }

    /// First file part sent under the given field name
    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.parts.iter().find(|part| part.field == field)
    }
}
