//! Routing and centralized error translation.
//!
//! The hosting framework hands over a routed [`Request`] value; this module
//! picks the handler and maps every [`ImageError`] to a status-coded reply
//! in exactly one place, instead of each handler repeating the mapping.

use crate::endpoint::{ImageEndpoint, IMAGE_FIELD};
use crate::error::ImageError;
use crate::model::MultipartForm;
use crate::reply::{Reply, BAD_REQUEST_VIEW, NOT_FOUND_VIEW, SERVER_ERROR_VIEW};
use crate::service::ImageService;
use log::warn;
use std::fmt;

/// HTTP method of an incoming request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A routed request: the method, the path, and the parsed multipart body
/// when one was sent.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub form: Option<MultipartForm>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Request {
            method: Method::Get,
            path: path.into(),
            form: None,
        }
    }

    pub fn post(path: impl Into<String>, form: MultipartForm) -> Self {
        Request {
            method: Method::Post,
            path: path.into(),
            form: Some(form),
        }
    }
}

/// Routes requests onto an [`ImageEndpoint`].
pub struct ImageRoutes<S> {
    endpoint: ImageEndpoint<S>,
}

impl<S: ImageService> ImageRoutes<S> {
    pub fn new(endpoint: ImageEndpoint<S>) -> Self {
        ImageRoutes { endpoint }
    }

    /// Handle one request, always producing a renderable reply.
    pub async fn handle(&self, request: &Request) -> Reply {
        match self.dispatch(request).await {
            Ok(reply) => reply,
            Err(err) => error_reply(&err),
        }
    }

    async fn dispatch(&self, request: &Request) -> Result<Reply, ImageError> {
        let segments: Vec<&str> = request
            .path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["recipe", id, "image"]) => self.endpoint.show_form(id).await,
            (Method::Post, ["recipe", id, "image"]) => {
                // A POST without a multipart body cannot carry the file part
                let form = request
                    .form
                    .as_ref()
                    .ok_or(ImageError::MissingFile(IMAGE_FIELD))?;
                self.endpoint.accept_upload(id, form).await
            }
            (Method::Get, ["recipe", id, "recipeimage"]) => self.endpoint.stream_image(id).await,
            _ => Err(ImageError::UnknownRoute(format!(
                "{} {}",
                request.method, request.path
            ))),
        }
    }
}

/// The single translation point from the error taxonomy to response status
/// and error view.
pub fn error_reply(err: &ImageError) -> Reply {
    warn!("request failed: {}", err);
    let (status, view) = match err {
        ImageError::InvalidIdentifier(_)
        | ImageError::MissingFile(_)
        | ImageError::TooLarge { .. } => (400, BAD_REQUEST_VIEW),
        ImageError::RecipeNotFound(_) | ImageError::NoImage(_) | ImageError::UnknownRoute(_) => {
            (404, NOT_FOUND_VIEW)
        }
        ImageError::Store(_) | ImageError::Render(_) => (500, SERVER_ERROR_VIEW),
    };
    Reply::error_view(status, view, err.to_string())
}
