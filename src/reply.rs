//! Framework-agnostic response values returned by the image handlers.
//!
//! The hosting framework turns these into actual HTTP responses; this crate
//! only decides status, view selection, redirect target and body framing.

use bytes::Bytes;
use serde_json::Value;
use std::collections::BTreeMap;

/// View rendered by the upload form endpoint
pub const UPLOAD_FORM_VIEW: &str = "recipe/imageuploadform";
/// Shared view for 400-class client errors
pub const BAD_REQUEST_VIEW: &str = "400error";
/// Shared view for missing records and unknown routes
pub const NOT_FOUND_VIEW: &str = "404error";
/// Shared view for backend failures
pub const SERVER_ERROR_VIEW: &str = "500error";

/// Values handed to the host's rendering step, keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct ViewModel(BTreeMap<String, Value>);

impl ViewModel {
    pub fn new() -> Self {
        ViewModel::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

/// Outcome of one image request, ready for the hosting framework to render.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Render the named view with the given model
    View {
        status: u16,
        name: String,
        model: ViewModel,
    },
    /// 302 redirect to `location`
    Redirect { location: String },
    /// Raw body with its content type; the length header comes from the
    /// body itself
    Body { content_type: String, content: Bytes },
}

impl Reply {
    /// Successful view render
    pub fn view(name: impl Into<String>, model: ViewModel) -> Self {
        Reply::View {
            status: 200,
            name: name.into(),
            model,
        }
    }

    /// Error view carrying the failure message under the `error` attribute
    pub fn error_view(status: u16, name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut model = ViewModel::new();
        model.insert("error", Value::String(message.into()));
        Reply::View {
            status,
            name: name.into(),
            model,
        }
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Reply::Redirect {
            location: location.into(),
        }
    }

    pub fn body(content_type: impl Into<String>, content: Bytes) -> Self {
        Reply::Body {
            content_type: content_type.into(),
            content,
        }
    }

    /// HTTP status of this reply
    pub fn status(&self) -> u16 {
        match self {
            Reply::View { status, .. } => *status,
            Reply::Redirect { .. } => 302,
            Reply::Body { .. } => 200,
        }
    }

    /// Byte-length framing for body replies
    pub fn content_length(&self) -> Option<usize> {
        match self {
            Reply::Body { content, .. } => Some(content.len()),
            _ => None,
        }
    }

    /// Name of the rendered view, for view replies
    pub fn view_name(&self) -> Option<&str> {
        match self {
            Reply::View { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Redirect target, for redirect replies
    pub fn location(&self) -> Option<&str> {
        match self {
            Reply::Redirect { location } => Some(location),
            _ => None,
        }
    }

    /// Model attributes, for view replies
    pub fn model(&self) -> Option<&ViewModel> {
        match self {
            Reply::View { model, .. } => Some(model),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reply_defaults_to_200() {
        let reply = Reply::view(UPLOAD_FORM_VIEW, ViewModel::new());
        assert_eq!(reply.status(), 200);
        assert_eq!(reply.view_name(), Some(UPLOAD_FORM_VIEW));
        assert!(reply.content_length().is_none());
    }

    #[test]
    fn test_error_view_binds_message() {
        let reply = Reply::error_view(400, BAD_REQUEST_VIEW, "Invalid recipe identifier: asdf");
        assert_eq!(reply.status(), 400);
        let model = reply.model().unwrap();
        assert_eq!(
            model.get("error").and_then(Value::as_str),
            Some("Invalid recipe identifier: asdf")
        );
    }

    #[test]
    fn test_body_reply_framing() {
        let reply = Reply::body("image/jpeg", Bytes::from_static(b"image text"));
        assert_eq!(reply.status(), 200);
        assert_eq!(reply.content_length(), Some(10));
    }
}
