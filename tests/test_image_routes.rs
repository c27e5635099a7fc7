use bytes::Bytes;
use recipe_images::{
    codec, image_routes, ImageConfig, ImageRoutes, InMemoryRecipeStore, MultipartForm, Recipe,
    RecipeId, RecipeImageService, Reply, Request, UploadedFile, IMAGE_FIELD,
};
use std::sync::Arc;

fn routes_with(recipes: Vec<Recipe>) -> ImageRoutes<RecipeImageService<InMemoryRecipeStore>> {
    let store = Arc::new(InMemoryRecipeStore::with_recipes(recipes));
    image_routes(store, ImageConfig::default())
}

fn recipe_with_image(id: u64, image: &'static [u8]) -> Recipe {
    let mut recipe = Recipe::new(RecipeId(id), "Cottage pie");
    recipe.image = Some(codec::encode(Bytes::from_static(image)));
    recipe
}

/// Test that the upload form renders with the recipe bound as `recipe`
#[tokio::test]
async fn test_get_image_form() {
    let routes = routes_with(vec![Recipe::new(RecipeId(1), "Cottage pie")]);

    let reply = routes.handle(&Request::get("/recipe/1/image")).await;

    assert_eq!(reply.status(), 200);
    assert_eq!(reply.view_name(), Some("recipe/imageuploadform"));
    let model = reply.model().unwrap();
    assert!(model.contains("recipe"));
    assert_eq!(model.get("recipe").unwrap()["id"], 1);
}

/// Test that a multipart upload redirects to the recipe detail page
#[tokio::test]
async fn test_handle_image_post() {
    let routes = routes_with(vec![Recipe::new(RecipeId(1), "Cottage pie")]);

    let form = MultipartForm::new().with_file(UploadedFile::new(
        IMAGE_FIELD,
        "testing.txt",
        "text/plain",
        "test",
    ));
    let reply = routes.handle(&Request::post("/recipe/1/image", form)).await;

    assert_eq!(reply.status(), 302);
    assert_eq!(reply.location(), Some("/recipe/1/show"));

    // The payload is now served back by the streaming endpoint
    let reply = routes.handle(&Request::get("/recipe/1/recipeimage")).await;
    assert_eq!(reply.status(), 200);
    assert_eq!(reply.content_length(), Some(4));
}

/// Test that a stored image streams back with byte-length framing
#[tokio::test]
async fn test_render_image_from_db() {
    let routes = routes_with(vec![recipe_with_image(1, b"image text")]);

    let reply = routes.handle(&Request::get("/recipe/1/recipeimage")).await;

    assert_eq!(reply.status(), 200);
    assert_eq!(reply.content_length(), Some("image text".len()));
    match reply {
        Reply::Body {
            content_type,
            content,
        } => {
            assert_eq!(content_type, "image/jpeg");
            assert_eq!(content, Bytes::from_static(b"image text"));
        }
        other => panic!("Expected body reply, got {:?}", other),
    }
}

/// Test that a non-numeric identifier on the streaming endpoint renders the
/// shared 400 error view
#[tokio::test]
async fn test_get_image_number_format_error() {
    let routes = routes_with(vec![]);

    let reply = routes.handle(&Request::get("/recipe/asdf/recipeimage")).await;

    assert_eq!(reply.status(), 400);
    assert_eq!(reply.view_name(), Some("400error"));
}

/// Test that a non-numeric identifier on the form endpoint renders the same
/// shared 400 error view
#[tokio::test]
async fn test_get_form_number_format_error() {
    let routes = routes_with(vec![]);

    let reply = routes.handle(&Request::get("/recipe/asdf/image")).await;

    assert_eq!(reply.status(), 400);
    assert_eq!(reply.view_name(), Some("400error"));
}

/// Test that a well-formed identifier with no matching recipe renders the
/// 404 error view on the streaming path
#[tokio::test]
async fn test_stream_unknown_recipe() {
    let routes = routes_with(vec![]);

    let reply = routes.handle(&Request::get("/recipe/7/recipeimage")).await;

    assert_eq!(reply.status(), 404);
    assert_eq!(reply.view_name(), Some("404error"));
}

/// Test that a recipe without a stored image is a 404 on the streaming path
#[tokio::test]
async fn test_stream_recipe_without_image() {
    let routes = routes_with(vec![Recipe::new(RecipeId(1), "Cottage pie")]);

    let reply = routes.handle(&Request::get("/recipe/1/recipeimage")).await;

    assert_eq!(reply.status(), 404);
    assert_eq!(reply.view_name(), Some("404error"));
}

/// Test that an upload without the `imageFile` part is a client error
#[tokio::test]
async fn test_post_without_image_file_part() {
    let routes = routes_with(vec![Recipe::new(RecipeId(1), "Cottage pie")]);

    let form = MultipartForm::new().with_file(UploadedFile::new(
        "somethingElse",
        "testing.txt",
        "text/plain",
        "test",
    ));
    let reply = routes.handle(&Request::post("/recipe/1/image", form)).await;

    assert_eq!(reply.status(), 400);
    assert_eq!(reply.view_name(), Some("400error"));
}

/// Test that requests outside the image surface fall through to 404
#[tokio::test]
async fn test_unknown_route() {
    let routes = routes_with(vec![Recipe::new(RecipeId(1), "Cottage pie")]);

    let reply = routes.handle(&Request::get("/recipe/1/ingredients")).await;

    assert_eq!(reply.status(), 404);
    assert_eq!(reply.view_name(), Some("404error"));
}

/// Test that the error view carries the failure message under `error`
#[tokio::test]
async fn test_error_view_message_binding() {
    let routes = routes_with(vec![]);

    let reply = routes.handle(&Request::get("/recipe/asdf/image")).await;

    let model = reply.model().unwrap();
    let message = model.get("error").and_then(|v| v.as_str()).unwrap();
    assert!(message.contains("asdf"));
}
