use log::debug;
use recipe_images::{
    image_routes, ImageConfig, InMemoryRecipeStore, MultipartForm, Recipe, RecipeId, Reply,
    Request, UploadedFile, IMAGE_FIELD,
};
use std::env;
use std::sync::Arc;

/// Demo driver: pushes an image file through the full upload path against an
/// in-memory store, then streams it back.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the image path from command-line arguments
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide an image file as an argument")?;

    let data = tokio::fs::read(path).await?;
    debug!("read {} bytes from {}", data.len(), path);

    // Seed a throwaway store with one recipe and mount the routes
    let store = Arc::new(InMemoryRecipeStore::with_recipes([Recipe::new(
        RecipeId(1),
        "Demo recipe",
    )]));
    let routes = image_routes(store, ImageConfig::load()?);

    let form = MultipartForm::new().with_file(UploadedFile::new(
        IMAGE_FIELD,
        path.as_str(),
        "application/octet-stream",
        data,
    ));
    let reply = routes.handle(&Request::post("/recipe/1/image", form)).await;
    println!("POST /recipe/1/image      -> {}", describe(&reply));

    let reply = routes.handle(&Request::get("/recipe/1/recipeimage")).await;
    println!("GET  /recipe/1/recipeimage -> {}", describe(&reply));

    Ok(())
}

fn describe(reply: &Reply) -> String {
    match reply {
        Reply::View { status, name, .. } => format!("{} (view {})", status, name),
        Reply::Redirect { location } => format!("302 (redirect to {})", location),
        Reply::Body {
            content_type,
            content,
        } => format!("200 ({} bytes, {})", content.len(), content_type),
    }
}
