use crate::application::http::{
    credentials::router::CredentialsApiDoc, health::HealthApiDoc,
    image_generation::router::ImageGenerationApiDoc, menu_analysis::router::MenuAnalysisApiDoc,
    stock_photo::router::StockPhotoApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MenuLens API",
        description = "Extracts dishes from menu photos and illustrates them with generated or stock images."
    ),
    tags(
        (name = "menu-analysis", description = "Menu photo analysis"),
        (name = "image-generation", description = "Dish image generation"),
        (name = "stock-photo", description = "Stock photo fallback"),
        (name = "credentials", description = "Provider API keys"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Full document with every feature's paths merged in.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MenuAnalysisApiDoc::openapi());
    openapi.merge(ImageGenerationApiDoc::openapi());
    openapi.merge(StockPhotoApiDoc::openapi());
    openapi.merge(CredentialsApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
