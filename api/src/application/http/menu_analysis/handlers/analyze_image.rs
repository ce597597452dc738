use axum::extract::{Multipart, State};
use bytes::Bytes;
use menulens_core::domain::menu_analysis::{
    entities::DishList, ports::MenuAnalysisService, value_objects::AnalyzeMenuInput,
};
use tracing::{error, info};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/analyze-image",
    tag = "menu-analysis",
    summary = "Analyze a menu photo",
    description = "Extracts the dishes listed on a menu photo. Send the photo as the multipart field `image` and optionally a `language` hint.",
    request_body(content_type = "multipart/form-data", description = "Fields: `image` (file), `language` (text, optional)"),
    responses(
        (status = 200, description = "Dishes found on the menu", body = DishList),
        (status = 400, description = "Missing, empty or oversized image", body = ApiErrorResponse),
        (status = 500, description = "Analysis failed", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DishList>, ApiError> {
    let mut image: Option<(Bytes, Option<String>)> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().map(|c| c.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some((data, content_type));
            }
            "language" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read language: {}", e)))?;
                let value = value.trim();
                if !value.is_empty() {
                    language = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let (data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    info!(size = data.len(), mime_type = ?mime_type, "Analyzing menu image");

    let dishes = state
        .service
        .analyze_menu(AnalyzeMenuInput {
            image_data: data.to_vec(),
            mime_type,
            language,
        })
        .await
        .map_err(|e| ApiError::from(e).labeled("Failed to analyze image"))?;

    Ok(Response::OK(DishList { dishes }))
}
