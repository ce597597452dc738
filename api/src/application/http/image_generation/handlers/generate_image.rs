use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use chrono::{SecondsFormat, Utc};
use menulens_core::domain::{
    common::entities::app_errors::CoreError,
    image_generation::{
        entities::GeneratedImage, ports::ImageGenerationService, value_objects::GenerateImageInput,
    },
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    image_generation::validators::GenerateImageRequest,
    server::{
        api_entities::{api_error::validation_message, response::Response},
        app_state::AppState,
    },
};

const GENERATION_FAILED: &str = "Error in image generation process";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub images: Vec<GeneratedImage>,
    pub model: String,
    pub prompt: String,
    pub image_url: String,
    /// Milliseconds spent on the whole request.
    pub generation_time: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailureBody {
    pub error: String,
    pub details: String,
    /// RFC 3339 time of the failure.
    pub timestamp: String,
    /// Milliseconds spent before the failure.
    pub processing_time: u64,
}

/// Error response of this endpoint, which reports timing next to the cause.
#[derive(Debug)]
pub struct GenerationFailure {
    status: StatusCode,
    body: GenerationFailureBody,
}

impl GenerationFailure {
    fn new(status: StatusCode, error: String, details: String, started: Instant) -> Self {
        Self {
            status,
            body: GenerationFailureBody {
                error,
                details,
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                processing_time: elapsed_ms(started),
            },
        }
    }

    fn bad_request(message: String, started: Instant) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.clone(), message, started)
    }

    fn from_core(error: CoreError, started: Instant) -> Self {
        let details = error.to_string();
        match error {
            CoreError::Invalid(message) => Self::bad_request(message, started),
            CoreError::QuotaExhausted => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, details.clone(), details, started)
            }
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERATION_FAILED.to_string(),
                details,
                started,
            ),
        }
    }
}

impl IntoResponse for GenerationFailure {
    fn into_response(self) -> AxumResponse {
        if self.status.is_server_error() {
            error!(
                status = self.status.as_u16(),
                details = %self.body.details,
                processing_time = self.body.processing_time,
                "Image generation failed"
            );
        } else {
            warn!(status = self.status.as_u16(), details = %self.body.details, "Image generation rejected");
        }

        (self.status, Json(self.body)).into_response()
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[utoipa::path(
    post,
    path = "/generate-image",
    tag = "image-generation",
    summary = "Generate a dish photo",
    description = "Writes a visual description of the dish with the caption model, then renders it with the image model.",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Image generated", body = GenerateImageResponse),
        (status = 400, description = "Missing dish name", body = GenerationFailureBody),
        (status = 503, description = "Image provider out of credit", body = GenerationFailureBody),
        (status = 500, description = "Generation failed", body = GenerationFailureBody)
    ),
)]
pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Response<GenerateImageResponse>, GenerationFailure> {
    let started = Instant::now();

    let Json(payload) =
        payload.map_err(|e| GenerationFailure::bad_request(e.body_text(), started))?;
    payload
        .validate()
        .map_err(|e| GenerationFailure::bad_request(validation_message(&e), started))?;

    let language = payload.language();
    info!(dish = %payload.name, language = %language, "Generating dish image");

    let result = state
        .service
        .generate_image(GenerateImageInput {
            name: payload.name,
            language,
        })
        .await
        .map_err(|e| GenerationFailure::from_core(e, started))?;

    let image_url = result.image_url().unwrap_or_default().to_string();
    let generation_time = elapsed_ms(started);
    info!(generation_time, image_url = %image_url, "Dish image ready");

    Ok(Response::OK(GenerateImageResponse {
        images: result.images,
        model: result.model,
        prompt: result.prompt,
        image_url,
        generation_time,
    }))
}
