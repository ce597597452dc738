use axum::extract::State;
use menulens_core::domain::credentials::{ports::CredentialService, value_objects::UpdateApiKeysInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    credentials::validators::UpdateApiKeysValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateApiKeysResponse {
    pub success: bool,
}

#[utoipa::path(
    post,
    path = "/update-api-keys",
    tag = "credentials",
    summary = "Replace provider keys",
    description = "Replaces the OpenRouter and fal.ai keys used by subsequent requests. Keys are kept in memory only and reset on restart.",
    request_body = UpdateApiKeysValidator,
    responses(
        (status = 200, body = UpdateApiKeysResponse),
        (status = 400, description = "A key is missing or blank", body = ApiErrorResponse)
    ),
)]
pub async fn update_api_keys(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateApiKeysValidator>,
) -> Result<Response<UpdateApiKeysResponse>, ApiError> {
    state
        .service
        .update_api_keys(UpdateApiKeysInput {
            openrouter_key: payload.openrouter_key,
            fal_key: payload.fal_key,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateApiKeysResponse { success: true }))
}
