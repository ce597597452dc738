use axum::extract::State;
use menulens_core::domain::credentials::ports::CredentialService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckApiKeysResponse {
    pub has_keys: bool,
}

#[utoipa::path(
    get,
    path = "/check-api-keys",
    tag = "credentials",
    summary = "Check provider keys",
    description = "Reports whether both the OpenRouter and fal.ai keys are configured.",
    responses(
        (status = 200, body = CheckApiKeysResponse)
    ),
)]
pub async fn check_api_keys(State(state): State<AppState>) -> Response<CheckApiKeysResponse> {
    Response::OK(CheckApiKeysResponse {
        has_keys: state.service.check_api_keys().await,
    })
}
