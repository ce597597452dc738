use super::handlers::{
    check_api_keys::{__path_check_api_keys, check_api_keys},
    update_api_keys::{__path_update_api_keys, update_api_keys},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(check_api_keys, update_api_keys))]
pub struct CredentialsApiDoc;

pub fn credentials_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/check-api-keys", state.args.server.root_path),
            get(check_api_keys),
        )
        .route(
            &format!("{}/update-api-keys", state.args.server.root_path),
            post(update_api_keys),
        )
}
