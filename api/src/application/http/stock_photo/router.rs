use super::handlers::search_photo::{__path_search_photo, search_photo};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_photo))]
pub struct StockPhotoApiDoc;

pub fn stock_photo_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/unsplash", state.args.server.root_path),
        get(search_photo),
    )
}
