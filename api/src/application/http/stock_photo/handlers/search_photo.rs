use axum::extract::{Query, State, rejection::QueryRejection};
use menulens_core::domain::{
    common::entities::app_errors::CoreError,
    stock_photo::{entities::StockPhoto, ports::StockPhotoService},
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
    stock_photo::validators::SearchPhotoParams,
};

#[utoipa::path(
    get,
    path = "/unsplash",
    tag = "stock-photo",
    summary = "Find a stock photo",
    description = "Returns the most relevant landscape photo for the query together with the photographer credit.",
    params(SearchPhotoParams),
    responses(
        (status = 200, description = "Photo found", body = StockPhoto),
        (status = 400, description = "Query missing", body = ApiErrorResponse),
        (status = 404, description = "No photo matches the query", body = ApiErrorResponse),
        (status = 500, description = "Provider failure", body = ApiErrorResponse)
    ),
)]
pub async fn search_photo(
    State(state): State<AppState>,
    params: Result<Query<SearchPhotoParams>, QueryRejection>,
) -> Result<Response<StockPhoto>, ApiError> {
    let Query(params) = params?;

    let photo = state
        .service
        .search_photo(params.query.unwrap_or_default())
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("No photos found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(photo))
}
