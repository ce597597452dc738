use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchPhotoParams {
    /// Dish name or free-text search terms.
    pub query: Option<String>,
}
