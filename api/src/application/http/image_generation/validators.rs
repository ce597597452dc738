use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

const DEFAULT_LANGUAGE: &str = "en-us";

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateImageRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No dish name provided"))]
    pub name: String,

    /// One of `zh-cn`, `fr-fr`, `it-it`, `en-us`; anything else, `null`
    /// included, means English.
    #[serde(default)]
    #[schema(default = "en-us")]
    pub language: Option<String>,
}

impl GenerateImageRequest {
    pub fn language(&self) -> String {
        self.language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }
}
