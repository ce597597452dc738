use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApiKeysValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required API keys"))]
    pub openrouter_key: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required API keys"))]
    pub fal_key: Option<String>,
}
