use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub url: String,
    pub seed: Option<u64>,
    pub mime_type: String,
}

/// Images returned by the provider for one finished job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub images: Vec<GeneratedImage>,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    pub images: Vec<GeneratedImage>,
    pub model: String,
    pub prompt: String,
}

impl GenerationResult {
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}
