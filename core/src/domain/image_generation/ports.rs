use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image_generation::{
        entities::{GenerationOutput, GenerationResult},
        value_objects::{GenerateImageInput, ImageGenerationRequest},
    },
};

/// Client for a text-to-image provider. Implementations submit the job and
/// wait for it to finish.
#[cfg_attr(test, mockall::automock)]
pub trait ImageGenerationClient: Send + Sync {
    fn generate(
        &self,
        request: ImageGenerationRequest,
    ) -> impl Future<Output = Result<GenerationOutput, CoreError>> + Send;
}

/// Service trait for dish image generation
#[cfg_attr(test, mockall::automock)]
pub trait ImageGenerationService: Send + Sync {
    fn generate_image(
        &self,
        input: GenerateImageInput,
    ) -> impl Future<Output = Result<GenerationResult, CoreError>> + Send;
}
