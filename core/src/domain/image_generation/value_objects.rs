#[derive(Debug, Clone)]
pub struct GenerateImageInput {
    pub name: String,
    pub language: String,
}

/// Fixed sampler settings sent with every generation job.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGenerationParams {
    pub negative_prompt: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageGenerationParams {
    fn default() -> Self {
        Self {
            negative_prompt: "blurry, bad quality, distorted, deformed".to_string(),
            num_inference_steps: 50,
            guidance_scale: 7.5,
            width: 1024,
            height: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub params: ImageGenerationParams,
}
