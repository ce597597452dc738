use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{FalConfig, entities::app_errors::CoreError},
    credentials::store::CredentialStore,
    image_generation::{
        entities::{GeneratedImage, GenerationOutput},
        helpers::is_quota_exhausted,
        ports::ImageGenerationClient,
        value_objects::ImageGenerationRequest,
    },
};

/// fal.ai queue client: submit a job, poll its status, then fetch the result.
#[derive(Debug, Clone)]
pub struct FalImageClient {
    config: FalConfig,
    credentials: Arc<CredentialStore>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct FalInput {
    prompt: String,
    negative_prompt: String,
    num_inference_steps: u32,
    guidance_scale: f32,
    image_size: ImageSize,
}

#[derive(Debug, Serialize)]
struct ImageSize {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    request_id: String,
    status_url: Option<String>,
    response_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
struct FalResult {
    #[serde(default)]
    images: Vec<FalImage>,
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FalImage {
    url: String,
    content_type: Option<String>,
}

impl FalImageClient {
    pub fn new(config: FalConfig, credentials: Arc<CredentialStore>) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    fn model_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.queue_url.trim_end_matches('/'),
            self.config.model.trim_matches('/')
        )
    }

    async fn submit(&self, api_key: &str, input: &FalInput) -> Result<SubmitResponse, CoreError> {
        let response = self
            .client
            .post(self.model_url())
            .header("Authorization", format!("Key {}", api_key))
            .json(input)
            .send()
            .await
            .map_err(transport_error)?;

        parse_json(check_status(response).await?).await
    }

    async fn fetch<T: for<'de> Deserialize<'de>>(
        &self,
        api_key: &str,
        url: &str,
    ) -> Result<T, CoreError> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Key {}", api_key))
            .send()
            .await
            .map_err(transport_error)?;

        parse_json(check_status(response).await?).await
    }

    /// Polls until the job reports `COMPLETED` or the deadline passes.
    async fn wait_for_completion(&self, api_key: &str, status_url: &str) -> Result<(), CoreError> {
        let deadline = Instant::now() + self.config.timeout;

        loop {
            let status: StatusResponse = self.fetch(api_key, status_url).await?;
            debug!(status = %status.status, "Polled generation status");

            match status.status.as_str() {
                "COMPLETED" => return Ok(()),
                "IN_QUEUE" | "IN_PROGRESS" => {}
                other => {
                    return Err(CoreError::ExternalServiceError(format!(
                        "Unexpected generation status: {}",
                        other
                    )));
                }
            }

            if Instant::now() + self.config.poll_interval > deadline {
                error!(timeout = ?self.config.timeout, "Generation did not finish in time");
                return Err(CoreError::Timeout(format!(
                    "image generation did not finish within {:?}",
                    self.config.timeout
                )));
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

impl ImageGenerationClient for FalImageClient {
    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn generate(&self, request: ImageGenerationRequest) -> Result<GenerationOutput, CoreError> {
        let api_key = self.credentials.fal_key().await?;

        let input = FalInput {
            prompt: request.prompt,
            negative_prompt: request.params.negative_prompt,
            num_inference_steps: request.params.num_inference_steps,
            guidance_scale: request.params.guidance_scale,
            image_size: ImageSize {
                width: request.params.width,
                height: request.params.height,
            },
        };

        let submitted = self.submit(&api_key, &input).await?;
        info!(request_id = %submitted.request_id, "Generation job queued");

        let requests_url = format!("{}/requests/{}", self.model_url(), submitted.request_id);
        let status_url = submitted
            .status_url
            .unwrap_or_else(|| format!("{}/status", requests_url));
        let response_url = submitted.response_url.unwrap_or(requests_url);

        self.wait_for_completion(&api_key, &status_url).await?;

        let result: FalResult = self.fetch(&api_key, &response_url).await?;
        Ok(into_output(result, &self.config.model))
    }
}

fn into_output(result: FalResult, model: &str) -> GenerationOutput {
    let seed = result.seed;

    GenerationOutput {
        images: result
            .images
            .into_iter()
            .map(|image| GeneratedImage {
                url: image.url,
                seed,
                mime_type: image
                    .content_type
                    .unwrap_or_else(|| "image/jpeg".to_string()),
            })
            .collect(),
        model: model.to_string(),
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    error!("fal.ai request failed: {}", e);
    CoreError::ExternalServiceError(format!("Image API error: {}", e))
}

async fn check_status(response: Response) -> Result<Response, CoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("fal.ai API error: {} - {}", status, body);

    if is_quota_exhausted(&body) {
        return Err(CoreError::QuotaExhausted);
    }

    Err(CoreError::ExternalServiceError(format!(
        "fal.ai returned {}: {}",
        status, body
    )))
}

async fn parse_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, CoreError> {
    response.json().await.map_err(|e| {
        error!("Failed to parse fal.ai response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse image API response: {}", e))
    })
}
