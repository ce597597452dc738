use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{OpenRouterConfig, entities::app_errors::CoreError},
    credentials::store::CredentialStore,
    menu_analysis::{
        ports::LLMClient,
        value_objects::{ChatPrompt, ImageInput},
    },
};

const VISION_MAX_TOKENS: u32 = 1000;
const CAPTION_MAX_TOKENS: u32 = 500;
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct OpenRouterLLMClient {
    config: OpenRouterConfig,
    credentials: Arc<CredentialStore>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaFormat },
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl OpenRouterLLMClient {
    pub fn new(config: OpenRouterConfig, credentials: Arc<CredentialStore>) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn call_openrouter_api(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CoreError> {
        let api_key = self.credentials.openrouter_key().await?;

        tracing::debug!(model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.app_url)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenRouter API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenRouter API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenRouter response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        if let Some(error) = &completion.error {
            tracing::error!("OpenRouter returned an error payload: {}", error.message);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                error.message
            )));
        }

        Ok(completion)
    }
}

/// First choice content; an empty string counts as missing.
fn first_content(completion: ChatCompletionResponse) -> Result<String, CoreError> {
    let choice = completion.choices.into_iter().next().ok_or_else(|| {
        CoreError::ExternalServiceError("No response choices available".to_string())
    })?;

    choice
        .message
        .content
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| CoreError::ExternalServiceError("No content in response".to_string()))
}

fn data_url(image: &ImageInput) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        general_purpose::STANDARD.encode(&image.data)
    )
}

impl LLMClient for OpenRouterLLMClient {
    async fn generate_with_image(
        &self,
        prompt: ChatPrompt,
        image: ImageInput,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.config.vision_model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(prompt.system),
                },
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text { text: prompt.user },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: data_url(&image),
                            },
                        },
                    ]),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: VISION_MAX_TOKENS,
            stream: false,
            response_format: response_schema.map(|schema| ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: "dish_list",
                    strict: true,
                    schema,
                },
            }),
        };

        let completion = self.call_openrouter_api(request).await?;
        first_content(completion)
    }

    async fn generate_with_text(&self, prompt: ChatPrompt) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.config.caption_model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(prompt.system),
                },
                Message {
                    role: "user",
                    content: MessageContent::Text(prompt.user),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: CAPTION_MAX_TOKENS,
            stream: false,
            response_format: None,
        };

        let completion = self.call_openrouter_api(request).await?;

        // A caption without content is treated as empty; the caller falls
        // back to the dish name.
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
