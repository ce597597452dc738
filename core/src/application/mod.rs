use std::sync::Arc;

use url::Url;

use crate::{
    domain::{
        common::{
            MenuLensConfig, entities::app_errors::CoreError, retry::RetryPolicy, services::Service,
        },
        credentials::{entities::ApiCredentials, store::CredentialStore},
    },
    infrastructure::{
        image_generation::FalImageClient, llm::OpenRouterLLMClient, stock_photo::UnsplashClient,
    },
};

pub type MenuLensService = Service<OpenRouterLLMClient, FalImageClient, UnsplashClient>;

/// Builds the service with one credential store shared by all provider clients.
pub async fn create_service(config: MenuLensConfig) -> Result<MenuLensService, CoreError> {
    for (name, value) in [
        ("OpenRouter base URL", &config.openrouter.base_url),
        ("fal.ai queue URL", &config.fal.queue_url),
        ("Unsplash base URL", &config.unsplash.base_url),
    ] {
        Url::parse(value)
            .map_err(|e| CoreError::Invalid(format!("{} is not a valid URL: {}", name, e)))?;
    }

    let credentials = Arc::new(CredentialStore::new(ApiCredentials::new(
        config.openrouter.api_key.clone(),
        config.fal.api_key.clone(),
        config.unsplash.access_key.clone(),
    )));

    let snapshot = credentials.snapshot().await;
    if !snapshot.has_generation_keys() {
        tracing::warn!("OpenRouter or fal.ai API key is not configured; set them before analyzing menus");
    }
    tracing::info!(credentials = ?snapshot, "Provider credentials loaded");

    let llm_client = OpenRouterLLMClient::new(config.openrouter.clone(), credentials.clone());
    let image_client = FalImageClient::new(config.fal.clone(), credentials.clone());
    let stock_photo_client = UnsplashClient::new(config.unsplash.clone(), credentials.clone());

    Ok(
        Service::new(llm_client, image_client, stock_photo_client, credentials)
            .with_analysis_retry(RetryPolicy::from(&config.analyzer))
            .with_structured_output(config.openrouter.structured_output)
            .with_cuisine_keywords(config.unsplash.cuisine_keywords),
    )
}
