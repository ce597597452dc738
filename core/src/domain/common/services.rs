use std::sync::Arc;

use crate::domain::{
    common::retry::RetryPolicy,
    credentials::store::CredentialStore,
    image_generation::{
        ports::ImageGenerationClient, value_objects::ImageGenerationParams,
    },
    menu_analysis::ports::LLMClient,
    stock_photo::ports::StockPhotoClient,
};

/// Every domain service trait is implemented on this one struct; the provider
/// clients are the only type parameters.
pub struct Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    pub(crate) llm_client: Arc<L>,
    pub(crate) image_client: Arc<I>,
    pub(crate) stock_photo_client: Arc<S>,
    pub(crate) credentials: Arc<CredentialStore>,
    pub(crate) analysis_retry: RetryPolicy,
    pub(crate) structured_output: bool,
    pub(crate) generation_params: ImageGenerationParams,
    pub(crate) cuisine_keywords: String,
}

impl<L, I, S> Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    pub fn new(
        llm_client: L,
        image_client: I,
        stock_photo_client: S,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            image_client: Arc::new(image_client),
            stock_photo_client: Arc::new(stock_photo_client),
            credentials,
            analysis_retry: RetryPolicy::default(),
            structured_output: true,
            generation_params: ImageGenerationParams::default(),
            cuisine_keywords: "food chinese cuisine".to_string(),
        }
    }

    pub fn with_analysis_retry(mut self, policy: RetryPolicy) -> Self {
        self.analysis_retry = policy;
        self
    }

    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    pub fn with_cuisine_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.cuisine_keywords = keywords.into();
        self
    }

    pub fn credentials(&self) -> Arc<CredentialStore> {
        self.credentials.clone()
    }
}

impl<L, I, S> Clone for Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            image_client: self.image_client.clone(),
            stock_photo_client: self.stock_photo_client.clone(),
            credentials: self.credentials.clone(),
            analysis_retry: self.analysis_retry.clone(),
            structured_output: self.structured_output,
            generation_params: self.generation_params.clone(),
            cuisine_keywords: self.cuisine_keywords.clone(),
        }
    }
}
