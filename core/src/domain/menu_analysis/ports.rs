use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_analysis::{
        entities::Dish,
        value_objects::{AnalyzeMenuInput, ChatPrompt, ImageInput},
    },
};

/// LLM Client trait for calling chat completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Multimodal completion. `response_schema` asks the provider for
    /// structured JSON output when set.
    fn generate_with_image(
        &self,
        prompt: ChatPrompt,
        image: ImageInput,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: ChatPrompt,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for menu analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait MenuAnalysisService: Send + Sync {
    fn analyze_menu(
        &self,
        input: AnalyzeMenuInput,
    ) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;
}
