use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    image_generation::ports::ImageGenerationClient,
    menu_analysis::{
        entities::Dish,
        helpers::parse_dish_list,
        ports::{LLMClient, MenuAnalysisService},
        prompts::menu_analysis_prompt,
        schema::get_dish_list_schema,
        value_objects::{AnalyzeMenuInput, ImageInput},
    },
    stock_photo::ports::StockPhotoClient,
};

impl<L, I, S> MenuAnalysisService for Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    #[instrument(skip_all, fields(image_size = input.image_data.len()))]
    async fn analyze_menu(&self, input: AnalyzeMenuInput) -> Result<Vec<Dish>, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("No image provided".to_string()));
        }

        let prompt = menu_analysis_prompt(input.language.as_deref());
        let image = ImageInput::new(input.image_data, input.mime_type);
        let response_schema = self.structured_output.then(get_dish_list_schema);
        let llm_client = &self.llm_client;

        let dishes = self
            .analysis_retry
            .run("analyze_menu", CoreError::is_retryable, |attempt| {
                let prompt = prompt.clone();
                let image = image.clone();
                let response_schema = response_schema.clone();

                async move {
                    info!(attempt, "Requesting menu analysis");
                    let raw_response = llm_client
                        .generate_with_image(prompt, image, response_schema)
                        .await?;

                    parse_dish_list(&raw_response)
                }
            })
            .await?;

        info!(dish_count = dishes.len(), "Menu analysis succeeded");
        Ok(dishes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::domain::{
        common::retry::RetryPolicy,
        credentials::{entities::ApiCredentials, store::CredentialStore},
        image_generation::ports::MockImageGenerationClient,
        menu_analysis::ports::MockLLMClient,
        stock_photo::ports::MockStockPhotoClient,
    };

    fn service(
        llm: MockLLMClient,
    ) -> Service<MockLLMClient, MockImageGenerationClient, MockStockPhotoClient> {
        Service::new(
            llm,
            MockImageGenerationClient::new(),
            MockStockPhotoClient::new(),
            Arc::new(CredentialStore::new(ApiCredentials::default())),
        )
        .with_analysis_retry(RetryPolicy::fixed(3, Duration::ZERO))
    }

    fn input() -> AnalyzeMenuInput {
        AnalyzeMenuInput {
            image_data: vec![0xff, 0xd8, 0xff],
            mime_type: Some("image/png".to_string()),
            language: None,
        }
    }

    #[tokio::test]
    async fn test_extracts_dishes_embedded_in_prose() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .withf(|prompt, image, schema| {
                prompt.system.contains("dishes")
                    && image.mime_type == "image/png"
                    && schema.is_some()
            })
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok(r#"Here is what I found: {"dishes": [{"name": "Kung Pao Chicken", "type": "Main", "description": "Diced chicken with peanuts"}]} Hope it helps!"#.to_string())
                })
            });

        let dishes = service(llm).analyze_menu(input()).await.unwrap();

        assert_eq!(
            dishes,
            vec![Dish::new(
                "Kung Pao Chicken",
                "Main",
                "Diced chicken with peanuts"
            )]
        );
    }

    #[tokio::test]
    async fn test_exhausts_attempts_without_json() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(3)
            .returning(|_, _, _| Box::pin(async { Ok("Sorry, I cannot help.".to_string()) }));

        let result = service(llm).analyze_menu(input()).await;

        assert_eq!(result, Err(CoreError::NoJsonFound));
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_retried_then_surfaced() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(3)
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok(r#"{"dishes": [{"name": "Mapo Tofu", "description": "spicy"}]}"#.to_string())
                })
            });

        let result = service(llm).analyze_menu(input()).await;

        assert!(matches!(result, Err(CoreError::SchemaMismatch(_))));
    }

    #[tokio::test]
    async fn test_recovers_after_upstream_failure() {
        let mut llm = MockLLMClient::new();
        let mut seq = mockall::Sequence::new();
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError(
                        "No response choices available".to_string(),
                    ))
                })
            });
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Box::pin(async { Ok(r#"{"dishes": []}"#.to_string()) }));

        let dishes = service(llm).analyze_menu(input()).await.unwrap();

        assert!(dishes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_are_not_retried() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async { Err(CoreError::MissingCredentials("OpenRouter".to_string())) })
            });

        let result = service(llm).analyze_menu(input()).await;

        assert!(matches!(result, Err(CoreError::MissingCredentials(_))));
    }

    #[tokio::test]
    async fn test_empty_image_is_rejected_without_calling_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().times(0);

        let result = service(llm)
            .analyze_menu(AnalyzeMenuInput {
                image_data: vec![],
                mime_type: None,
                language: None,
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::Invalid("No image provided".to_string()))
        );
    }

    #[tokio::test]
    async fn test_structured_output_can_be_disabled() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, _, schema| schema.is_none())
            .returning(|_, _, _| Box::pin(async { Ok(r#"{"dishes": []}"#.to_string()) }));

        let result = service(llm)
            .with_structured_output(false)
            .analyze_menu(input())
            .await;

        assert_eq!(result, Ok(vec![]));
    }
}
