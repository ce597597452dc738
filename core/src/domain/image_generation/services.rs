use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, language::Language, services::Service},
    image_generation::{
        entities::GenerationResult,
        helpers::{build_photography_prompt, clean_caption, map_generation_error},
        ports::{ImageGenerationClient, ImageGenerationService},
        prompts::caption_prompt,
        value_objects::{GenerateImageInput, ImageGenerationRequest},
    },
    menu_analysis::ports::LLMClient,
    stock_photo::ports::StockPhotoClient,
};

impl<L, I, S> ImageGenerationService for Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    #[instrument(skip_all, fields(dish = %input.name, language = %input.language))]
    async fn generate_image(&self, input: GenerateImageInput) -> Result<GenerationResult, CoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid("No dish name provided".to_string()));
        }

        // 1. Caption
        let language = Language::from_code(&input.language);
        let caption = self
            .llm_client
            .generate_with_text(caption_prompt(language, name))
            .await
            .map_err(|e| {
                error!("Caption request failed: {}", e);
                map_generation_error(e)
            })?;
        debug!(caption = %caption, "Received caption");

        // 2. Clean and wrap
        let description = match clean_caption(&caption) {
            cleaned if cleaned.is_empty() => name.to_string(),
            cleaned => cleaned,
        };
        let prompt = build_photography_prompt(&description);
        info!(prompt = %prompt, "Built image prompt");

        // 3. Generate
        let output = self
            .image_client
            .generate(ImageGenerationRequest {
                prompt: prompt.clone(),
                params: self.generation_params.clone(),
            })
            .await
            .map_err(|e| {
                error!("Image generation failed: {}", e);
                map_generation_error(e)
            })?;

        if output.images.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Failed to generate image: no images returned".to_string(),
            ));
        }

        Ok(GenerationResult {
            images: output.images,
            model: output.model,
            prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        credentials::{entities::ApiCredentials, store::CredentialStore},
        image_generation::{
            entities::{GeneratedImage, GenerationOutput},
            ports::MockImageGenerationClient,
        },
        menu_analysis::ports::MockLLMClient,
        stock_photo::ports::MockStockPhotoClient,
    };

    fn service(
        llm: MockLLMClient,
        images: MockImageGenerationClient,
    ) -> Service<MockLLMClient, MockImageGenerationClient, MockStockPhotoClient> {
        Service::new(
            llm,
            images,
            MockStockPhotoClient::new(),
            Arc::new(CredentialStore::new(ApiCredentials::default())),
        )
    }

    fn input(name: &str) -> GenerateImageInput {
        GenerateImageInput {
            name: name.to_string(),
            language: "en-us".to_string(),
        }
    }

    fn caption_llm(caption: &'static str) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(caption.to_string()) }));
        llm
    }

    #[tokio::test]
    async fn test_generates_image_from_cleaned_caption() {
        let llm = caption_llm(
            "![dish](https://img.example.com/a.png) Kung Pao Chicken with peanuts https://example.com",
        );
        let mut images = MockImageGenerationClient::new();
        images
            .expect_generate()
            .times(1)
            .withf(|request| {
                request.prompt.starts_with("A professional food photograph of Kung Pao Chicken with peanuts.")
                    && !request.prompt.contains("http")
                    && request.params.num_inference_steps == 50
            })
            .returning(|_| {
                Box::pin(async {
                    Ok(GenerationOutput {
                        images: vec![GeneratedImage {
                            url: "https://fal.media/files/kung-pao.jpeg".to_string(),
                            seed: Some(42),
                            mime_type: "image/jpeg".to_string(),
                        }],
                        model: "fal-ai/fast-sdxl".to_string(),
                    })
                })
            });

        let result = service(llm, images)
            .generate_image(input("Kung Pao Chicken"))
            .await
            .unwrap();

        assert_eq!(result.image_url(), Some("https://fal.media/files/kung-pao.jpeg"));
        assert_eq!(result.model, "fal-ai/fast-sdxl");
        assert!(result.prompt.contains("Kung Pao Chicken with peanuts"));
    }

    #[tokio::test]
    async fn test_empty_caption_falls_back_to_dish_name() {
        let llm = caption_llm("[image] https://example.com/only-a-link");
        let mut images = MockImageGenerationClient::new();
        images
            .expect_generate()
            .withf(|request| request.prompt.starts_with("A professional food photograph of Mapo Tofu."))
            .returning(|_| {
                Box::pin(async {
                    Ok(GenerationOutput {
                        images: vec![GeneratedImage {
                            url: "https://fal.media/files/mapo.jpeg".to_string(),
                            seed: None,
                            mime_type: "image/jpeg".to_string(),
                        }],
                        model: "fal-ai/fast-sdxl".to_string(),
                    })
                })
            });

        let result = service(llm, images).generate_image(input(" Mapo Tofu ")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_exhausted_balance_is_reported_as_quota_error() {
        let llm = caption_llm("Kung Pao Chicken");
        let mut images = MockImageGenerationClient::new();
        images.expect_generate().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "fal.ai returned 403 Forbidden: {\"detail\": \"User is locked. Reason: Exhausted balance.\"}"
                        .to_string(),
                ))
            })
        });

        let result = service(llm, images)
            .generate_image(input("Kung Pao Chicken"))
            .await;

        assert_eq!(result, Err(CoreError::QuotaExhausted));
    }

    #[tokio::test]
    async fn test_generic_failure_is_wrapped_and_not_retried() {
        let llm = caption_llm("Kung Pao Chicken");
        let mut images = MockImageGenerationClient::new();
        images.expect_generate().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError("connection refused".to_string()))
            })
        });

        let result = service(llm, images)
            .generate_image(input("Kung Pao Chicken"))
            .await;

        assert_eq!(
            result,
            Err(CoreError::ExternalServiceError(
                "Failed to generate image: connection refused".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(0);

        let result = service(llm, MockImageGenerationClient::new())
            .generate_image(input("   "))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Invalid("No dish name provided".to_string()))
        );
    }
}
