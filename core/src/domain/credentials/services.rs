use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    credentials::{ports::CredentialService, value_objects::UpdateApiKeysInput},
    image_generation::ports::ImageGenerationClient,
    menu_analysis::ports::LLMClient,
    stock_photo::ports::StockPhotoClient,
};

impl<L, I, S> CredentialService for Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    async fn check_api_keys(&self) -> bool {
        self.credentials.snapshot().await.has_generation_keys()
    }

    async fn update_api_keys(&self, input: UpdateApiKeysInput) -> Result<(), CoreError> {
        let non_blank = |key: Option<String>| {
            key.map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        };

        let (Some(openrouter_key), Some(fal_key)) =
            (non_blank(input.openrouter_key), non_blank(input.fal_key))
        else {
            return Err(CoreError::Invalid("Missing required API keys".to_string()));
        };

        self.credentials
            .replace_generation_keys(openrouter_key, fal_key)
            .await;

        info!("Generation API keys replaced in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        credentials::{entities::ApiCredentials, store::CredentialStore},
        image_generation::ports::MockImageGenerationClient,
        menu_analysis::ports::MockLLMClient,
        stock_photo::ports::MockStockPhotoClient,
    };

    fn service(
        credentials: ApiCredentials,
    ) -> Service<MockLLMClient, MockImageGenerationClient, MockStockPhotoClient> {
        Service::new(
            MockLLMClient::new(),
            MockImageGenerationClient::new(),
            MockStockPhotoClient::new(),
            Arc::new(CredentialStore::new(credentials)),
        )
    }

    #[tokio::test]
    async fn test_update_makes_keys_visible() {
        let service = service(ApiCredentials::new(
            "your_access_key_here",
            "your_access_key_here",
            "",
        ));
        assert!(!service.check_api_keys().await);

        service
            .update_api_keys(UpdateApiKeysInput {
                openrouter_key: Some("sk-or-new".to_string()),
                fal_key: Some(" fal-new ".to_string()),
            })
            .await
            .unwrap();

        assert!(service.check_api_keys().await);
        assert_eq!(
            service.credentials().fal_key().await,
            Ok("fal-new".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_rejects_blank_key() {
        let service = service(ApiCredentials::new("sk-or-old", "fal-old", ""));

        let result = service
            .update_api_keys(UpdateApiKeysInput {
                openrouter_key: Some("sk-or-new".to_string()),
                fal_key: Some("   ".to_string()),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::Invalid("Missing required API keys".to_string()))
        );
        assert_eq!(
            service.credentials().openrouter_key().await,
            Ok("sk-or-old".to_string())
        );
    }
}
