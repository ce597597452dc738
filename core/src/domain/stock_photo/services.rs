use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    image_generation::ports::ImageGenerationClient,
    menu_analysis::ports::LLMClient,
    stock_photo::{
        entities::{DishPhotoLookup, StockPhoto},
        ports::{StockPhotoClient, StockPhotoService},
        value_objects::{ContentFilter, DishPhotoQuery, OrderBy, SearchPhotoInput},
    },
};

impl<L, I, S> StockPhotoService for Service<L, I, S>
where
    L: LLMClient,
    I: ImageGenerationClient,
    S: StockPhotoClient,
{
    #[instrument(skip(self))]
    async fn search_photo(&self, query: String) -> Result<StockPhoto, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::Invalid("Query parameter is required".to_string()));
        }

        let full_query = match self.cuisine_keywords.trim() {
            "" => query.to_string(),
            keywords => format!("{} {}", query, keywords),
        };

        self.stock_photo_client
            .search_photo(SearchPhotoInput::landscape(full_query))
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn fetch_dish_photos(
        &self,
        queries: Vec<DishPhotoQuery>,
        pacing: Duration,
    ) -> Vec<DishPhotoLookup> {
        let mut lookups = Vec::with_capacity(queries.len());

        for (index, query) in queries.into_iter().enumerate() {
            if index > 0 && !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }

            info!(dish = %query.name, "Fetching image");
            let input = SearchPhotoInput {
                content_filter: Some(ContentFilter::High),
                order_by: Some(OrderBy::Relevant),
                ..SearchPhotoInput::landscape(query.search_terms)
            };

            let photo = match self.stock_photo_client.search_photo(input).await {
                Ok(Some(photo)) => Some(photo),
                Ok(None) => {
                    warn!(dish = %query.name, "No image found");
                    None
                }
                Err(e) => {
                    warn!(dish = %query.name, error = %e, "Image lookup failed");
                    None
                }
            };

            lookups.push(DishPhotoLookup {
                name: query.name,
                photo,
            });
        }

        lookups
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
        stock_photo::{entities::PhotoCredit, ports::MockStockPhotoClient},
    };

    fn service(
        photos: MockStockPhotoClient,
    ) -> Service<MockLLMClient, MockImageGenerationClient, MockStockPhotoClient> {
        Service::new(
            MockLLMClient::new(),
            MockImageGenerationClient::new(),
            photos,
            Arc::new(CredentialStore::new(ApiCredentials::default())),
        )
    }

    fn photo(url: &str) -> StockPhoto {
        StockPhoto {
            url: url.to_string(),
            credit: PhotoCredit {
                name: "Jane Doe".to_string(),
                link: "https://unsplash.com/@janedoe".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_search_appends_cuisine_keywords() {
        let mut photos = MockStockPhotoClient::new();
        photos
            .expect_search_photo()
            .times(1)
            .withf(|input| {
                input.query == "mapo tofu food chinese cuisine"
                    && input.orientation.as_str() == "landscape"
            })
            .returning(|_| Box::pin(async { Ok(Some(photo("https://images.unsplash.com/1"))) }));

        let result = service(photos).search_photo("mapo tofu".to_string()).await;

        assert_eq!(result, Ok(photo("https://images.unsplash.com/1")));
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let mut photos = MockStockPhotoClient::new();
        photos.expect_search_photo().times(0);

        let result = service(photos).search_photo("  ".to_string()).await;

        assert_eq!(
            result,
            Err(CoreError::Invalid("Query parameter is required".to_string()))
        );
    }

    #[tokio::test]
    async fn test_zero_results_is_not_found() {
        let mut photos = MockStockPhotoClient::new();
        photos
            .expect_search_photo()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(photos).search_photo("zzzz".to_string()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_batch_records_misses_and_failures() {
        let mut photos = MockStockPhotoClient::new();
        photos
            .expect_search_photo()
            .times(3)
            .returning(|input| {
                let query = input.query.clone();
                Box::pin(async move {
                    match query.as_str() {
                        "mapo tofu sichuan" => Ok(Some(photo("https://images.unsplash.com/mapo"))),
                        "xiaolongbao" => Ok(None),
                        _ => Err(CoreError::ExternalServiceError("rate limited".to_string())),
                    }
                })
            });

        let queries = vec![
            DishPhotoQuery {
                name: "麻婆豆腐".to_string(),
                search_terms: "mapo tofu sichuan".to_string(),
            },
            DishPhotoQuery {
                name: "小笼包".to_string(),
                search_terms: "xiaolongbao".to_string(),
            },
            DishPhotoQuery {
                name: "佛跳墙".to_string(),
                search_terms: "buddha jumps over the wall".to_string(),
            },
        ];

        let lookups = service(photos)
            .fetch_dish_photos(queries, Duration::ZERO)
            .await;

        assert_eq!(lookups.len(), 3);
        assert_eq!(
            lookups[0].photo,
            Some(photo("https://images.unsplash.com/mapo"))
        );
        assert_eq!(lookups[1].photo, None);
        assert_eq!(lookups[2].name, "佛跳墙");
        assert_eq!(lookups[2].photo, None);
    }
}
