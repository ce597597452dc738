use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, instrument};
use url::Url;

use crate::domain::{
    common::{UnsplashConfig, entities::app_errors::CoreError},
    credentials::store::CredentialStore,
    stock_photo::{
        entities::{PhotoCredit, StockPhoto},
        ports::StockPhotoClient,
        value_objects::SearchPhotoInput,
    },
};

#[derive(Debug, Clone)]
pub struct UnsplashClient {
    config: UnsplashConfig,
    credentials: Arc<CredentialStore>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
    user: PhotoUser,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct PhotoUser {
    name: String,
    links: UserLinks,
}

#[derive(Debug, Deserialize)]
struct UserLinks {
    html: String,
}

impl UnsplashClient {
    pub fn new(config: UnsplashConfig, credentials: Arc<CredentialStore>) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    fn search_url(&self, input: &SearchPhotoInput) -> Result<Url, CoreError> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base)
            .and_then(|base| base.join("search/photos"))
            .map_err(|e| {
                error!("Invalid Unsplash base URL {}: {}", self.config.base_url, e);
                CoreError::InternalServerError
            })?;

        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("query", &input.query)
                .append_pair("per_page", "1")
                .append_pair("orientation", input.orientation.as_str());
            if let Some(filter) = input.content_filter {
                query.append_pair("content_filter", filter.as_str());
            }
            if let Some(order_by) = input.order_by {
                query.append_pair("order_by", order_by.as_str());
            }
        }

        Ok(url)
    }
}

impl StockPhotoClient for UnsplashClient {
    #[instrument(skip(self), fields(query = %input.query))]
    async fn search_photo(&self, input: SearchPhotoInput) -> Result<Option<StockPhoto>, CoreError> {
        let access_key = self.credentials.unsplash_access_key().await?;
        let url = self.search_url(&input)?;

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Client-ID {}", access_key))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| {
                error!("Unsplash API request failed: {}", e);
                CoreError::ExternalServiceError("Failed to fetch image".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Unsplash API error: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(provider_error_message(&body)));
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Unsplash response: {}", e);
            CoreError::ExternalServiceError("Failed to fetch image".to_string())
        })?;

        Ok(first_photo(search))
    }
}

/// First entry of the provider's `errors` array, if the body carries one.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.errors.into_iter().next())
        .unwrap_or_else(|| "Failed to fetch image".to_string())
}

fn first_photo(search: SearchResponse) -> Option<StockPhoto> {
    search.results.into_iter().next().map(|photo| StockPhoto {
        url: photo.urls.regular,
        credit: PhotoCredit {
            name: photo.user.name,
            link: photo.user.links.html,
        },
    })
}
