use tokio::sync::RwLock;

use crate::domain::{
    common::{entities::app_errors::CoreError, is_configured_key},
    credentials::entities::ApiCredentials,
};

/// Shared credential holder handed to every provider client at construction.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<ApiCredentials>,
}

impl CredentialStore {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            inner: RwLock::new(credentials),
        }
    }

    pub async fn snapshot(&self) -> ApiCredentials {
        self.inner.read().await.clone()
    }

    pub async fn openrouter_key(&self) -> Result<String, CoreError> {
        let key = self.inner.read().await.openrouter_key.clone();
        require(key, "OpenRouter")
    }

    pub async fn fal_key(&self) -> Result<String, CoreError> {
        let key = self.inner.read().await.fal_key.clone();
        require(key, "fal.ai")
    }

    pub async fn unsplash_access_key(&self) -> Result<String, CoreError> {
        let key = self.inner.read().await.unsplash_access_key.clone();
        require(key, "Unsplash")
    }

    /// Both keys are swapped under a single write lock.
    pub async fn replace_generation_keys(&self, openrouter_key: String, fal_key: String) {
        let mut guard = self.inner.write().await;
        guard.openrouter_key = openrouter_key;
        guard.fal_key = fal_key;
    }
}

fn require(key: String, provider: &str) -> Result<String, CoreError> {
    if is_configured_key(&key) {
        Ok(key)
    } else {
        tracing::warn!(provider = %provider, "API key is not configured");
        Err(CoreError::MissingCredentials(provider.to_string()))
    }
}
