use std::time::Duration;

pub mod entities;
pub mod language;
pub mod retry;
pub mod services;

pub const PLACEHOLDER_API_KEY: &str = "your_access_key_here";

#[derive(Clone, Debug, Default)]
pub struct MenuLensConfig {
    pub openrouter: OpenRouterConfig,
    pub fal: FalConfig,
    pub unsplash: UnsplashConfig,
    pub analyzer: AnalyzerConfig,
}

#[derive(Clone, Debug)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub vision_model: String,
    pub caption_model: String,
    pub app_url: String,
    pub app_title: String,
    pub structured_output: bool,
}

#[derive(Clone, Debug)]
pub struct FalConfig {
    pub api_key: String,
    pub queue_url: String,
    pub model: String,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct UnsplashConfig {
    pub access_key: String,
    pub base_url: String,
    pub cuisine_keywords: String,
}

#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub exponential_backoff: bool,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            vision_model: "anthropic/claude-3.5-sonnet-20240620".to_string(),
            caption_model: "openai/gpt-3.5-turbo".to_string(),
            app_url: "http://localhost:3000".to_string(),
            app_title: "AI-Menu-Generator".to_string(),
            structured_output: true,
        }
    }
}

impl Default for FalConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            queue_url: "https://queue.fal.run".to_string(),
            model: "fal-ai/fast-sdxl".to_string(),
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(300),
        }
    }
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            base_url: "https://api.unsplash.com".to_string(),
            cuisine_keywords: "food chinese cuisine".to_string(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            exponential_backoff: false,
        }
    }
}

/// A key counts as configured when it is non-blank and not the sample value.
pub fn is_configured_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}
