use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use menulens_core::domain::common::{
    AnalyzerConfig, FalConfig, MenuLensConfig, OpenRouterConfig, UnsplashConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "menulens-api", version, about = "Menu photo analysis and dish image generation API")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openrouter: OpenRouterArgs,

    #[command(flatten)]
    pub fal: FalArgs,

    #[command(flatten)]
    pub unsplash: UnsplashArgs,

    #[command(flatten)]
    pub analyzer: AnalyzerArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,

    #[arg(long = "tls-cert", env = "TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "tls-key", env = "TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OpenRouterArgs {
    #[arg(id = "openrouter_api_key", long = "openrouter-api-key", env = "OPENROUTER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(id = "openrouter_base_url", long = "openrouter-base-url", env = "OPENROUTER_BASE_URL", default_value = "https://openrouter.ai/api/v1")]
    pub base_url: Url,

    #[arg(long = "openrouter-vision-model", env = "OPENROUTER_VISION_MODEL", default_value = "anthropic/claude-3.5-sonnet-20240620")]
    pub vision_model: String,

    #[arg(long = "openrouter-caption-model", env = "OPENROUTER_CAPTION_MODEL", default_value = "openai/gpt-3.5-turbo")]
    pub caption_model: String,

    #[arg(long = "app-url", env = "APP_URL", default_value = "http://localhost:3000")]
    pub app_url: String,

    #[arg(long = "app-title", env = "APP_TITLE", default_value = "AI-Menu-Generator")]
    pub app_title: String,

    #[arg(long = "openrouter-structured-output", env = "OPENROUTER_STRUCTURED_OUTPUT", default_value_t = true, action = ArgAction::Set)]
    pub structured_output: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct FalArgs {
    #[arg(id = "fal_api_key", long = "fal-api-key", env = "FAL_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "fal-queue-url", env = "FAL_QUEUE_URL", default_value = "https://queue.fal.run")]
    pub queue_url: Url,

    #[arg(long = "fal-model", env = "FAL_MODEL", default_value = "fal-ai/fast-sdxl")]
    pub model: String,

    #[arg(long = "fal-poll-interval-ms", env = "FAL_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub poll_interval_ms: u64,

    #[arg(long = "fal-timeout-secs", env = "FAL_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UnsplashArgs {
    #[arg(long = "unsplash-access-key", env = "UNSPLASH_ACCESS_KEY", default_value = "", hide_env_values = true)]
    pub access_key: String,

    #[arg(id = "unsplash_base_url", long = "unsplash-base-url", env = "UNSPLASH_BASE_URL", default_value = "https://api.unsplash.com")]
    pub base_url: Url,

    #[arg(long = "unsplash-keywords", env = "UNSPLASH_KEYWORDS", default_value = "food chinese cuisine")]
    pub keywords: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackoffKind {
    Fixed,
    Exponential,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzerArgs {
    #[arg(long = "analyzer-max-attempts", env = "ANALYZER_MAX_ATTEMPTS", default_value_t = 3)]
    pub max_attempts: u32,

    #[arg(long = "analyzer-retry-delay-ms", env = "ANALYZER_RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,

    #[arg(long = "analyzer-backoff", env = "ANALYZER_BACKOFF", value_enum, default_value_t = BackoffKind::Fixed)]
    pub backoff: BackoffKind,
}

impl From<Args> for MenuLensConfig {
    fn from(args: Args) -> Self {
        MenuLensConfig {
            openrouter: OpenRouterConfig {
                api_key: args.openrouter.api_key,
                base_url: args.openrouter.base_url.to_string(),
                vision_model: args.openrouter.vision_model,
                caption_model: args.openrouter.caption_model,
                app_url: args.openrouter.app_url,
                app_title: args.openrouter.app_title,
                structured_output: args.openrouter.structured_output,
            },
            fal: FalConfig {
                api_key: args.fal.api_key,
                queue_url: args.fal.queue_url.to_string(),
                model: args.fal.model,
                poll_interval: Duration::from_millis(args.fal.poll_interval_ms),
                timeout: Duration::from_secs(args.fal.timeout_secs),
            },
            unsplash: UnsplashConfig {
                access_key: args.unsplash.access_key,
                base_url: args.unsplash.base_url.to_string(),
                cuisine_keywords: args.unsplash.keywords,
            },
            analyzer: AnalyzerConfig {
                max_attempts: args.analyzer.max_attempts,
                retry_delay: Duration::from_millis(args.analyzer.retry_delay_ms),
                exponential_backoff: args.analyzer.backoff == BackoffKind::Exponential,
            },
        }
    }
}
