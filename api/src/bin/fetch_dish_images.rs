use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use menulens_api::application::logger::init_logger;
use menulens_api::args::{LogArgs, UnsplashArgs};
use menulens_core::{
    application::create_service,
    domain::{
        common::{MenuLensConfig, UnsplashConfig},
        stock_photo::{entities::StockPhoto, ports::StockPhotoService, value_objects::DishPhotoQuery},
    },
};
use tracing::{info, warn};

/// Resolves a stock photo for each dish and writes the results to a JSON file.
#[derive(Debug, Parser)]
#[command(name = "fetch-dish-images", version)]
struct Cli {
    /// JSON array of `{"name", "searchTerms"}` objects; the built-in dish list is used when absent.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value = "dish-images.json")]
    output: PathBuf,

    /// Pause between two lookups, to stay under the provider rate limit.
    #[arg(long, env = "FETCH_PACING_MS", default_value_t = 1000)]
    pacing_ms: u64,

    #[command(flatten)]
    log: LogArgs,

    #[command(flatten)]
    unsplash: UnsplashArgs,
}

const DEFAULT_DISHES: &[(&str, &str)] = &[
    ("宫保鸡丁", "kung pao chicken diced chicken peanuts chinese spicy sichuan"),
    ("麻婆豆腐", "mapo tofu sichuan spicy soft tofu chinese"),
    ("糖醋里脊", "sweet and sour pork crispy chinese cantonese"),
    ("红烧狮子头", "braised meatballs chinese pork lion head shanghai"),
    ("清蒸鲈鱼", "steamed fish chinese sea bass cantonese fresh"),
    ("东坡肉", "dongpo pork braised pork belly chinese hangzhou"),
    ("水煮鱼", "sichuan boiled fish spicy chinese sliced fish"),
    ("佛跳墙", "buddha jumps over the wall chinese luxury soup abalone"),
    ("小笼包", "xiaolongbao soup dumplings steamed buns chinese dim sum"),
];

fn default_queries() -> Vec<DishPhotoQuery> {
    DEFAULT_DISHES
        .iter()
        .map(|(name, terms)| DishPhotoQuery {
            name: name.to_string(),
            search_terms: terms.to_string(),
        })
        .collect()
}

async fn load_queries(input: Option<&PathBuf>) -> Result<Vec<DishPhotoQuery>, anyhow::Error> {
    let Some(path) = input else {
        return Ok(default_queries());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a valid dish list", path.display()))
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logger(&cli.log);

    let queries = load_queries(cli.input.as_ref()).await?;

    let config = MenuLensConfig {
        unsplash: UnsplashConfig {
            access_key: cli.unsplash.access_key,
            base_url: cli.unsplash.base_url.to_string(),
            cuisine_keywords: cli.unsplash.keywords,
        },
        ..MenuLensConfig::default()
    };
    let service = create_service(config).await?;

    let lookups = service
        .fetch_dish_photos(queries, Duration::from_millis(cli.pacing_ms))
        .await;

    let total = lookups.len();
    let images: BTreeMap<String, StockPhoto> = lookups
        .into_iter()
        .filter_map(|lookup| match lookup.photo {
            Some(photo) => Some((lookup.name, photo)),
            None => {
                warn!(dish = %lookup.name, "Skipping dish without image");
                None
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&images)?;
    tokio::fs::write(&cli.output, json)
        .await
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        found = images.len(),
        total,
        output = %cli.output.display(),
        "Dish images saved"
    );

    Ok(())
}
