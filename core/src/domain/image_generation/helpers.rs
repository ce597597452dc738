use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

const QUOTA_EXHAUSTED_MARKER: &str = "Exhausted balance";

static MARKDOWN_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\(.*?\)").expect("valid regex"));
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strips markdown images, code fences, bracketed text and URLs from a model
/// caption and collapses what is left onto one line.
pub fn clean_caption(caption: &str) -> String {
    let text = MARKDOWN_IMAGE.replace_all(caption, "");
    let text = CODE_FENCE.replace_all(&text, "");
    let text = BRACKETED.replace_all(&text, "");
    let text = URL.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}

pub fn build_photography_prompt(description: &str) -> String {
    format!(
        "A professional food photograph of {}. Shot with a high-end DSLR camera, using natural lighting, shallow depth of field (f/2.8), and styled for a luxury restaurant menu. 8K resolution, hyperrealistic details, professional food photography composition.",
        description
    )
}

pub fn is_quota_exhausted(message: &str) -> bool {
    message.contains(QUOTA_EXHAUSTED_MARKER)
}

/// Maps a provider failure to the error surfaced to callers: quota exhaustion
/// keeps its dedicated variant, caller errors pass through, everything else is
/// wrapped as a generic generation failure.
pub fn map_generation_error(error: CoreError) -> CoreError {
    match error {
        CoreError::QuotaExhausted => CoreError::QuotaExhausted,
        e if is_quota_exhausted(&e.to_string()) => CoreError::QuotaExhausted,
        e @ (CoreError::Invalid(_) | CoreError::MissingCredentials(_)) => e,
        e => CoreError::ExternalServiceError(format!("Failed to generate image: {}", e)),
    }
}
