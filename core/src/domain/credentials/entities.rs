use std::fmt;

use crate::domain::common::is_configured_key;

/// Provider keys held in process memory for the lifetime of the server.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    pub openrouter_key: String,
    pub fal_key: String,
    pub unsplash_access_key: String,
}

impl ApiCredentials {
    pub fn new(
        openrouter_key: impl Into<String>,
        fal_key: impl Into<String>,
        unsplash_access_key: impl Into<String>,
    ) -> Self {
        Self {
            openrouter_key: openrouter_key.into(),
            fal_key: fal_key.into(),
            unsplash_access_key: unsplash_access_key.into(),
        }
    }

    /// Both keys needed for analysis and generation are set to real values.
    pub fn has_generation_keys(&self) -> bool {
        is_configured_key(&self.openrouter_key) && is_configured_key(&self.fal_key)
    }
}

fn redact(key: &str) -> &'static str {
    if is_configured_key(key) { "<set>" } else { "<unset>" }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("openrouter_key", &redact(&self.openrouter_key))
            .field("fal_key", &redact(&self.fal_key))
            .field("unsplash_access_key", &redact(&self.unsplash_access_key))
            .finish()
    }
}
