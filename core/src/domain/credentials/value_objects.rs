#[derive(Debug, Clone)]
pub struct UpdateApiKeysInput {
    pub openrouter_key: Option<String>,
    pub fal_key: Option<String>,
}
