#[derive(Debug, Clone)]
pub struct AnalyzeMenuInput {
    pub image_data: Vec<u8>,
    pub mime_type: Option<String>,
    pub language: Option<String>,
}

/// System and user messages of a single chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub const DEFAULT_MIME_TYPE: &'static str = "image/jpeg";

    pub fn new(data: Vec<u8>, mime_type: Option<String>) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| Self::DEFAULT_MIME_TYPE.to_string());

        Self { data, mime_type }
    }
}
