/// Languages the prompts are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Chinese,
    French,
    Italian,
    English,
}

impl Language {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh-tw" => Some(Language::Chinese),
            "fr" | "fr-fr" => Some(Language::French),
            "it" | "it-it" => Some(Language::Italian),
            "en" | "en-us" | "en-gb" => Some(Language::English),
            _ => None,
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or(Language::English)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::French => "fr",
            Language::Italian => "it",
            Language::English => "en-us",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::English => "English",
        }
    }
}
