use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilter {
    High,
}

impl ContentFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFilter::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Relevant,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Relevant => "relevant",
        }
    }
}

/// One-photo search sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPhotoInput {
    pub query: String,
    pub orientation: Orientation,
    pub content_filter: Option<ContentFilter>,
    pub order_by: Option<OrderBy>,
}

impl SearchPhotoInput {
    pub fn landscape(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            orientation: Orientation::Landscape,
            content_filter: None,
            order_by: None,
        }
    }
}

/// Dish name plus hand-tuned search terms for batch lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPhotoQuery {
    pub name: String,
    pub search_terms: String,
}
