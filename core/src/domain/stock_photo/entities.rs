use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhotoCredit {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockPhoto {
    pub url: String,
    pub credit: PhotoCredit,
}

/// Result of one batch lookup; `photo` is `None` when nothing was found or
/// the provider failed for this dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishPhotoLookup {
    pub name: String,
    pub photo: Option<StockPhoto>,
}
