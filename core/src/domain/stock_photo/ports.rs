use std::future::Future;
use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stock_photo::{
        entities::{DishPhotoLookup, StockPhoto},
        value_objects::{DishPhotoQuery, SearchPhotoInput},
    },
};

/// Client for a stock photo search provider
#[cfg_attr(test, mockall::automock)]
pub trait StockPhotoClient: Send + Sync {
    /// Returns the best match, or `None` when the search has no results.
    fn search_photo(
        &self,
        input: SearchPhotoInput,
    ) -> impl Future<Output = Result<Option<StockPhoto>, CoreError>> + Send;
}

/// Service trait for the stock photo fallback
#[cfg_attr(test, mockall::automock)]
pub trait StockPhotoService: Send + Sync {
    fn search_photo(
        &self,
        query: String,
    ) -> impl Future<Output = Result<StockPhoto, CoreError>> + Send;

    fn fetch_dish_photos(
        &self,
        queries: Vec<DishPhotoQuery>,
        pacing: Duration,
    ) -> impl Future<Output = Vec<DishPhotoLookup>> + Send;
}
