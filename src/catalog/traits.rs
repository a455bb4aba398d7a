use async_trait::async_trait;

use crate::error::AppResult;

use super::product::Product;

/// Source of the two product collections shown across the recap.
///
/// Each call is a single shot: no pagination, no retry. Callers treat any
/// error as terminal for that attempt.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_saved(&self, limit: usize) -> AppResult<Vec<Product>>;

    async fn fetch_recommended(&self, limit: usize) -> AppResult<Vec<Product>>;
}
