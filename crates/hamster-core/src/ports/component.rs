//! Component port trait.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{Component, ComponentQuery, ComponentWrite, Page, StockChange, StockLog};

/// Backend operations on components, their stock and their audit logs.
///
/// # Design
///
/// - Writes take a validated [`ComponentWrite`], never a draft
/// - Stock arithmetic and the non-negative check happen in the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComponentPort: Send + Sync {
    /// List one page of components matching the query.
    async fn list(&self, query: &ComponentQuery) -> ApiResult<Page<Component>>;

    /// Get a component by ID, with its category embedded.
    async fn get(&self, id: i64) -> ApiResult<Component>;

    /// Create a component. Returns it with its server-assigned ID.
    async fn create(&self, component: &ComponentWrite) -> ApiResult<Component>;

    /// Update an existing component. The ID never changes.
    async fn update(&self, id: i64, component: &ComponentWrite) -> ApiResult<Component>;

    async fn delete(&self, id: i64) -> ApiResult<()>;

    /// Apply a signed stock delta; the backend appends a stock log.
    ///
    /// Returns the component with its new quantity.
    async fn adjust_stock(&self, id: i64, change: &StockChange) -> ApiResult<Component>;

    /// Most recent stock logs for one component.
    ///
    /// The backend defaults to 50 entries when `limit` is `None`.
    async fn logs(&self, id: i64, limit: Option<u32>) -> ApiResult<Vec<StockLog>>;
}
