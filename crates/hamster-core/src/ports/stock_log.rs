//! Global stock history port trait.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{Page, StockLog};

/// Read access to the global, append-only stock history.
#[async_trait]
pub trait StockLogPort: Send + Sync {
    /// One page of stock logs, newest first, components embedded.
    async fn list(&self, page: u32, page_size: u32) -> ApiResult<Page<StockLog>>;
}
