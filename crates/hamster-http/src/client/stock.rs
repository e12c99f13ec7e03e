//! Stock adjustment and stock log endpoints.

use hamster_core::{Component, Page, StockChange, StockLog};

use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::url::{component_logs_url, component_stock_url, stock_logs_url};

use super::InventoryClient;

impl<B: HttpBackend> InventoryClient<B> {
    /// `POST /components/{id}/stock` with `{amount, reason}`.
    ///
    /// The backend answers 400 when the change would make stock negative.
    pub(crate) async fn adjust_stock(
        &self,
        id: i64,
        change: &StockChange,
    ) -> HttpResult<Component> {
        self.post_data(component_stock_url(&self.base_url, id), change)
            .await
    }

    pub(crate) async fn component_logs(
        &self,
        id: i64,
        limit: Option<u32>,
    ) -> HttpResult<Vec<StockLog>> {
        let logs: Option<Vec<StockLog>> = self
            .get_data(component_logs_url(&self.base_url, id, limit))
            .await?;
        Ok(logs.unwrap_or_default())
    }

    pub(crate) async fn stock_history(
        &self,
        page: u32,
        page_size: u32,
    ) -> HttpResult<Page<StockLog>> {
        self.get_page(stock_logs_url(&self.base_url, page, page_size))
            .await
    }
}
