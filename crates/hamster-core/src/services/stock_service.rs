//! Stock service - quantity adjustments and the stock audit trail.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Component, Page, StockChange, StockLog};
use crate::ports::{ComponentPort, CoreError, StockLogPort};

pub struct StockService {
    components: Arc<dyn ComponentPort>,
    logs: Arc<dyn StockLogPort>,
}

impl StockService {
    pub fn new(components: Arc<dyn ComponentPort>, logs: Arc<dyn StockLogPort>) -> Self {
        Self { components, logs }
    }

    /// Apply a signed stock change. Zero changes are rejected locally;
    /// insufficient stock is reported by the backend.
    pub async fn adjust(
        &self,
        component_id: i64,
        change: &StockChange,
    ) -> Result<Component, CoreError> {
        if change.amount == 0 {
            return Err(CoreError::Validation(
                "Stock change amount must not be zero".to_string(),
            ));
        }
        let component = self.components.adjust_stock(component_id, change).await?;
        info!(
            component_id,
            amount = change.amount,
            stock = component.stock_quantity,
            "Stock updated"
        );
        Ok(component)
    }

    /// Most recent logs for one component, newest first.
    pub async fn component_logs(
        &self,
        component_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<StockLog>, CoreError> {
        self.components
            .logs(component_id, limit)
            .await
            .map_err(CoreError::from)
    }

    /// One page of the global stock history. Page and page size are at
    /// least 1.
    pub async fn history(&self, page: u32, page_size: u32) -> Result<Page<StockLog>, CoreError> {
        self.logs
            .list(page.max(1), page_size.max(1))
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockDirection;
    use crate::ports::ApiError;
    use crate::testing::{Call, InMemoryInventory};

    fn service(inventory: &Arc<InMemoryInventory>) -> StockService {
        StockService::new(inventory.clone(), inventory.clone())
    }

    #[tokio::test]
    async fn test_adjust_in_and_out() {
        let inventory = Arc::new(InMemoryInventory::new().with_component(5, 1, "LM358", 10));
        let stock = service(&inventory);

        let after_in = stock
            .adjust(5, &StockChange::new(StockDirection::In, 15, "restock"))
            .await
            .unwrap();
        assert_eq!(after_in.stock_quantity, 25);

        let after_out = stock
            .adjust(5, &StockChange::new(StockDirection::Out, 5, "project"))
            .await
            .unwrap();
        assert_eq!(after_out.stock_quantity, 20);

        let logs = stock.component_logs(5, None).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].change_amount, -5);
    }

    #[tokio::test]
    async fn test_zero_amount_is_rejected_locally() {
        let inventory = Arc::new(InMemoryInventory::new().with_component(5, 1, "LM358", 10));
        let stock = service(&inventory);

        let result = stock
            .adjust(5, &StockChange::new(StockDirection::In, 0, ""))
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(inventory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_stock_is_backend_rejection() {
        let inventory = Arc::new(InMemoryInventory::new().with_component(5, 1, "LM358", 2));
        let stock = service(&inventory);

        let result = stock
            .adjust(5, &StockChange::new(StockDirection::Out, 3, ""))
            .await;

        assert!(matches!(
            result,
            Err(CoreError::Api(ApiError::Rejected { status: 400, .. }))
        ));
        assert_eq!(inventory.components()[0].stock_quantity, 2);
    }

    #[tokio::test]
    async fn test_history_clamps_page() {
        let inventory = Arc::new(InMemoryInventory::new());
        let stock = service(&inventory);

        let page = stock.history(0, 20).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(inventory.calls(), vec![Call::ListStockLogs(1, 20)]);
    }

    #[tokio::test]
    async fn test_history_never_sends_zero_page_size() {
        let inventory = Arc::new(InMemoryInventory::new());
        let stock = service(&inventory);

        stock.history(1, 0).await.unwrap();

        assert_eq!(inventory.calls(), vec![Call::ListStockLogs(1, 1)]);
        assert_eq!(
            inventory.count(|c| matches!(c, Call::ListStockLogs(_, 0))),
            0
        );
    }
}
