//! Dashboard statistics.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::ComponentQuery;
use crate::ports::{CategoryPort, ComponentPort, CoreError};

/// Page size used to sum stock across every component in one request.
pub const STOCK_SUM_PAGE_SIZE: u32 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub component_count: u64,
    pub category_count: usize,
    pub total_stock: i64,
}

pub struct DashboardService {
    components: Arc<dyn ComponentPort>,
    categories: Arc<dyn CategoryPort>,
}

impl DashboardService {
    pub fn new(components: Arc<dyn ComponentPort>, categories: Arc<dyn CategoryPort>) -> Self {
        Self {
            components,
            categories,
        }
    }

    pub async fn stats(&self) -> Result<DashboardStats, CoreError> {
        let counted = self
            .components
            .list(&ComponentQuery::new().with_page_size(1))
            .await?;
        let categories = self.categories.list().await?;
        let all = self
            .components
            .list(&ComponentQuery::new().with_page_size(STOCK_SUM_PAGE_SIZE))
            .await?;

        Ok(DashboardStats {
            component_count: counted.pagination.total,
            category_count: categories.len(),
            total_stock: all.items.iter().map(|c| c.stock_quantity).sum(),
        })
    }
}
