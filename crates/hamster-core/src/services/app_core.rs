//! `AppCore` - the primary application facade.
//!
//! Adapters build one `AppCore` at their composition root and reach every
//! service through it.

use std::sync::Arc;

use crate::ports::{InventoryPorts, Notifier};

use super::{CategoryService, ComponentsScreen, DashboardService, ParseService, StockService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(InventoryClient::new(config)?);
/// let core = AppCore::new(InventoryPorts::from_backend(client), notifier);
///
/// let mut screen = core.components_screen();
/// screen.load().await?;
/// ```
pub struct AppCore {
    ports: InventoryPorts,
    notifier: Arc<dyn Notifier>,
    categories: CategoryService,
    stock: StockService,
    dashboard: DashboardService,
    parse: ParseService,
}

impl AppCore {
    pub fn new(ports: InventoryPorts, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            categories: CategoryService::new(Arc::clone(&ports.categories)),
            stock: StockService::new(
                Arc::clone(&ports.components),
                Arc::clone(&ports.stock_logs),
            ),
            dashboard: DashboardService::new(
                Arc::clone(&ports.components),
                Arc::clone(&ports.categories),
            ),
            parse: ParseService::new(Arc::clone(&ports.parser)),
            ports,
            notifier,
        }
    }

    /// A fresh components screen with an empty list and no dialog open.
    pub fn components_screen(&self) -> ComponentsScreen {
        ComponentsScreen::new(self.ports.clone(), Arc::clone(&self.notifier))
    }

    pub const fn categories(&self) -> &CategoryService {
        &self.categories
    }

    pub const fn stock(&self) -> &StockService {
        &self.stock
    }

    pub const fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }

    pub const fn parse(&self) -> &ParseService {
        &self.parse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryInventory, RecordingNotifier};

    #[tokio::test]
    async fn test_services_share_one_backend() {
        let inventory = Arc::new(InMemoryInventory::new());
        let core = AppCore::new(
            InventoryPorts::from_backend(inventory.clone()),
            Arc::new(RecordingNotifier::new()),
        );

        let category = core.categories().create("Module").await.unwrap();
        let mut screen = core.components_screen();
        screen.load().await.unwrap();

        assert_eq!(screen.categories(), &[category]);
        assert_eq!(core.dashboard().stats().await.unwrap().category_count, 1);
    }
}
