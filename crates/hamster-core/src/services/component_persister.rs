//! Component persister - creates or updates one component record.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Component, ComponentWrite, SaveMode};
use crate::ports::{ComponentPort, Notice, Notifier, SaveError};

/// A successfully written component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedComponent {
    /// The stable ID: the update target, or the one the server assigned.
    pub id: i64,
    pub component: Component,
}

pub struct ComponentPersister {
    components: Arc<dyn ComponentPort>,
    notifier: Arc<dyn Notifier>,
}

impl ComponentPersister {
    pub fn new(components: Arc<dyn ComponentPort>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            components,
            notifier,
        }
    }

    /// Write `component` according to `mode`.
    ///
    /// On update the saved ID is always the requested one, whatever the
    /// response body carries.
    pub async fn save(
        &self,
        mode: SaveMode,
        component: &ComponentWrite,
    ) -> Result<SavedComponent, SaveError> {
        match mode {
            SaveMode::Update { id } => {
                debug!(id, "Updating component");
                let component = self
                    .components
                    .update(id, component)
                    .await
                    .map_err(SaveError::PersistFailed)?;
                info!(id, "Component updated");
                self.notifier.notify(Notice::success("Component updated"));
                Ok(SavedComponent { id, component })
            }
            SaveMode::Create => {
                debug!(name = %component.name, "Creating component");
                let component = self
                    .components
                    .create(component)
                    .await
                    .map_err(SaveError::PersistFailed)?;
                info!(id = component.id, "Component added");
                self.notifier.notify(Notice::success("Component added"));
                Ok(SavedComponent {
                    id: component.id,
                    component,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentDraft;
    use crate::ports::{ApiError, MockComponentPort};
    use crate::testing::{InMemoryInventory, RecordingNotifier};

    #[tokio::test]
    async fn test_create_uses_server_assigned_id() {
        let inventory = Arc::new(InMemoryInventory::new().with_category(1, "Resistor"));
        let notifier = Arc::new(RecordingNotifier::new());
        let persister = ComponentPersister::new(inventory.clone(), notifier.clone());

        let write = ComponentDraft::new().with_name("10k").into_write(1).unwrap();
        let saved = persister.save(SaveMode::Create, &write).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.component.name, "10k");
        assert_eq!(notifier.messages(), vec!["Component added"]);
    }

    #[tokio::test]
    async fn test_update_keeps_requested_id() {
        let mut port = MockComponentPort::new();
        port.expect_create().times(0);
        port.expect_update()
            .withf(|id, w| *id == 7 && w.stock_quantity == 5)
            .times(1)
            .returning(|_, w| {
                Ok(Component {
                    id: 0,
                    category_id: w.category_id,
                    category: None,
                    name: w.name.clone(),
                    value: String::new(),
                    package: String::new(),
                    description: String::new(),
                    stock_quantity: w.stock_quantity,
                    location: String::new(),
                    datasheet_url: String::new(),
                    image_url: String::new(),
                    created_at: None,
                    updated_at: None,
                })
            });
        let notifier = Arc::new(RecordingNotifier::new());
        let persister = ComponentPersister::new(Arc::new(port), notifier.clone());

        let write = ComponentDraft::new()
            .with_stock_quantity(5)
            .into_write(2)
            .unwrap();
        let saved = persister
            .save(SaveMode::Update { id: 7 }, &write)
            .await
            .unwrap();

        assert_eq!(saved.id, 7);
        assert_eq!(notifier.messages(), vec!["Component updated"]);
    }

    #[tokio::test]
    async fn test_rejection_maps_to_persist_failed() {
        let mut port = MockComponentPort::new();
        port.expect_create().returning(|_| {
            Err(ApiError::Rejected {
                status: 400,
                message: "name is required".to_string(),
            })
        });
        let notifier = Arc::new(RecordingNotifier::new());
        let persister = ComponentPersister::new(Arc::new(port), notifier.clone());

        let write = ComponentDraft::new().into_write(1).unwrap();
        let err = persister.save(SaveMode::Create, &write).await.unwrap_err();

        assert!(matches!(err, SaveError::PersistFailed(ApiError::Rejected { status: 400, .. })));
        assert!(notifier.notices().is_empty());
    }
}
