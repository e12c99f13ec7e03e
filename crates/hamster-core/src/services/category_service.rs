//! Category service - thin facade over the category port.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Category, NewCategory};
use crate::ports::{CategoryPort, CoreError};

pub struct CategoryService {
    categories: Arc<dyn CategoryPort>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryPort>) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> Result<Vec<Category>, CoreError> {
        self.categories.list().await.map_err(CoreError::from)
    }

    pub async fn get(&self, id: i64) -> Result<Category, CoreError> {
        self.categories.get(id).await.map_err(CoreError::from)
    }

    /// Find a category by ID or by case-insensitive name.
    pub async fn find(&self, identifier: &str) -> Result<Category, CoreError> {
        if let Ok(id) = identifier.parse::<i64>() {
            return self.get(id).await;
        }
        let all = self.list().await?;
        crate::domain::find_by_name(&all, identifier)
            .cloned()
            .ok_or_else(|| CoreError::Validation(format!("Category not found: {identifier}")))
    }

    /// Create a category. Blank names are rejected without a request.
    pub async fn create(&self, name: &str) -> Result<Category, CoreError> {
        let category = Self::named(name)?;
        let created = self.categories.create(&category).await?;
        info!(id = created.id, name = %created.name, "Category added");
        Ok(created)
    }

    pub async fn rename(&self, id: i64, name: &str) -> Result<Category, CoreError> {
        let category = Self::named(name)?;
        let updated = self.categories.update(id, &category).await?;
        info!(id, name = %updated.name, "Category updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.categories.delete(id).await?;
        info!(id, "Category deleted");
        Ok(())
    }

    fn named(name: &str) -> Result<NewCategory, CoreError> {
        let category = NewCategory::new(name);
        if category.name.is_empty() {
            return Err(CoreError::Validation(
                "Please enter a category name".to_string(),
            ));
        }
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ApiError, MockCategoryPort};
    use crate::testing::{Call, InMemoryInventory};

    #[tokio::test]
    async fn test_blank_name_is_rejected_locally() {
        let mut port = MockCategoryPort::new();
        port.expect_create().times(0);
        port.expect_update().times(0);
        let service = CategoryService::new(Arc::new(port));

        assert!(matches!(
            service.create("  ").await,
            Err(CoreError::Validation(msg)) if msg == "Please enter a category name"
        ));
        assert!(matches!(
            service.rename(1, "").await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_and_rename() {
        let inventory = Arc::new(InMemoryInventory::new());
        let service = CategoryService::new(inventory.clone());

        let created = service.create(" Sensor ").await.unwrap();
        assert_eq!(created.name, "Sensor");

        let renamed = service.rename(created.id, "Sensors").await.unwrap();
        assert_eq!(renamed.name, "Sensors");
        assert_eq!(
            inventory.calls(),
            vec![
                Call::CreateCategory("Sensor".to_string()),
                Call::UpdateCategory(created.id, "Sensors".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_by_id_or_name() {
        let inventory = Arc::new(
            InMemoryInventory::new()
                .with_category(3, "Connector")
                .with_category(4, "Relay"),
        );
        let service = CategoryService::new(inventory);

        assert_eq!(service.find("4").await.unwrap().name, "Relay");
        assert_eq!(service.find("connector").await.unwrap().id, 3);
        assert!(matches!(
            service.find("Fuse").await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_propagates_backend_error() {
        let mut port = MockCategoryPort::new();
        port.expect_delete().returning(|_| {
            Err(ApiError::Rejected {
                status: 400,
                message: "category has components".to_string(),
            })
        });
        let service = CategoryService::new(Arc::new(port));

        assert!(matches!(
            service.delete(1).await,
            Err(CoreError::Api(ApiError::Rejected { status: 400, .. }))
        ));
    }
}
