//! Category endpoints.

use hamster_core::{Category, NewCategory};

use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::url::{categories_url, category_url};

use super::InventoryClient;

impl<B: HttpBackend> InventoryClient<B> {
    pub(crate) async fn list_categories(&self) -> HttpResult<Vec<Category>> {
        let categories: Option<Vec<Category>> =
            self.get_data(categories_url(&self.base_url)).await?;
        Ok(categories.unwrap_or_default())
    }

    pub(crate) async fn get_category(&self, id: i64) -> HttpResult<Category> {
        self.get_data(category_url(&self.base_url, id)).await
    }

    pub(crate) async fn create_category(&self, category: &NewCategory) -> HttpResult<Category> {
        self.post_data(categories_url(&self.base_url), category)
            .await
    }

    pub(crate) async fn update_category(
        &self,
        id: i64,
        category: &NewCategory,
    ) -> HttpResult<Category> {
        self.put_data(category_url(&self.base_url, id), category)
            .await
    }

    pub(crate) async fn delete_category(&self, id: i64) -> HttpResult<()> {
        self.delete_resource(category_url(&self.base_url, id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client;
    use crate::http::testing::FakeBackend;
    use crate::http::{Method, RequestBody};
    use hamster_core::NewCategory;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_categories_null_data() {
        let backend =
            FakeBackend::new().with_json(Method::Get, "/categories", 200, &json!({"data": null}));

        let categories = client(&backend).list_categories().await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_create_category_sends_trimmed_name() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/categories",
            201,
            &json!({"data": {"id": 12, "name": "LED", "parent_id": null}}),
        );

        let created = client(&backend)
            .create_category(&NewCategory::new(" LED "))
            .await
            .unwrap();

        assert_eq!(created.id, 12);
        assert_eq!(
            backend.requests()[0].body,
            RequestBody::Json(json!({"name": "LED"}))
        );
    }
}
