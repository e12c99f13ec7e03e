//! Component CRUD endpoints.

use hamster_core::{Component, ComponentQuery, ComponentWrite, Page};

use crate::error::HttpResult;
use crate::http::HttpBackend;
use crate::url::{component_url, components_root_url, components_url};

use super::InventoryClient;

impl<B: HttpBackend> InventoryClient<B> {
    pub(crate) async fn list_components(
        &self,
        query: &ComponentQuery,
    ) -> HttpResult<Page<Component>> {
        self.get_page(components_url(&self.base_url, query)).await
    }

    pub(crate) async fn get_component(&self, id: i64) -> HttpResult<Component> {
        self.get_data(component_url(&self.base_url, id)).await
    }

    pub(crate) async fn create_component(
        &self,
        component: &ComponentWrite,
    ) -> HttpResult<Component> {
        self.post_data(components_root_url(&self.base_url), component)
            .await
    }

    pub(crate) async fn update_component(
        &self,
        id: i64,
        component: &ComponentWrite,
    ) -> HttpResult<Component> {
        self.put_data(component_url(&self.base_url, id), component)
            .await
    }

    pub(crate) async fn delete_component(&self, id: i64) -> HttpResult<()> {
        self.delete_resource(component_url(&self.base_url, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client, component_json};
    use crate::http::testing::FakeBackend;
    use crate::http::{Method, RequestBody};
    use hamster_core::{ComponentDraft, ComponentQuery};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_components_reads_pagination() {
        let backend = FakeBackend::new().with_json(
            Method::Get,
            "/components",
            200,
            &json!({
                "data": [component_json(1, "10k", 100), component_json(2, "4k7", 20)],
                "pagination": {"page": 2, "page_size": 2, "total": 5, "total_page": 3}
            }),
        );

        let page = client(&backend)
            .list_components(&ComponentQuery::new().with_page(2).with_page_size(2))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].category_name(), Some("Resistor"));
        assert!(page.pagination.has_next());
        assert_eq!(
            backend.requests()[0].url.query(),
            Some("page=2&page_size=2")
        );
    }

    #[tokio::test]
    async fn test_create_component_sends_numbers() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/components",
            201,
            &json!({"data": component_json(33, "NE555", 4)}),
        );
        let write = ComponentDraft::new()
            .with_name("NE555")
            .with_stock_quantity(4)
            .into_write(1)
            .unwrap();

        let created = client(&backend).create_component(&write).await.unwrap();

        assert_eq!(created.id, 33);
        let request = &backend.requests()[0];
        assert_eq!(request.url.path(), "/api/v1/components");
        assert_eq!(request.url.query(), None);
        let RequestBody::Json(body) = &request.body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["category_id"], json!(1));
        assert_eq!(body["stock_quantity"], json!(4));
        assert_eq!(body["image_url"], json!(""));
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let backend = FakeBackend::new().with_json(
            Method::Put,
            "/components/7",
            200,
            &json!({"data": component_json(7, "100nF", 10)}),
        );
        let write = ComponentDraft::new().into_write(1).unwrap();

        let updated = client(&backend).update_component(7, &write).await.unwrap();

        assert_eq!(updated.id, 7);
        assert_eq!(backend.requests()[0].method, Method::Put);
    }
}
