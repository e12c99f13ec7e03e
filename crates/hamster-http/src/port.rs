//! Port trait implementations for `InventoryClient`.
//!
//! This module implements the core-owned port traits for `InventoryClient`
//! and maps internal HTTP errors onto `ApiError`.

use async_trait::async_trait;
use hamster_core::{
    ApiError, ApiResult, Category, CategoryPort, Component, ComponentPort, ComponentQuery,
    ComponentWrite, ImagePort, ImageUpload, NewCategory, Page, ParsedPart, PartParserPort,
    QrScan, StockChange, StockLog, StockLogPort,
};

use crate::client::InventoryClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `ApiError`.
pub(crate) fn map_error(err: HttpError) -> ApiError {
    match err {
        HttpError::Status { status: 404, url, .. } => ApiError::NotFound {
            resource: resource_path(&url),
        },
        HttpError::Status {
            status, message, ..
        } => ApiError::Rejected { status, message },
        HttpError::Timeout { .. } => ApiError::Timeout,
        HttpError::Network(e) if e.is_timeout() => ApiError::Timeout,
        HttpError::Network(e) => ApiError::Network {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => ApiError::Configuration {
            message: e.to_string(),
        },
        HttpError::InvalidResponse { message } => ApiError::InvalidResponse { message },
        HttpError::JsonParse(e) => ApiError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Path of the requested URL, e.g. `/api/v1/components/9`.
fn resource_path(url: &str) -> String {
    url::Url::parse(url).map_or_else(|_| url.to_string(), |u| u.path().to_string())
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CategoryPort for InventoryClient<B> {
    async fn list(&self) -> ApiResult<Vec<Category>> {
        self.list_categories().await.map_err(map_error)
    }

    async fn get(&self, id: i64) -> ApiResult<Category> {
        self.get_category(id).await.map_err(map_error)
    }

    async fn create(&self, category: &NewCategory) -> ApiResult<Category> {
        self.create_category(category).await.map_err(map_error)
    }

    async fn update(&self, id: i64, category: &NewCategory) -> ApiResult<Category> {
        self.update_category(id, category).await.map_err(map_error)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.delete_category(id).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> ComponentPort for InventoryClient<B> {
    async fn list(&self, query: &ComponentQuery) -> ApiResult<Page<Component>> {
        self.list_components(query).await.map_err(map_error)
    }

    async fn get(&self, id: i64) -> ApiResult<Component> {
        self.get_component(id).await.map_err(map_error)
    }

    async fn create(&self, component: &ComponentWrite) -> ApiResult<Component> {
        self.create_component(component).await.map_err(map_error)
    }

    async fn update(&self, id: i64, component: &ComponentWrite) -> ApiResult<Component> {
        self.update_component(id, component)
            .await
            .map_err(map_error)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.delete_component(id).await.map_err(map_error)
    }

    async fn adjust_stock(&self, id: i64, change: &StockChange) -> ApiResult<Component> {
        Self::adjust_stock(self, id, change).await.map_err(map_error)
    }

    async fn logs(&self, id: i64, limit: Option<u32>) -> ApiResult<Vec<StockLog>> {
        self.component_logs(id, limit).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> ImagePort for InventoryClient<B> {
    async fn upload(&self, component_id: i64, image: &ImageUpload) -> ApiResult<()> {
        self.upload_image(component_id, image)
            .await
            .map_err(map_error)
    }

    async fn fetch(&self, component_id: i64) -> ApiResult<Option<Vec<u8>>> {
        self.fetch_image(component_id).await.map_err(map_error)
    }

    fn image_url(&self, component_id: i64) -> String {
        self.image_url_now(component_id).to_string()
    }
}

#[async_trait]
impl<B: HttpBackend> StockLogPort for InventoryClient<B> {
    async fn list(&self, page: u32, page_size: u32) -> ApiResult<Page<StockLog>> {
        self.stock_history(page, page_size).await.map_err(map_error)
    }
}

#[async_trait]
impl<B: HttpBackend> PartParserPort for InventoryClient<B> {
    async fn parse_code(&self, code: &str) -> ApiResult<ParsedPart> {
        Self::parse_code(self, code).await.map_err(map_error)
    }

    async fn parse_qrcode(&self, payload: &str) -> ApiResult<QrScan> {
        Self::parse_qrcode(self, payload).await.map_err(map_error)
    }

    async fn platforms(&self) -> ApiResult<Vec<String>> {
        Self::platforms(self).await.map_err(map_error)
    }
}
