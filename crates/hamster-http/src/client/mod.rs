//! Inventory API client.
//!
//! One method per backend endpoint, grouped by resource in the submodules.
//! Every method unwraps the backend's response envelope and returns core
//! domain types.

mod categories;
mod components;
mod images;
mod parse;
mod stock;

use hamster_core::{ApiResult, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::HttpClientConfig;
use crate::error::{HttpError, HttpResult};
use crate::http::{ApiRequest, HttpBackend, RawResponse, ReqwestBackend};
use crate::models::{DataEnvelope, ListEnvelope};
use crate::port::map_error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Inventory client using the reqwest HTTP backend.
pub type DefaultInventoryClient = InventoryClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the inventory REST API.
///
/// Generic over the HTTP backend so tests can run without a network. Use
/// [`DefaultInventoryClient`] in production and talk to it through the
/// core port traits.
pub struct InventoryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultInventoryClient {
    /// Create a client for the configured backend.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built.
    pub fn new(config: &HttpClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| map_error(e.into()))?;
        let backend = ReqwestBackend::new(config).map_err(map_error)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> InventoryClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> Self {
        Self {
            backend,
            base_url: Url::parse(base_url).unwrap(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a request and turn any non-success status into an error.
    pub(crate) async fn send(&self, request: ApiRequest) -> HttpResult<RawResponse> {
        let url = request.url.to_string();
        let response = self.backend.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(HttpError::Status {
                status: response.status,
                message: response.error_message(),
                url,
            })
        }
    }

    /// GET a `{data}` envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, url: Url) -> HttpResult<T> {
        let response = self.send(ApiRequest::get(url)).await?;
        Ok(response.json::<DataEnvelope<T>>()?.data)
    }

    /// GET a `{data, pagination}` envelope.
    pub(crate) async fn get_page<T: DeserializeOwned>(&self, url: Url) -> HttpResult<Page<T>> {
        let response = self.send(ApiRequest::get(url)).await?;
        Ok(response.json::<ListEnvelope<T>>()?.into_page())
    }

    /// POST a JSON body, reading a `{data}` envelope back.
    pub(crate) async fn post_data<T, Q>(&self, url: Url, body: &Q) -> HttpResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync,
    {
        let response = self
            .send(ApiRequest::post(url, serde_json::to_value(body)?))
            .await?;
        Ok(response.json::<DataEnvelope<T>>()?.data)
    }

    /// PUT a JSON body, reading a `{data}` envelope back.
    pub(crate) async fn put_data<T, Q>(&self, url: Url, body: &Q) -> HttpResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync,
    {
        let response = self
            .send(ApiRequest::put(url, serde_json::to_value(body)?))
            .await?;
        Ok(response.json::<DataEnvelope<T>>()?.data)
    }

    /// DELETE, ignoring the `{message}` body.
    pub(crate) async fn delete_resource(&self, url: Url) -> HttpResult<()> {
        self.send(ApiRequest::delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::Method;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub const BASE: &str = "http://localhost:8080/api/v1";

    pub fn client(backend: &FakeBackend) -> InventoryClient<FakeBackend> {
        InventoryClient::with_backend(BASE, backend.clone())
    }

    pub fn component_json(id: i64, name: &str, stock: i64) -> serde_json::Value {
        json!({
            "id": id,
            "category_id": 1,
            "category": {"id": 1, "name": "Resistor"},
            "name": name,
            "value": "10k",
            "package": "0603",
            "stock_quantity": stock,
            "created_at": "2024-05-01T10:00:00+08:00",
            "updated_at": "2024-05-01T10:00:00+08:00"
        })
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultInventoryClient::new(&HttpClientConfig::new()).unwrap();
        assert_eq!(client.base_url().as_str(), BASE);
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let config = HttpClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            DefaultInventoryClient::new(&config),
            Err(hamster_core::ApiError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_send_maps_error_status() {
        let backend = FakeBackend::new().with_json(
            Method::Get,
            "/components/9",
            404,
            &json!({"error": "component not found"}),
        );
        let client = client(&backend);

        let err = client
            .get_data::<serde_json::Value>(crate::url::component_url(&client.base_url, 9))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HttpError::Status { status: 404, ref message, .. } if message == "component not found"
        ));
    }
}
