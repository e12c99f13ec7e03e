//! HTTP backend abstraction for the inventory API.
//!
//! The client builds transport-neutral [`ApiRequest`]s and hands them to an
//! [`HttpBackend`]. Production uses reqwest; tests swap in a fake that
//! returns canned responses and records every request. There is no retry:
//! a request either completes within the timeout or fails.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::HttpClientConfig;
use crate::error::{HttpError, HttpResult};
use crate::models::ErrorBody;

// ============================================================================
// Requests and responses
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// A single-file multipart form.
    Multipart {
        field: &'static str,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: RequestBody,
}

impl ApiRequest {
    pub const fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            body: RequestBody::Empty,
        }
    }

    pub const fn delete(url: Url) -> Self {
        Self {
            method: Method::Delete,
            url,
            body: RequestBody::Empty,
        }
    }

    pub const fn post(url: Url, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url,
            body: RequestBody::Json(body),
        }
    }

    pub const fn put(url: Url, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            url,
            body: RequestBody::Json(body),
        }
    }
}

/// Status and body of a completed request, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body, reporting a shape mismatch as an invalid response.
    pub fn json<T: DeserializeOwned>(&self) -> HttpResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| HttpError::InvalidResponse {
            message: format!("status {}: {e}", self.status),
        })
    }

    /// The backend's `error` text, falling back to the status reason.
    pub fn error_message(&self) -> String {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                reqwest::StatusCode::from_u16(self.status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("unexpected status")
                    .to_string()
            })
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Executes one request and returns the raw response.
///
/// Non-success statuses are returned as responses, not errors; only
/// transport failures are errors. This is an implementation detail;
/// external code uses the core port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> HttpResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Redirects are followed, so an image endpoint that redirects to an
/// external URL yields the external image bytes.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &HttpClientConfig) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    fn build_request(&self, request: ApiRequest) -> HttpResult<reqwest::RequestBuilder> {
        let url = request.url.as_str();
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart {
                field,
                file_name,
                content_type,
                bytes,
            } => {
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                builder.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };
        Ok(builder)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> HttpResult<RawResponse> {
        let url = request.url.to_string();
        debug!(method = ?request.method, %url, "Sending request");

        let response = self
            .build_request(request)?
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout { url: url.clone() }
                } else {
                    HttpError::Network(e)
                }
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(%url, status, bytes = body.len(), "Received response");
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
