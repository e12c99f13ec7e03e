//! Port definitions (trait abstractions) for the inventory backend.
//!
//! Ports define the interfaces that core services expect from
//! infrastructure. They contain no HTTP details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or URL types in any signature
//! - One trait per backend resource so services depend only on what they use
//! - Every failure is reported as an [`ApiError`]

pub mod category;
pub mod component;
pub mod image;
pub mod notifier;
pub mod parser;
pub mod stock_log;

use std::sync::Arc;

use thiserror::Error;

use crate::domain::DraftError;

pub use category::CategoryPort;
pub use component::ComponentPort;
pub use image::ImagePort;
pub use notifier::{Notice, NoticeLevel, NoopNotifier, Notifier};
pub use parser::PartParserPort;
pub use stock_log::StockLogPort;

#[cfg(test)]
pub use category::MockCategoryPort;
#[cfg(test)]
pub use component::MockComponentPort;
#[cfg(test)]
pub use image::MockImagePort;

/// Container for every backend port.
///
/// Built once at the adapter's composition root. A single HTTP client
/// usually implements all of them.
#[derive(Clone)]
pub struct InventoryPorts {
    pub categories: Arc<dyn CategoryPort>,
    pub components: Arc<dyn ComponentPort>,
    pub images: Arc<dyn ImagePort>,
    pub stock_logs: Arc<dyn StockLogPort>,
    pub parser: Arc<dyn PartParserPort>,
}

impl InventoryPorts {
    /// Use one value for every port.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: CategoryPort + ComponentPort + ImagePort + StockLogPort + PartParserPort + 'static,
    {
        Self {
            categories: backend.clone(),
            components: backend.clone(),
            images: backend.clone(),
            stock_logs: backend.clone(),
            parser: backend,
        }
    }
}

/// Errors from backend port operations.
///
/// Adapter-specific errors (HTTP, JSON) are mapped to these at the
/// adapter boundary. Callers surface them as a single notification;
/// there is no structured code beyond the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The addressed record does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// What was requested (e.g., "component 7")
        resource: String,
    },

    /// The backend answered with an error status.
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// The backend's `error` message, or the status reason
        message: String,
    },

    /// The request did not complete within the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend's answer could not be understood.
    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    /// The client is misconfigured (bad base URL, etc.).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for port operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Terminal failures of the component save workflow.
///
/// An image upload failure is deliberately absent: it does not fail
/// the save (see [`crate::services::ImageOutcome`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The category input was empty. No request was issued.
    #[error("Please enter a category")]
    MissingCategory,

    /// The draft could not be converted into a write request.
    #[error("Invalid component: {0}")]
    InvalidDraft(#[from] DraftError),

    /// Implicit category creation failed; no component write was attempted.
    #[error("Failed to auto-create category '{name}': {source}")]
    CategoryCreateFailed {
        name: String,
        #[source]
        source: ApiError,
    },

    /// The component create/update was rejected; no image upload was attempted.
    #[error("Failed to save component: {0}")]
    PersistFailed(#[source] ApiError),
}

/// Core error type for service operations.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backend operation failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Save workflow failed.
    #[error(transparent)]
    Save(#[from] SaveError),

    /// Validation error (invalid input, caught before any request).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
