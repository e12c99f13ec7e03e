//! HTTP adapter for the hamster-bin inventory backend.
//!
//! Implements the `hamster-core` port traits over the backend's REST API
//! (`/api/v1` by default). Build a [`DefaultInventoryClient`] from an
//! [`HttpClientConfig`] and hand it to `InventoryPorts::from_backend`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultInventoryClient is meant
// to be used through the core port traits, not its generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultInventoryClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpClientConfig};

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
