//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the HTTP client (via hamster-http), the terminal
//! notifier and the core services (via hamster-core).
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work
//! to it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use hamster_core::{AppCore, InventoryPorts, Notifier};
use hamster_http::{DefaultInventoryClient, HttpClientConfig};
use tracing::debug;

use crate::notifier::TerminalNotifier;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the inventory API.
    pub api_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl CliConfig {
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::new()
            .with_base_url(self.api_url.clone())
            .with_timeout(self.timeout)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    pub const fn new(app: AppCore) -> Self {
        Self { app }
    }

    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Creates the HTTP client for the configured backend
/// 2. Exposes it to the core through every port
/// 3. Assembles the `AppCore` with a terminal notifier
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    debug!(api_url = %config.api_url, timeout = ?config.timeout, "Bootstrapping CLI");

    let client = DefaultInventoryClient::new(&config.http_config())
        .with_context(|| format!("Invalid API URL '{}'", config.api_url))?;
    let ports = InventoryPorts::from_backend(Arc::new(client));
    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier::new());

    Ok(CliContext::new(AppCore::new(ports, notifier)))
}
