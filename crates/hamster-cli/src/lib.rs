//! `hamster` - command-line front end for the hamster-bin inventory.
//!
//! The binary in `main.rs` is the composition root; everything it wires
//! together lives here so handlers can be tested against an in-memory
//! backend.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod category_commands;
pub mod commands;
pub mod component_commands;
pub mod error;
pub mod handlers;
pub mod notifier;
pub mod parser;
pub mod presentation;
pub mod stock_commands;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use category_commands::CategoryCommand;
pub use commands::Commands;
pub use component_commands::{ComponentCommand, ComponentFields};
pub use error::{CliError, exit_code_for};
pub use notifier::TerminalNotifier;
pub use parser::Cli;
pub use stock_commands::StockCommand;
