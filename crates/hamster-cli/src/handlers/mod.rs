//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` services or drive a components screen
//!   3. Format output for the terminal
//!
//! Handlers should NOT talk to the HTTP client directly or contain
//! business logic.

pub mod categories;
pub mod components;
pub mod dashboard;
pub mod history;
pub mod parse;
pub mod scan;
pub mod stock;
