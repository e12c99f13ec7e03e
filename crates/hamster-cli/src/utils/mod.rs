//! Utility modules for CLI commands.

pub mod input;
