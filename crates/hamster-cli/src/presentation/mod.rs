//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services

pub mod inventory_display;
pub mod tables;

// Re-export commonly used items
pub use inventory_display::{
    display_component, display_draft, display_parsed_part, print_component_table,
    print_log_table, print_pagination,
};
pub use tables::{format_or_dash, format_timestamp, print_separator, truncate_string};
