//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

use crate::category_commands::CategoryCommand;
use crate::component_commands::ComponentCommand;
use crate::stock_commands::StockCommand;

/// Available commands for the inventory client.
#[derive(Subcommand)]
pub enum Commands {
    /// List, add, edit and delete components
    #[command(visible_alias = "c")]
    Components {
        #[command(subcommand)]
        command: ComponentCommand,
    },

    /// Move stock in or out and inspect per-component history
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },

    /// Show the global stock history
    History {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Entries per page
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: u32,
    },

    /// Look up a vendor part code (e.g. an LCSC "C" number)
    Parse {
        /// The vendor code
        code: String,
    },

    /// Decode a reel label QR payload and optionally save it as a component
    Scan {
        /// The decoded QR text, or "-" to read it from stdin
        payload: String,
        /// Category to use instead of the one recognized from the label
        #[arg(long)]
        category: Option<String>,
        /// Save the recognized component
        #[arg(long)]
        save: bool,
    },

    /// Show inventory totals
    Dashboard,

    /// List the vendor platforms the backend can parse
    Platforms,
}
