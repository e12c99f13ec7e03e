//! Category subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List all categories
    List,

    /// Create a category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category ID or current name
        identifier: String,
        /// New name
        name: String,
    },

    /// Delete a category
    Delete {
        /// Category ID or name
        identifier: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
