//! Component subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum ComponentCommand {
    /// List components, one page at a time
    List {
        /// Search name, value, package and description
        #[arg(short, long)]
        keyword: Option<String>,
        /// Only show one category (ID or name)
        #[arg(short, long)]
        category: Option<String>,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show one component in detail
    Show {
        /// Component ID
        id: i64,
    },

    /// Add a component
    Add {
        #[command(flatten)]
        fields: ComponentFields,
    },

    /// Edit a component; only the given fields change
    Edit {
        /// Component ID
        id: i64,
        #[command(flatten)]
        fields: ComponentFields,
    },

    /// Delete a component
    Delete {
        /// Component ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Download a component's image
    Image {
        /// Component ID
        id: i64,
        /// Where to write the image
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Form fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ComponentFields {
    /// Category name; created automatically if it does not exist
    #[arg(short, long)]
    pub category: Option<String>,
    /// Fill the form from a vendor part code before applying other fields
    #[arg(long)]
    pub code: Option<String>,
    #[arg(short, long)]
    pub name: Option<String>,
    /// Value, e.g. "10k" or "100nF"
    #[arg(long)]
    pub value: Option<String>,
    /// Package, e.g. "0603" or "SOT-23"
    #[arg(long)]
    pub package: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Stock quantity
    #[arg(short, long)]
    pub stock: Option<i64>,
    /// Storage location
    #[arg(short, long)]
    pub location: Option<String>,
    #[arg(long)]
    pub datasheet: Option<String>,
    /// External image URL
    #[arg(long, conflicts_with = "image")]
    pub image_url: Option<String>,
    /// Local image file to upload after saving
    #[arg(long)]
    pub image: Option<PathBuf>,
}
