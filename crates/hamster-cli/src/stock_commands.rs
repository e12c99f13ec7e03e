//! Stock subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum StockCommand {
    /// Take stock in
    In {
        /// Component ID
        id: i64,
        /// Number of units
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        amount: u32,
        /// Free-text reason recorded in the stock log
        #[arg(short, long, default_value = "")]
        reason: String,
    },

    /// Take stock out
    Out {
        /// Component ID
        id: i64,
        /// Number of units
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        amount: u32,
        /// Free-text reason recorded in the stock log
        #[arg(short, long, default_value = "")]
        reason: String,
    },

    /// Show the stock history of one component
    Logs {
        /// Component ID
        id: i64,
        /// Only show the most recent entries
        #[arg(short, long)]
        limit: Option<u32>,
    },
}
