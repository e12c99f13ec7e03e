//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the hamster-bin inventory.
///
/// Global options pick the backend; subcommands map onto the inventory
/// screens.
#[derive(Parser)]
#[command(name = "hamster")]
#[command(about = "Manage an electronics component inventory")]
#[command(version)]
pub struct Cli {
    /// Base URL of the inventory API
    #[arg(
        long = "api-url",
        env = "HAMSTER_API_URL",
        default_value = hamster_http::DEFAULT_BASE_URL,
        global = true
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        env = "HAMSTER_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "hamster",
            "--verbose",
            "--api-url",
            "http://inventory.lan/api/v1",
            "--timeout",
            "3",
            "dashboard",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_url, "http://inventory.lan/api/v1");
        assert_eq!(cli.timeout_secs, 3);
        assert!(matches!(cli.command, Some(Commands::Dashboard)));
    }

    #[test]
    fn test_history_page_size_must_be_positive() {
        assert!(Cli::try_parse_from(["hamster", "history", "--page-size", "0"]).is_err());

        let cli = Cli::parse_from(["hamster", "history", "--page-size", "50"]);
        assert!(matches!(
            cli.command,
            Some(Commands::History { page: 1, page_size: 50 })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["hamster", "--timeout", "0", "dashboard"]).is_err());
    }
}
