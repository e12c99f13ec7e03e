//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which delegate to
//! `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use hamster_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::new(cli.api_url, cli.timeout_secs);
    let ctx = bootstrap(&config)?;

    match command {
        Commands::Components { command } => handlers::components::execute(&ctx, command).await,
        Commands::Stock { command } => handlers::stock::execute(&ctx, command).await,
        Commands::Categories { command } => handlers::categories::execute(&ctx, command).await,
        Commands::History { page, page_size } => {
            handlers::history::execute(&ctx, page, page_size).await
        }
        Commands::Parse { code } => handlers::parse::execute(&ctx, &code).await,
        Commands::Scan {
            payload,
            category,
            save,
        } => handlers::scan::execute(&ctx, &payload, category.as_deref(), save)
            .await
            .map(drop),
        Commands::Dashboard => handlers::dashboard::execute(&ctx).await,
        Commands::Platforms => handlers::parse::platforms(&ctx).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads HAMSTER_* defaults
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
