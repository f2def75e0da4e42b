mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        cli::Commands::Keygen(cmd) => commands::keygen::run(cmd).await,
        cli::Commands::Normalize(cmd) => commands::normalize::run(cmd).await,
        cli::Commands::Digest(cmd) => commands::digest::run(cmd).await,
        cli::Commands::Sign(cmd) => commands::sign::run(cmd).await,
        cli::Commands::Verify(cmd) => commands::verify::run(cmd).await,
        cli::Commands::Recover(cmd) => commands::recover::run(cmd).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "jsonsig=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
