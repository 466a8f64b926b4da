mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { input, budget } => commands::run::run(&config, &input, budget.as_deref()),
        Commands::Compress {
            input,
            budget,
            json,
        } => commands::compress::run(&config, &input, budget.as_deref(), json),
        Commands::Recommend { budget } => commands::recommend::run(&config, budget.as_deref()),
        Commands::History { stats, limit } => commands::history::run(&config, stats, limit),
        Commands::Clear => commands::clear::run(&config),
        Commands::Version => commands::version::run(),
    }
}
