//! Psyche - terminal client for the metaphor library

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use psyche_cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(&cli)?;

    match cli.command {
        Some(Commands::Browse) | None => commands::browse::run(&config, cli.format).await?,
        Some(Commands::Preview { ref id }) => {
            commands::content::run(&config, id, false, cli.format).await?;
        }
        Some(Commands::Read { ref id }) => {
            commands::content::run(&config, id, true, cli.format).await?;
        }
        Some(Commands::Buy { ref id, bundle, link }) => {
            commands::buy::run(&config, id, bundle, link).await?;
        }
        Some(Commands::Auth {
            ref action,
            ref token,
            ref provider,
        }) => {
            commands::auth::run(&config, action.as_ref(), token.as_deref(), provider).await?;
        }
        Some(Commands::Suggest {
            ref suggestion,
            ref name,
            ref email,
            ref reason,
        }) => {
            commands::feedback::suggest(&config, name, email, suggestion, reason).await?;
        }
        Some(Commands::Subscribe { ref email }) => {
            commands::feedback::subscribe(&config, email).await?;
        }
    }

    Ok(())
}
