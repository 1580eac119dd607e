/// Encore - playlist and party-mode player shell
use clap::Parser;
use encore_cli::{Shell, ShellConfig};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Encore playlist and party-mode player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty library instead of the built-in catalog
    #[arg(long)]
    no_seed: bool,

    /// Number of played songs to remember
    #[arg(long)]
    history_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with shell output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=info,encore_cli=info,encore_playback=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if cli.no_seed {
        config.seed_catalog = false;
    }
    if let Some(history_size) = cli.history_size {
        config.engine.history_size = history_size;
    }

    tracing::info!(
        history_size = config.engine.history_size,
        seed_catalog = config.seed_catalog,
        "Starting Encore"
    );
    println!("Encore - type 'help' for commands, 'quit' to leave");

    let mut shell = Shell::new(&config);
    shell.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
