mod config;
mod render;
mod session;

use absorb_engine::{Game, Variant};
use anyhow::Context;
use clap::Parser;
use config::PlayConfig;
use session::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "absorb-play")]
#[command(about = "Play absorb chess in the terminal")]
struct Cli {
    /// Configuration file (defaults to absorb.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Board size, overriding the configuration file
    #[arg(short, long)]
    size: Option<u8>,
    /// Variant to play: absorb or classic
    #[arg(short, long)]
    variant: Option<Variant>,
    /// Print each position as a JSON snapshot
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = PlayConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(size) = cli.size {
        config.game.board_size = size;
    }
    if let Some(variant) = cli.variant {
        config.game.variant = variant;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let game = Game::with_config(&config.game).context("starting game")?;
    tracing::info!(
        size = config.game.board_size,
        variant = %config.game.variant,
        "starting session"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(game, cli.json)
        .run(stdin.lock(), stdout.lock())
        .context("terminal session failed")?;
    Ok(())
}
