//! Terminal front end: plays one game of poker and records the winner in the league.

use std::{io, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poker_league::{
    cli::Cli,
    config::AppConfig,
    dao::player_store::{FileSystemPlayerStore, PlayerStore},
    game::{TexasHoldem, TokioBlindAlerter, WriterSink},
};

#[derive(Debug, Parser)]
#[command(name = "poker-cli")]
#[command(about = "Play a game of poker and record the winner", long_about = None)]
struct Args {
    /// League snapshot file (defaults to the configured database path)
    #[arg(long, env = "POKER_LEAGUE_DB_PATH")]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let db_path = args
        .db_path
        .unwrap_or_else(|| AppConfig::load().database_path().clone());
    let store = FileSystemPlayerStore::open(&db_path)
        .with_context(|| format!("creating file system player store at {}", db_path.display()))?;
    let store: Arc<dyn PlayerStore> = Arc::new(store);

    println!("Let's play poker");
    println!("Type {{Name}} wins to record a win");

    let game = Arc::new(TexasHoldem::new(store, Arc::new(TokioBlindAlerter)));
    let out = Arc::new(WriterSink::new(io::stdout()));
    let mut cli = Cli::new(io::stdin().lock(), out, game);

    let phase = cli.play_poker().await?;
    info!(?phase, "session over");
    Ok(())
}

/// Log to stderr so the prompt and blind alerts keep stdout to themselves.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
