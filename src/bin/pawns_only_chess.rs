use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pawns_only_chess::session::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pawns-only-chess",
    about = "Two-player pawns-only chess on the terminal"
)]
struct Args {
    /// White's name (skips the first name prompt)
    #[arg(long)]
    white: Option<String>,

    /// Black's name (skips the second name prompt)
    #[arg(long)]
    black: Option<String>,

    /// Optional: write the game transcript as JSON to this path
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SessionConfig::new()
        .with_white(args.white)
        .with_black(args.black);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let record = Session::new(stdin.lock(), stdout.lock(), config)
        .run()
        .context("game session failed")?;

    if let Some(path) = args.record.as_deref() {
        let json = record.to_json_pretty().context("serializing game record")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing game record to {}", path.display()))?;
        log::info!("wrote game record to {}", path.display());
    }

    Ok(())
}
