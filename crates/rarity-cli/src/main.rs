//! Rarity roll runner entry point.

use std::error::Error;
use std::io::Write;

use rarity_cli::config::Config;
use rarity_cli::run::run;
use rarity_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber; stdout is reserved for the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting rarity roll runner");

    // Read configuration from environment.
    let config = Config::from_env()?;
    tracing::info!(
        rolls = config.rolls,
        labels = config.table.len(),
        mode = ?config.mode,
        "configuration loaded"
    );

    let document = run(&config, &SystemClock)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;

    Ok(())
}
