use std::time::Duration;

use crate::config::{AppConfig, LoggingCfg};
use crate::db::Database;
use crate::monitor::Monitor;
use crate::tui::TuiPresenter;

mod config;
mod data;
mod db;
mod error;
mod monitor;
mod tests;
mod tui;

// The TUI owns stdout, so logs go to stderr or the configured file.
fn init_tracing(cfg: &LoggingCfg) -> Result<(), anyhow::Error> {
    let level = cfg
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    match &cfg.file_path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.logging)?;

    let db = Database::new(&config.database).await?;
    let presenter = TuiPresenter::new(config.monitor.symbol.clone(), config.monitor.table_rows)?;

    let mut monitor = Monitor::new(
        db,
        presenter,
        Duration::from_secs(config.monitor.refresh_secs),
    );
    monitor.run().await?;
    Ok(())
}
