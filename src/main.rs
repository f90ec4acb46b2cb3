//! ARBIFY — Matched Betting Calculation Engine
//!
//! Entry point. Loads configuration, initialises structured logging,
//! restores the bet ledger from disk (or starts fresh), and serves the
//! calculator API until shutdown, saving the ledger on exit.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use arbify::api::{self, ApiState};
use arbify::config::AppConfig;
use arbify::ledger::{self, BetLedger};
use arbify::summary;

const BANNER: &str = r#"
    _    ____  ____ ___ _____ __   __
   / \  |  _ \| __ )_ _|  ___|\ \ / /
  / _ \ | |_) |  _ \| || |_    \ V /
 / ___ \|  _ <| |_) | ||  _|    | |
/_/   \_\_| \_\____/___|_|      |_|

  Matched Betting Calculation Engine
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        port = cfg.service.port,
        ledger_path = %cfg.ledger.path,
        lay_commission = cfg.calculator.lay_commission,
        "ARBIFY starting up"
    );

    // -- Restore or create the ledger --------------------------------------

    let ledger = match ledger::load_ledger(Some(&cfg.ledger.path))? {
        Some(restored) => {
            let overview = summary::summarize(restored.records());
            info!(%overview, "Resumed betting history");
            restored
        }
        None => {
            info!("No saved ledger found. Starting fresh.");
            BetLedger::new()
        }
    };

    let state = Arc::new(ApiState::new(
        ledger,
        cfg.calculator.clone(),
        Some(cfg.ledger.path.clone()),
    ));

    // -- Serve until shutdown ----------------------------------------------

    info!("Press Ctrl+C to stop.");
    api::serve(Arc::clone(&state), cfg.service.port, shutdown_signal()).await?;

    // Save the final ledger snapshot
    let ledger = state.ledger.read().await;
    ledger::save_ledger(&ledger, Some(&cfg.ledger.path))?;
    info!(
        bets = ledger.len(),
        net_profit = format!("£{:.2}", ledger.net_profit()),
        "ARBIFY shut down cleanly."
    );

    Ok(())
}

/// Resolves when Ctrl+C arrives, releasing the API server to drain.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received."),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("arbify=info"));

    let json_logging = std::env::var("ARBIFY_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
