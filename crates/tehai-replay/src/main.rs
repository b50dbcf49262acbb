//! Tehai replay driver.
//!
//! Reads a JSON script of draws, discards and calls, threads the hand
//! through the engine and prints one JSON report per step.

use anyhow::Context;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod replay;
mod script;

use config::ReplayConfig;
use replay::Replay;
use script::Script;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ReplayConfig::from_env();
    info!(?config, "Starting Tehai replay...");

    let source = match &config.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            buf
        }
    };
    let script: Script = serde_json::from_str(&source).context("invalid replay script")?;

    let mut replay = Replay::new(script.hand);
    let mut out = io::stdout().lock();
    replay.run(&script.steps, &mut out, config.pretty)?;
    info!(hand = %replay.hand(), "replay finished");
    Ok(())
}
