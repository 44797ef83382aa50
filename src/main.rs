//! frametimes — rolling CPU/GPU frame-time statistics from a sample stream.
//!
//! Reads one `cpu gpu` pair per line from stdin and prints a summary every
//! `sampling.interval + 1` ticks.
//!
//! Run with:  `RUST_LOG=info frametimes < samples.txt`

use anyhow::Result;
use frametimes_config::{default_path, load as load_config, ConfigWatcher};
use frametimes_source::{spawn_line_reader, spawn_monitor, ChannelSource};
use frametimes_widgets::{DisplayStyle, Presenter};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("frametimes v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::var_os("FRAMETIMES_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(default_path);
    let config = load_config(&path)?;

    let samples = spawn_line_reader(tokio::io::stdin());
    let mut summaries = spawn_monitor(&config.sampling, ChannelSource::new(samples))?;
    let mut presenter = Presenter::from_config(&config.display);
    let (_watcher, mut reloads) = ConfigWatcher::spawn(&path);

    loop {
        tokio::select! {
            summary = summaries.recv() => match summary {
                Some(summary) => {
                    presenter.present(&summary);
                }
                None => break,
            },
            Some(reloaded) = reloads.recv() => {
                if reloaded.sampling != config.sampling {
                    warn!("Sampling settings changed; restart to apply them.");
                }
                presenter.set_style(DisplayStyle::from_config(&reloaded.display));
                info!("Display settings reloaded");
            }
        }
    }

    info!("frametimes finished");
    Ok(())
}
