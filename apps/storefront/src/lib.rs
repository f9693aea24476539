//! # Shrine Storefront Library
//!
//! Host for the Shrine storefront: owns the cart and the catalog, feeds
//! their changes into the cart panel and the catalog weave, and paces
//! frames.
//!
//! ## Module Organization
//! ```text
//! shrine_storefront_lib/
//! ├── lib.rs          ◄─── You are here (CLI, logging & run)
//! ├── config.rs       ◄─── StorefrontConfig (defaults, TOML, SHRINE_* env)
//! ├── error.rs        ◄─── HostError for the host layer
//! ├── events.rs       ◄─── HostEvent in, HostNotification out
//! ├── catalog.rs      ◄─── Loaded catalog, category filter, column layout
//! ├── host.rs         ◄─── Storefront: event handling & panel bridge
//! ├── sample.rs       ◄─── Stock Shrine product line
//! └── simulate.rs     ◄─── Scripted session on a paced frame loop
//! ```
//!
//! ## Output
//! Notifications go to stdout as JSON lines; logs go to stderr.

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod sample;
pub mod simulate;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use catalog::CatalogState;
pub use config::StorefrontConfig;
pub use error::{HostError, HostResult};
pub use events::{HostEvent, HostNotification};
pub use host::{NotificationSink, Storefront};
pub use simulate::{run_session, shopping_session, JsonLinesSink, ScriptedEvent, SessionSummary};

/// Plays the Shrine shopping session headlessly.
#[derive(Parser, Debug)]
#[command(name = "shrine-storefront", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Run with every transition instant
    #[arg(long)]
    pub reduced_motion: bool,

    /// Session length in milliseconds
    #[arg(long)]
    pub run_for_ms: Option<u64>,
}

/// Runs the storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Parse command line                                                  │
/// │  2. Initialize logging (stderr, RUST_LOG aware)                         │
/// │  3. Load config: defaults ─► storefront.toml ─► SHRINE_* ─► flags       │
/// │  4. Build a current-thread runtime with the time driver                 │
/// │  5. Play the scripted session, JSON lines to stdout                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> HostResult<()> {
    let cli = Cli::parse();
    init_tracing();

    info!("Starting Shrine storefront");

    let mut config = StorefrontConfig::load(cli.config)?;
    if cli.reduced_motion {
        config.panel.reduced_motion = true;
    }
    if let Some(run_for_ms) = cli.run_for_ms {
        config.frames.run_for_ms = run_for_ms;
    }
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let stdout = std::io::stdout();
    let mut sink = JsonLinesSink::new(stdout.lock());
    let summary = runtime.block_on(run_session(&config, shopping_session(), &mut sink))?;

    info!(
        frames = summary.frames,
        notifications = sink.written(),
        cart_items = summary.cart_items,
        final_state = %summary.final_state,
        "Storefront stopped"
    );
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shrine_panel=trace` - Per-frame panel detail
/// - Default: INFO, DEBUG for shrine crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shrine=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "shrine-storefront",
            "--config",
            "/tmp/storefront.toml",
            "--reduced-motion",
            "--run-for-ms",
            "1500",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/storefront.toml")));
        assert!(cli.reduced_motion);
        assert_eq!(cli.run_for_ms, Some(1500));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["shrine-storefront"]);
        assert!(cli.config.is_none());
        assert!(!cli.reduced_motion);
    }
}
