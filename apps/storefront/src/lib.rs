//! # Storefront App Library
//!
//! Wires the pure `storefront-core` logic into a running application:
//! shared state, commands, logging, configuration and the interactive shell.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parsing and command dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Shared immutable catalog
//! │   ├── cart.rs     ◄─── Cart state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Categories and product listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Demo checkout
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppError;
use shell::Shell;
use state::{CatalogState, ConfigState};

/// Default log filter when neither `--log-filter` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "info,storefront_app=debug,storefront_core=debug";

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Browse the demo catalog, fill a cart and place a demo order",
    after_help = "Reads one command per line on stdin and answers with one JSON line on stdout.\nType `help` inside the shell for the command list."
)]
pub struct Cli {
    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Parse CLI flags
/// 2. Initialize tracing (logs go to stderr, stdout carries responses)
/// 3. Load configuration from the environment
/// 4. Build state objects (CatalogState, CartState, ConfigState)
/// 5. Serve shell lines until EOF or `quit`
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    init_tracing(cli.log_filter.as_deref())?;

    let config = ConfigState::from_env();
    let catalog = CatalogState::default();
    info!(
        store = %config.store_name,
        products = catalog.inner().len(),
        "Starting storefront"
    );

    let shell = Shell::new(catalog, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-filter debug` or `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for the storefront crates
fn init_tracing(filter: Option<&str>) -> Result<(), AppError> {
    let filter = match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| AppError::Logging(e.to_string()))?
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
