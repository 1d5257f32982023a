//! gridconsole - a rolling console widget with prompt-protected input
//!
//! A console is a fixed grid of single-line rows bound to a container in
//! some host environment. The current row shows a prompt and accepts
//! typing; Enter hands the typed text to an observer, which may write
//! output back, and a new prompt appears on the next row. Old rows scroll
//! off the top so the number of visible rows never changes.
//!
//! ## Module Organization
//!
//! - [`console`] - The console widget, key handling, observer protocol
//! - [`observers`] - Ready-made observers (echo, DOS emulator stub)
//! - [`host`] - Host capabilities: container lookup, cell measurement
//! - [`ui`] - egui host and viewport
//! - [`models`] - Geometry and line models
//! - [`config`] - Configuration files
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use gridconsole::{Console, Key};
//! use gridconsole::host::{ContainerNode, MemoryHost};
//! use gridconsole::observers::EchoBack;
//!
//! # fn main() -> gridconsole::Result<()> {
//! let mut host = MemoryHost::default();
//! host.add_container(ContainerNode::new("div").with_class("console"));
//!
//! let mut console = Console::new(host);
//! console
//!     .bind_to("div.console")?
//!     .on_text_entered(EchoBack::new())
//!     .prompt()?;
//!
//! console.type_text("dir");
//! console.handle_key(Key::Enter);
//! assert_eq!(console.line(2).map(|l| l.text()), Some("dir"));
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

pub mod config;
pub mod console;
pub mod error;
pub mod host;
pub mod models;
pub mod observers;
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader, ConsoleConfig};
pub use console::{Console, ConsoleWriter, Key, KeyOutcome, TextEntered, TextEnteredObserver};
pub use error::{Error, ErrorKind, Result};
pub use models::{GridSize, Line, LineState};

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "GRIDCONSOLE_LOG";

/// Install a compact `tracing` subscriber.
///
/// The filter comes from `GRIDCONSOLE_LOG` when set, otherwise `debug`
/// or `info` depending on `debug`. Does nothing if a global subscriber
/// is already installed.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let env_filter = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| default_level.to_string());

    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();

    if result.is_err() {
        debug!("Global tracing subscriber already installed");
    }
}

/// Load configuration from the default locations, falling back to the
/// built-in defaults when loading fails.
pub fn init() -> Config {
    info!("Initializing {} v{}", NAME, VERSION);

    match ConfigLoader::load() {
        Ok(config) => {
            debug!(
                "Configuration loaded: {}x{} console",
                config.console.columns, config.console.rows
            );
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    }
}

/// Load configuration from an explicit file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let mut loader = ConfigLoader::new();
    let config = loader.load_from_path(config_path)?;
    loader.validate_config(&config)?;
    Ok(config)
}
