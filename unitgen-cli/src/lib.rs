//! # unitgen-cli
//!
//! Scaffolds a single Vue or React unit (component or page) in a front-end
//! project and, for pages, registers it in the route table.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `create-component <name>` | Create `src/components/<Name>/<Name>.<vue\|jsx>` |
//! | `create-component <name> -t page` | Create `src/views/<Name>/<Name>.<vue\|jsx>` and add a route |
//!
//! Existing files are never overwritten and routes are never registered
//! twice, so re-running a command is harmless.
//!
//! ## Architecture
//!
//! - [`commands::create`] — the pipeline and its console output
//! - [`commands::detect`] — Vue/React detection from `package.json`
//! - [`commands::emit`] — output path computation and file writing
//! - [`commands::routes`] — route table parsing and insertion
//! - [`commands::templates`] — naming helpers and the [`commands::templates::Dialect`] implementations
//! - [`config`] — optional `unitgen.yaml` project settings

pub mod commands;
pub mod config;
pub mod error;
pub mod unit;

pub use error::ScaffoldError;

/// Initialise the global `tracing` subscriber, writing to stderr.
///
/// Respects the `RUST_LOG` environment variable. Falls back to `warn` so
/// that diagnostics stay out of the normal console output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
