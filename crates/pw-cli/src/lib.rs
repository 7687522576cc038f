//! ProjectWizard command-line front end
//!
//! - [`cli`]: clap command tree
//! - [`config`]: defaults, TOML file and environment overrides
//! - [`app`]: command handlers over the history store and generator

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod config;

use tracing_subscriber::EnvFilter;

pub use app::{list_categories, OutputFormat, Wizard};
pub use cli::build_cli;
pub use config::{ConfigError, WizardConfig};

/// Install the fmt subscriber; `RUST_LOG` wins over the configured filter
pub fn init_tracing(config: &WizardConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
