//! # modtrans Library
//!
//! Browse, download and install Ukrainian translations for Minecraft mods.
//!
//! ## Core Modules
//!
//! - [`catalog`] - Catalog loading behind a freshness-gated cache, filters and cards
//! - [`archive`] - Merging a translation file into a mod jar
//! - [`storage`] - Local key/value store for the cache and preferences
//! - [`networking`] - HTTP access for the catalog and downloads
//! - [`display`] - Terminal output and progress
//! - [`logger`] - Structured logging with progress-aware output
//! - [`primitives`] - Shared types and errors
//! - [`application`] - CLI interface, configuration and command sessions
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! modtrans_lib::main().await
//! # }
//! ```

pub mod application;
pub mod archive;
pub mod catalog;
pub mod display;
pub mod logger;
pub mod networking;
pub mod primitives;
pub mod storage;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use archive::{InputFile, MergeError, MergedPackage, merge};
pub use catalog::{CatalogError, CatalogLoader, CatalogState, FilterState, Mod};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingError};
pub use primitives::{ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, Theme};

// Private imports for the main function
use anyhow::Result;
use application::{CliConfig, EnvironmentConfig, load_env_files};

pub async fn main() -> Result<()> {
    // .env files first so clap's env fallbacks can see them
    load_env_files()?;

    let cli = CliConfig::load()?;
    let environment = EnvironmentConfig::load()?;
    let app_config = AppConfig::resolve(cli.app_config, &environment)?;

    execute_command(CliConfig {
        app_config,
        command: cli.command,
    })
    .await
}
