use crate::catalog::{FilterEvent, FilterState};
use crate::primitives::ConfigError;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::config::AppConfig;

/// modtrans CLI - Ukrainian translations for Minecraft mods
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "modtrans")]
#[command(about = "Browse, download and install Ukrainian translations for Minecraft mods")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from(Cli::parse()))
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Version/loader/author constraints shared by the catalog commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FilterArgs {
    /// Minecraft version, e.g. 1.20.1
    #[arg(long = "version", value_name = "VERSION")]
    pub game_version: Option<String>,

    /// Mod loader, e.g. Forge
    #[arg(short, long)]
    pub loader: Option<String>,

    /// Translation author
    #[arg(short, long)]
    pub author: Option<String>,
}

impl FilterArgs {
    /// Filter state reached by applying each given constraint as an event
    pub fn to_filter_state(&self, search: Option<&str>) -> FilterState {
        let events = [
            search.map(|s| FilterEvent::Search(s.to_string())),
            Some(FilterEvent::Version(self.game_version.clone())),
            Some(FilterEvent::Loader(self.loader.clone())),
            Some(FilterEvent::Author(self.author.clone())),
        ];

        events
            .into_iter()
            .flatten()
            .fold(FilterState::default(), FilterState::with)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List mods matching the filters
    List {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the translations available for one mod
    Show {
        /// Mod name (exact or unique partial match)
        name: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Download a mod and its translation
    Get {
        /// Mod name (exact or unique partial match)
        name: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Which translation to take when several match (1-based)
        #[arg(short, long)]
        pick: Option<usize>,

        /// Directory to save into (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the available versions, loaders and authors
    Filters,

    /// Drop the cached catalog and fetch it again
    Refresh,

    /// Put a translation file into a mod jar
    Merge {
        /// Mod archive (.jar)
        jar: PathBuf,

        /// Translation file (.json)
        translation: PathBuf,

        /// Output path (default: <stem>_translated.jar next to the jar)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the display theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
