//! Application configuration
//!
//! Precedence: defaults -> .env -> standard env vars -> MODTRANS_* env
//! vars and CLI args.

use crate::networking::NetworkingConfig;
use crate::primitives::*;
use crate::storage::STORE_FILE_NAME;
use clap::Parser;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    pub const CATALOG_URL: &str = "https://halitflyn.github.io/ua/data.json";
    pub const CACHE_TTL_SECS: &str = "3600";
    pub const NET_TIMEOUT: &str = "30";
    pub const DOWNLOAD_DELAY_MS: &str = "500";
    pub const LOG_LEVEL: &str = "0";
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

mod default_fns {
    use super::*;

    pub fn catalog_url() -> String {
        defaults::CATALOG_URL.to_string()
    }

    pub fn cache_ttl_secs() -> u64 {
        3600
    }

    pub fn net_timeout() -> u64 {
        30
    }

    pub fn download_delay_ms() -> u64 {
        500
    }

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Catalog JSON location
    #[arg(long, env = "MODTRANS_CATALOG_URL", default_value = defaults::CATALOG_URL)]
    #[serde(default = "default_fns::catalog_url")]
    pub catalog_url: String,

    /// Directory holding the local store (catalog cache, theme)
    #[arg(long, env = "MODTRANS_CACHE_DIR")]
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Seconds a cached catalog stays fresh
    #[arg(long, env = "MODTRANS_CACHE_TTL", default_value = defaults::CACHE_TTL_SECS)]
    #[serde(default = "default_fns::cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// HTTP timeout in seconds
    #[arg(short, long, env = "MODTRANS_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Pause between the two downloads of a pair, in milliseconds
    #[arg(long, env = "MODTRANS_DOWNLOAD_DELAY_MS", default_value = defaults::DOWNLOAD_DELAY_MS)]
    #[serde(default = "default_fns::download_delay_ms")]
    pub download_delay_ms: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "MODTRANS_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, env = "MODTRANS_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "MODTRANS_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "MODTRANS_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,

    /// Answer prompts with their defaults
    #[arg(short, long, global = true, env = "MODTRANS_YES")]
    #[serde(default)]
    pub yes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_fns::catalog_url(),
            cache_dir: None,
            cache_ttl_secs: default_fns::cache_ttl_secs(),
            net_timeout: default_fns::net_timeout(),
            download_delay_ms: default_fns::download_delay_ms(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
            yes: false,
        }
    }
}

impl AppConfig {
    pub fn to_logger_config(&self, ansi: bool) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    pub fn networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            timeout_seconds: self.net_timeout,
            ..NetworkingConfig::default()
        }
    }

    pub fn cache_window(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }

    /// Store file inside the cache directory
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(STORE_FILE_NAME))
            .ok_or(ConfigError::CacheDirUnavailable)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.cache_dir.is_some() {
            self.cache_dir = other.cache_dir;
        }
        if other.catalog_url != default_fns::catalog_url() {
            self.catalog_url = other.catalog_url;
        }

        if other.cache_ttl_secs != default_fns::cache_ttl_secs() {
            self.cache_ttl_secs = other.cache_ttl_secs;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.download_delay_ms != default_fns::download_delay_ms() {
            self.download_delay_ms = other.download_delay_ms;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }
        self.yes |= other.yes;

        self
    }

    /// Validate the final configuration, resolving the cache directory
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.catalog_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "catalog URL must not be empty".to_string(),
            });
        }
        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log level {} is out of range 0..=4", self.log_level),
            });
        }

        if self.cache_dir.is_none() {
            let dirs = ProjectDirs::from("org", "halitflyn", "modtrans")
                .ok_or(ConfigError::CacheDirUnavailable)?;
            self.cache_dir = Some(dirs.cache_dir().to_path_buf());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
