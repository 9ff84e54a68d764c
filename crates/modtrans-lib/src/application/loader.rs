//! Configuration loading: env files and layer resolution

use crate::primitives::ConfigError;
use tracing::debug;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read before the command line is parsed
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Loads `.env.local` then `.env` into the process environment
///
/// Missing files are skipped. Values already present in the environment
/// are never overwritten.
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(path) => debug!(file = %path.display(), "Loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Resolve config: defaults -> standard env vars -> CLI
    ///
    /// `cli` already carries `MODTRANS_*` values, which clap reads.
    pub fn resolve(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env.apply_color_config(config.color);
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
