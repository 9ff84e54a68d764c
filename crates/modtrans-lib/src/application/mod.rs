//! Application layer: CLI, configuration, sessions and command handlers

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;
pub mod session;
#[cfg(any(test, feature = "test-utils"))]
pub mod session_mocks;

pub use cli::{Cli, CliConfig, Commands, FilterArgs, ThemeChoice};
pub use commands::{execute_command, execute_command_with_session};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
pub use loader::load_env_files;
pub use session::{CommandSession, Session};
