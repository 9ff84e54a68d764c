//! Command session architecture
//!
//! Each command execution creates a session that owns its providers:
//! display, filesystem, network, key/value storage, config and prompts.
//! Handlers only see `&dyn Session`, so tests compose mocks instead.

use crate::Result;
use crate::application::config::AppConfig;
use crate::application::env::EnvironmentConfig;
use crate::display::{DisplayProvider, LiveDisplayProvider, StyleManager};
use crate::logger::Logger;
use crate::networking::LiveNetworkProvider;
use crate::primitives::ColorIntent;
use crate::storage::{FileStore, KeyValueStore, resolve_theme};
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use crate::networking::NetworkProvider;

/// Provider trait for filesystem operations
pub trait FileSystemProvider: Send + Sync {
    fn current_dir(&self) -> Result<PathBuf>;

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Writes `contents`, creating parent directories as needed
    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    fn app_config(&self) -> &AppConfig;

    /// Terminal background signal, `None` when the terminal does not say
    fn terminal_prefers_dark(&self) -> Option<bool>;
}

/// Provider trait for interactive user input
pub trait InteractiveProvider {
    /// Yes/no question; the default is returned when prompts are off
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick one of `options`; `None` when cancelled or prompts are off
    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>>;
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    fn display(&self) -> &dyn DisplayProvider;

    fn filesystem(&self) -> &dyn FileSystemProvider;

    fn network(&self) -> &dyn NetworkProvider;

    /// Local key/value store (catalog cache, theme)
    fn storage(&self) -> &dyn KeyValueStore;

    fn config(&self) -> &dyn ConfigProvider;

    fn interactive(&self) -> &dyn InteractiveProvider;
}

pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }
}

pub struct LiveConfigProvider {
    app_config: AppConfig,
    prefers_dark: Option<bool>,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            prefers_dark: None,
        }
    }

    pub fn with_environment(mut self, environment: &EnvironmentConfig) -> Self {
        self.prefers_dark = environment.prefers_dark();
        self
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    fn terminal_prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }
}

/// dialoguer prompts; falls back to defaults under `--yes` or without a TTY
pub struct LiveInteractiveProvider {
    yes_mode: bool,
}

impl LiveInteractiveProvider {
    pub fn new(yes_mode: bool) -> Self {
        Self { yes_mode }
    }

    fn is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }

    fn prompts_enabled(&self) -> bool {
        !self.yes_mode && Self::is_tty()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if !self.prompts_enabled() {
            return Ok(default);
        }

        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("Failed to read confirmation")
    }

    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        if !self.prompts_enabled() {
            return Ok(None);
        }

        dialoguer::FuzzySelect::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .context("Failed to read selection")
    }
}

/// Whether stdout output should carry ANSI colors
pub fn colors_enabled(intent: ColorIntent) -> bool {
    match intent {
        ColorIntent::Always => true,
        ColorIntent::Never => false,
        ColorIntent::Auto => console::colors_enabled(),
    }
}

/// CommandSession owns all ephemeral state for a single command execution
pub struct CommandSession<F, N, S, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    S: KeyValueStore,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    display_provider: LiveDisplayProvider,
    filesystem_provider: F,
    network_provider: N,
    storage_provider: S,
    config_provider: C,
    interactive_provider: I,
}

impl
    CommandSession<
        LiveFileSystemProvider,
        LiveNetworkProvider,
        FileStore,
        LiveConfigProvider,
        LiveInteractiveProvider,
    >
{
    /// Production composition; also initializes the logger once per process
    pub fn new(app_config: AppConfig) -> Result<Self> {
        let colors = colors_enabled(app_config.color);
        if let Err(e) = Logger::init(app_config.to_logger_config(colors)) {
            tracing::debug!(error = %e, "Logger already set up");
        }

        let network_provider = LiveNetworkProvider::new(&app_config.networking_config())
            .context("Failed to create HTTP client")?;

        let storage_provider = FileStore::new(app_config.store_path()?);

        let environment = EnvironmentConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable environment");
            EnvironmentConfig::default()
        });
        let config_provider =
            LiveConfigProvider::new(app_config.clone()).with_environment(&environment);
        let theme = resolve_theme(&storage_provider, config_provider.terminal_prefers_dark())
            .context("Failed to read theme preference")?;

        let display_provider = LiveDisplayProvider::new(StyleManager::new(colors, theme));

        Ok(Self {
            display_provider,
            filesystem_provider: LiveFileSystemProvider,
            network_provider,
            storage_provider,
            config_provider,
            interactive_provider: LiveInteractiveProvider::new(app_config.yes),
        })
    }
}

impl<F, N, S, C, I> CommandSession<F, N, S, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    S: KeyValueStore,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Generic composition with custom providers and plain styling
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_with_providers(
        filesystem_provider: F,
        network_provider: N,
        storage_provider: S,
        config_provider: C,
        interactive_provider: I,
    ) -> Self {
        Self {
            display_provider: LiveDisplayProvider::new(StyleManager::plain()),
            filesystem_provider,
            network_provider,
            storage_provider,
            config_provider,
            interactive_provider,
        }
    }
}

impl<F, N, S, C, I> Session for CommandSession<F, N, S, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    S: KeyValueStore,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn network(&self) -> &dyn NetworkProvider {
        &self.network_provider
    }

    fn storage(&self) -> &dyn KeyValueStore {
        &self.storage_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}

#[cfg(test)]
mod tests {
    include!("session.test.rs");
}
