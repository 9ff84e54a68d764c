//! Standard environment variables for color and background detection
//!
//! Honors the usual conventions (NO_COLOR, FORCE_COLOR, CLICOLOR, CI)
//! plus COLORFGBG, which terminals such as rxvt and Konsole export.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Environment variables that affect output
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Any non-empty value disables color
    pub no_color: Option<String>,
    /// 0/false disables, 1/2/3/true forces color
    pub force_color: Option<String>,
    /// 0 disables color
    pub clicolor: Option<String>,
    /// Any value = CI mode
    pub ci: Option<String>,
    /// `fg;bg` (or `fg;default;bg`) terminal palette indices
    pub colorfgbg: Option<String>,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Parses an explicit variable set instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
            .map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Precedence: CI > CLICOLOR < NO_COLOR < FORCE_COLOR
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = ColorIntent::Never,
            Some("1" | "2" | "3" | "true") => color = ColorIntent::Always,
            _ => {}
        }

        color
    }

    /// Whether the terminal background looks dark, if COLORFGBG says so
    ///
    /// The background is the last `;`-separated field. Palette indices
    /// 0-6 and 8 are dark, 7 and 9-15 light; anything else is unknown.
    pub fn prefers_dark(&self) -> Option<bool> {
        let bg = self.colorfgbg.as_deref()?.rsplit(';').next()?;
        match bg.trim().parse::<u8>().ok()? {
            0..=6 | 8 => Some(true),
            7 | 9..=15 => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
