//! Theme-aware styling on top of `console`

use crate::primitives::Theme;
use console::Style;

/// Status symbols
pub mod symbols {
    pub const CHECKMARK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const WARNING: &str = "!";
    pub const INFO: &str = "·";
    pub const BULLET: &str = "•";
}

/// Semantic styles for one color setting and theme
#[derive(Debug, Clone)]
pub struct StyleManager {
    colors: bool,
    theme: Theme,
}

impl StyleManager {
    pub fn new(colors: bool, theme: Theme) -> Self {
        Self { colors, theme }
    }

    /// No escapes at all, e.g. for tests and piped output
    pub fn plain() -> Self {
        Self::new(false, Theme::Light)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style.force_styling(self.colors).apply_to(text).to_string()
    }

    pub fn style_success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.paint(Style::new().red(), text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn style_info(&self, text: &str) -> String {
        let style = match self.theme {
            Theme::Dark => Style::new().cyan().bright(),
            Theme::Light => Style::new().blue(),
        };
        self.paint(style, text)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    /// Muted text; brighter grey on dark backgrounds
    pub fn style_subtle(&self, text: &str) -> String {
        let style = match self.theme {
            Theme::Dark => Style::new().color256(248),
            Theme::Light => Style::new().color256(240),
        };
        self.paint(style, text)
    }

    /// Mod names and other headline values
    pub fn style_accent(&self, text: &str) -> String {
        let style = match self.theme {
            Theme::Dark => Style::new().magenta().bright().bold(),
            Theme::Light => Style::new().magenta().bold(),
        };
        self.paint(style, text)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(symbols::CHECKMARK), message)
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(symbols::CROSS), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(symbols::WARNING), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(symbols::INFO), message)
    }

    pub fn bullet(&self) -> &'static str {
        symbols::BULLET
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
