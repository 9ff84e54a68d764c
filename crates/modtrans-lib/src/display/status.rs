//! Status lines on stdout

use super::styling::StyleManager;

pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// `✓ item: details`, or `✓ item` when details are empty
    pub fn success(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_success(&join_detail(item, details)));
    }

    pub fn error(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_error(&join_detail(item, details)));
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    pub fn message(&self, text: &str) {
        println!("{text}");
    }

    pub fn emphasis(&self, text: &str) {
        println!("{}", self.styling.style_emphasis(text));
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }

    pub fn list(&self, items: &[&str]) {
        for item in items {
            println!("  {} {}", self.styling.bullet(), item);
        }
    }

    pub fn section(&self, title: &str) {
        println!();
        println!("{}", self.styling.style_accent(title));
    }
}

pub(crate) fn join_detail(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{item}: {details}")
    }
}
