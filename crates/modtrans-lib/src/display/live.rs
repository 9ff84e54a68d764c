//! Live display provider backed by stdout and indicatif

use super::providers::*;
use super::status::StatusDisplay;
use super::structured::StructuredDisplay;
use super::styling::StyleManager;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Owns the styling and the progress area for one command
pub struct LiveDisplayProvider {
    styling: StyleManager,
    multi_progress: MultiProgress,
}

impl LiveDisplayProvider {
    pub fn new(styling: StyleManager) -> Self {
        Self {
            styling,
            multi_progress: MultiProgress::new(),
        }
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(LiveStatusProvider {
            display: StatusDisplay::new(&self.styling),
        })
    }

    fn progress(&self) -> Box<dyn ProgressProvider + '_> {
        Box::new(LiveProgressProvider {
            parent: &self.multi_progress,
        })
    }

    fn table(&self) -> Box<dyn StructuredProvider + '_> {
        Box::new(LiveStructuredProvider {
            display: StructuredDisplay::new(&self.styling),
        })
    }
}

struct LiveStatusProvider<'a> {
    display: StatusDisplay<'a>,
}

impl StatusProvider for LiveStatusProvider<'_> {
    fn success(&self, item: &str, details: &str) {
        self.display.success(item, details);
    }

    fn error(&self, item: &str, details: &str) {
        self.display.error(item, details);
    }

    fn warning(&self, message: &str) {
        self.display.warning(message);
    }

    fn info(&self, message: &str) {
        self.display.info(message);
    }

    fn message(&self, text: &str) {
        self.display.message(text);
    }

    fn emphasis(&self, text: &str) {
        self.display.emphasis(text);
    }

    fn subtle(&self, text: &str) {
        self.display.subtle(text);
    }

    fn list(&self, items: &[&str]) {
        self.display.list(items);
    }

    fn section(&self, title: &str) {
        self.display.section(title);
    }
}

struct LiveProgressProvider<'a> {
    parent: &'a MultiProgress,
}

impl ProgressProvider for LiveProgressProvider<'_> {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template(SPINNER_TEMPLATE) {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        let bar = self.parent.add(bar);
        bar.enable_steady_tick(Duration::from_millis(100));
        Box::new(LiveProgressTracker { bar })
    }
}

struct LiveProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker for LiveProgressTracker {
    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }

    fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

struct LiveStructuredProvider<'a> {
    display: StructuredDisplay<'a>,
}

impl StructuredProvider for LiveStructuredProvider<'_> {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]) {
        self.display.table(headers, rows);
    }

    fn list(&self, items: &[&str]) {
        self.display.list(items);
    }

    fn properties(&self, pairs: &[(&str, &str)]) {
        self.display.pairs(pairs);
    }
}
