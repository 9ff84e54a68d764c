//! Recording display provider for tests

use super::providers::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Records every display call instead of printing
#[derive(Clone, Default)]
pub struct MockDisplayProvider {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

/// One recorded display call
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    StatusSuccess { item: String, details: String },
    StatusError { item: String, details: String },
    StatusWarning { message: String },
    StatusInfo { message: String },
    StatusMessage { text: String },
    StatusEmphasis { text: String },
    StatusSubtle { text: String },
    StatusList { items: Vec<String> },
    StatusSection { title: String },

    ProgressSpinner { message: String },
    ProgressFinish { message: String },
    ProgressAbandon { message: String },
    ProgressClear,

    StructuredTable { headers: Vec<String>, rows: Vec<Vec<String>> },
    StructuredList { items: Vec<String> },
    StructuredProperties { pairs: Vec<(String, String)> },
}

impl DisplayCall {
    pub fn call_type(&self) -> &'static str {
        match self {
            DisplayCall::StatusSuccess { .. } => "status_success",
            DisplayCall::StatusError { .. } => "status_error",
            DisplayCall::StatusWarning { .. } => "status_warning",
            DisplayCall::StatusInfo { .. } => "status_info",
            DisplayCall::StatusMessage { .. } => "status_message",
            DisplayCall::StatusEmphasis { .. } => "status_emphasis",
            DisplayCall::StatusSubtle { .. } => "status_subtle",
            DisplayCall::StatusList { .. } => "status_list",
            DisplayCall::StatusSection { .. } => "status_section",
            DisplayCall::ProgressSpinner { .. } => "progress_spinner",
            DisplayCall::ProgressFinish { .. } => "progress_finish",
            DisplayCall::ProgressAbandon { .. } => "progress_abandon",
            DisplayCall::ProgressClear => "progress_clear",
            DisplayCall::StructuredTable { .. } => "structured_table",
            DisplayCall::StructuredList { .. } => "structured_list",
            DisplayCall::StructuredProperties { .. } => "structured_properties",
        }
    }

    /// All text carried by the call, space-joined
    pub fn text(&self) -> String {
        match self {
            DisplayCall::StatusSuccess { item, details }
            | DisplayCall::StatusError { item, details } => format!("{item} {details}"),
            DisplayCall::StatusWarning { message }
            | DisplayCall::StatusInfo { message }
            | DisplayCall::ProgressSpinner { message }
            | DisplayCall::ProgressFinish { message }
            | DisplayCall::ProgressAbandon { message } => message.clone(),
            DisplayCall::StatusMessage { text }
            | DisplayCall::StatusEmphasis { text }
            | DisplayCall::StatusSubtle { text } => text.clone(),
            DisplayCall::StatusSection { title } => title.clone(),
            DisplayCall::StatusList { items } | DisplayCall::StructuredList { items } => {
                items.join(" ")
            }
            DisplayCall::StructuredTable { headers, rows } => std::iter::once(headers)
                .chain(rows.iter())
                .map(|row| row.join(" "))
                .collect::<Vec<_>>()
                .join(" "),
            DisplayCall::StructuredProperties { pairs } => pairs
                .iter()
                .map(|(k, v)| format!("{k} {v}"))
                .collect::<Vec<_>>()
                .join(" "),
            DisplayCall::ProgressClear => String::new(),
        }
    }
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> Vec<DisplayCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn has_call(&self, expected: &DisplayCall) -> bool {
        self.get_calls().contains(expected)
    }

    pub fn count_calls(&self, call_type: &str) -> usize {
        self.get_calls()
            .iter()
            .filter(|call| call.call_type() == call_type)
            .count()
    }

    /// Whether any recorded call's text contains `needle`
    pub fn output_contains(&self, needle: &str) -> bool {
        self.get_calls().iter().any(|call| call.text().contains(needle))
    }

    fn recorder(&self) -> Recorder {
        Recorder {
            calls: Arc::clone(&self.calls),
        }
    }
}

#[derive(Clone)]
struct Recorder {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl Recorder {
    fn record(&self, call: DisplayCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl DisplayProvider for MockDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider + '_> {
        Box::new(self.recorder())
    }

    fn progress(&self) -> Box<dyn ProgressProvider + '_> {
        Box::new(self.recorder())
    }

    fn table(&self) -> Box<dyn StructuredProvider + '_> {
        Box::new(self.recorder())
    }
}

impl StatusProvider for Recorder {
    fn success(&self, item: &str, details: &str) {
        self.record(DisplayCall::StatusSuccess {
            item: item.to_string(),
            details: details.to_string(),
        });
    }

    fn error(&self, item: &str, details: &str) {
        self.record(DisplayCall::StatusError {
            item: item.to_string(),
            details: details.to_string(),
        });
    }

    fn warning(&self, message: &str) {
        self.record(DisplayCall::StatusWarning {
            message: message.to_string(),
        });
    }

    fn info(&self, message: &str) {
        self.record(DisplayCall::StatusInfo {
            message: message.to_string(),
        });
    }

    fn message(&self, text: &str) {
        self.record(DisplayCall::StatusMessage {
            text: text.to_string(),
        });
    }

    fn emphasis(&self, text: &str) {
        self.record(DisplayCall::StatusEmphasis {
            text: text.to_string(),
        });
    }

    fn subtle(&self, text: &str) {
        self.record(DisplayCall::StatusSubtle {
            text: text.to_string(),
        });
    }

    fn list(&self, items: &[&str]) {
        self.record(DisplayCall::StatusList {
            items: owned(items),
        });
    }

    fn section(&self, title: &str) {
        self.record(DisplayCall::StatusSection {
            title: title.to_string(),
        });
    }
}

impl ProgressProvider for Recorder {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        self.record(DisplayCall::ProgressSpinner {
            message: message.to_string(),
        });
        Box::new(self.clone())
    }
}

impl ProgressTracker for Recorder {
    fn finish(&self, message: &str) {
        self.record(DisplayCall::ProgressFinish {
            message: message.to_string(),
        });
    }

    fn abandon(&self, message: &str) {
        self.record(DisplayCall::ProgressAbandon {
            message: message.to_string(),
        });
    }

    fn finish_clear(&self) {
        self.record(DisplayCall::ProgressClear);
    }
}

impl StructuredProvider for Recorder {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]) {
        self.record(DisplayCall::StructuredTable {
            headers: owned(headers),
            rows: rows.iter().map(|row| owned(row)).collect(),
        });
    }

    fn list(&self, items: &[&str]) {
        self.record(DisplayCall::StructuredList {
            items: owned(items),
        });
    }

    fn properties(&self, pairs: &[(&str, &str)]) {
        self.record(DisplayCall::StructuredProperties {
            pairs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    include!("mock.test.rs");
}
