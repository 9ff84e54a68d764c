//! Display provider traits for dependency injection

/// Provider trait for all user-facing communication
pub trait DisplayProvider {
    /// Status messages with semantic meaning
    fn status(&self) -> Box<dyn StatusProvider + '_>;

    /// Spinners for long-running operations
    fn progress(&self) -> Box<dyn ProgressProvider + '_>;

    /// Tables, lists and key/value blocks
    fn table(&self) -> Box<dyn StructuredProvider + '_>;
}

/// Provider trait for status updates and user feedback
pub trait StatusProvider {
    fn success(&self, item: &str, details: &str);

    fn error(&self, item: &str, details: &str);

    fn warning(&self, message: &str);

    fn info(&self, message: &str);

    /// Plain line without a status symbol
    fn message(&self, text: &str);

    fn emphasis(&self, text: &str);

    fn subtle(&self, text: &str);

    /// Bulleted items
    fn list(&self, items: &[&str]);

    /// Header for a section of output
    fn section(&self, title: &str);
}

/// Provider trait for progress tracking
pub trait ProgressProvider {
    /// Spinner for operations of unknown duration
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker>;
}

/// Individual progress tracker
pub trait ProgressTracker {
    /// Finish, leaving `message` on screen
    fn finish(&self, message: &str);

    fn abandon(&self, message: &str);

    fn finish_clear(&self);
}

/// Provider trait for structured output
pub trait StructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<&str>]);

    fn list(&self, items: &[&str]);

    /// Aligned `key | value` lines
    fn properties(&self, pairs: &[(&str, &str)]);
}
