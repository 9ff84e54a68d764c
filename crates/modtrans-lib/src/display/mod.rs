//! Terminal display system
//!
//! User-facing output (status lines, spinners, tables) kept apart from
//! logging. Commands talk to the [`DisplayProvider`] handed out by their
//! session, so tests can swap in [`MockDisplayProvider`].

pub mod live;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod providers;
pub mod status;
pub mod structured;
pub mod styling;

pub use live::LiveDisplayProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{DisplayCall, MockDisplayProvider};
pub use providers::{
    DisplayProvider, ProgressProvider, ProgressTracker, StatusProvider, StructuredProvider,
};
pub use status::StatusDisplay;
pub use structured::{StructuredDisplay, render_table};
pub use styling::StyleManager;
