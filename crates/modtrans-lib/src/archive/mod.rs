//! Translation merging into mod archives
//!
//! Takes a mod jar and a `uk_ua.json` translation, discovers the mod
//! identifier from the jar's loader metadata and produces a new jar with
//! the translation at `assets/<id>/lang/uk_ua.json`.

use std::path::Path;
use thiserror::Error;

pub mod merge;
pub mod metadata;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use merge::{merge, merge_bytes, output_file_name, validate_inputs};
pub use metadata::{find_mod_id, translation_entry_path};

/// Suffix appended to the jar stem for the merged output
pub const OUTPUT_SUFFIX: &str = "_translated";

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Could not parse mod id from {file}: {reason}")]
    MetadataParse { file: String, reason: String },

    #[error("Could not find mod ID in mods.toml, fabric.mod.json or neoforge.mods.toml")]
    IdentifierNotFound,

    #[error("Archive error: {source}")]
    Archive {
        #[from]
        source: zip::result::ZipError,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// A user-supplied file: its name and raw contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }

    /// Names the file after the last component of `path`
    pub fn from_path(path: &Path, contents: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, contents }
    }
}

/// Result of a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPackage {
    /// Suggested name, `<stem>_translated.jar`
    pub file_name: String,
    pub mod_id: String,
    pub entry_path: String,
    /// Whether an existing translation entry was overwritten
    pub replaced: bool,
    pub bytes: Vec<u8>,
}
