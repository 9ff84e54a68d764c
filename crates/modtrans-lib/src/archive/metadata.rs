//! Mod identifier discovery from loader metadata

use super::MergeError;
use regex::Regex;
use std::io::{Read, Seek};
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

pub const FORGE_METADATA: &str = "META-INF/mods.toml";
pub const FABRIC_METADATA: &str = "fabric.mod.json";
pub const NEOFORGE_METADATA: &str = "META-INF/neoforge.mods.toml";

const MOD_ID_PATTERN: &str = r#"modId\s*=\s*"([^"]+)""#;

/// Archive path the translation is written to
pub fn translation_entry_path(mod_id: &str) -> String {
    format!("assets/{mod_id}/lang/uk_ua.json")
}

/// Text of entry `name`, or `None` when the archive has no such entry
fn read_entry_text<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, MergeError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut raw = Vec::new();
    entry.read_to_end(&mut raw)?;
    String::from_utf8(raw)
        .map(Some)
        .map_err(|_| MergeError::MetadataParse {
            file: name.to_string(),
            reason: "not UTF-8 text".to_string(),
        })
}

fn toml_mod_id(file: &str, text: &str) -> Result<String, MergeError> {
    let pattern = Regex::new(MOD_ID_PATTERN).map_err(|e| MergeError::MetadataParse {
        file: file.to_string(),
        reason: e.to_string(),
    })?;

    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| MergeError::MetadataParse {
            file: file.to_string(),
            reason: "no modId assignment".to_string(),
        })
}

fn fabric_mod_id(text: &str) -> Result<String, MergeError> {
    let parse_error = |reason: String| MergeError::MetadataParse {
        file: FABRIC_METADATA.to_string(),
        reason,
    };

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;

    value
        .get("id")
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| parse_error("missing string field 'id'".to_string()))
}

/// Mod identifier from the first metadata file present
///
/// Lookup order is Forge `mods.toml`, Fabric `fabric.mod.json`, then
/// NeoForge `neoforge.mods.toml`. A file that is present but yields no
/// identifier stops the lookup with `MetadataParse`.
pub fn find_mod_id<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String, MergeError> {
    if let Some(text) = read_entry_text(archive, FORGE_METADATA)? {
        debug!(file = FORGE_METADATA, "Reading mod id");
        return toml_mod_id(FORGE_METADATA, &text);
    }

    if let Some(text) = read_entry_text(archive, FABRIC_METADATA)? {
        debug!(file = FABRIC_METADATA, "Reading mod id");
        return fabric_mod_id(&text);
    }

    if let Some(text) = read_entry_text(archive, NEOFORGE_METADATA)? {
        debug!(file = NEOFORGE_METADATA, "Reading mod id");
        return toml_mod_id(NEOFORGE_METADATA, &text);
    }

    Err(MergeError::IdentifierNotFound)
}

#[cfg(test)]
mod tests {
    include!("metadata.test.rs");
}
