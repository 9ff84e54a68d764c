//! Catalog records as served in `data.json`

use serde::{Deserialize, Serialize};

/// One mod and its available translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub modrinth_link: String,
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
    #[serde(default)]
    pub lang_files: Vec<LangFile>,
}

/// A game version / loader pair a translation author published a jar for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Dotted game version, sometimes prefixed (e.g. `<1.18`)
    pub version: String,
    pub loader: String,
    pub author: String,
    /// Download URL of the mod jar
    pub link: String,
}

/// Translation payload uploaded by one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangFile {
    pub author: String,
    pub url: String,
}

impl Mod {
    /// Version strings of every entry, duplicates kept
    pub fn version_strings(&self) -> Vec<&str> {
        self.versions.iter().map(|v| v.version.as_str()).collect()
    }

    /// Distinct loaders in first-seen order
    pub fn distinct_loaders(&self) -> Vec<&str> {
        distinct(self.versions.iter().map(|v| v.loader.as_str()))
    }

    /// Distinct version authors in first-seen order
    pub fn distinct_authors(&self) -> Vec<&str> {
        distinct(self.versions.iter().map(|v| v.author.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
