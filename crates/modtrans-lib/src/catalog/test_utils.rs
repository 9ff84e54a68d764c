//! Catalog builders shared by unit and end-to-end tests

use super::model::{LangFile, Mod, VersionEntry};

pub fn version_entry(version: &str, loader: &str, author: &str) -> VersionEntry {
    VersionEntry {
        version: version.to_string(),
        loader: loader.to_string(),
        author: author.to_string(),
        link: format!(
            "https://cdn.example.org/{}/{}/{}/mod.jar",
            author.to_lowercase(),
            loader.to_lowercase(),
            version
        ),
    }
}

pub fn lang_file(author: &str, url: &str) -> LangFile {
    LangFile {
        author: author.to_string(),
        url: url.to_string(),
    }
}

pub fn mod_with(name: &str, versions: Vec<VersionEntry>, lang_files: Vec<LangFile>) -> Mod {
    Mod {
        name: name.to_string(),
        description: format!("{name} description"),
        image_url: format!("https://cdn.example.org/{}.png", name.to_lowercase()),
        modrinth_link: format!("https://modrinth.com/mod/{}", name.to_lowercase()),
        versions,
        lang_files,
    }
}

/// Two entries by different authors, each with a lowercase-author lang file
pub fn sodium_mod() -> Mod {
    mod_with(
        "Sodium",
        vec![
            version_entry("1.20.1", "Fabric", "A"),
            version_entry("1.19", "Forge", "B"),
        ],
        vec![lang_file("a", "x"), lang_file("b", "y")],
    )
}

pub fn sample_catalog() -> Vec<Mod> {
    vec![
        sodium_mod(),
        mod_with(
            "Create",
            vec![
                version_entry("1.20.1", "Forge", "Kozak"),
                version_entry("1.20.1", "NeoForge", "Kozak"),
                version_entry("1.18.2", "Forge", "Mriya"),
            ],
            vec![
                lang_file("Kozak", "https://cdn.example.org/create/uk_ua.json"),
                lang_file("Mriya", "https://cdn.example.org/create-old/uk_ua.json"),
            ],
        ),
        mod_with(
            "Create Crafts & Additions",
            vec![version_entry("1.20.1", "Forge", "Kozak")],
            vec![],
        ),
    ]
}

pub fn sample_catalog_json() -> String {
    serde_json::to_string(&sample_catalog()).unwrap_or_default()
}
