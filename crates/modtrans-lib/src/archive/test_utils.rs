//! In-memory jar builders for tests

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Zip archive holding `entries` in order
pub fn build_jar(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn forge_jar(mod_id: &str) -> Vec<u8> {
    build_jar(&[
        (
            "META-INF/mods.toml",
            &format!("modLoader=\"javafml\"\n[[mods]]\nmodId = \"{mod_id}\"\n"),
        ),
        ("com/example/Main.class", "bytecode"),
    ])
}

/// Entry names of an archive, in order
pub fn entry_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect::<Vec<_>>()
}

pub fn entry_text(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).ok()?;
    let mut text = String::new();
    entry.read_to_string(&mut text).unwrap();
    Some(text)
}
