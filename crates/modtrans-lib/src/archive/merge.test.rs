use super::*;
use crate::archive::test_utils::*;
use std::path::Path;

const TRANSLATION: &str = r#"{"block.create.cogwheel":"Зубчасте колесо"}"#;

fn jar_input(name: &str, bytes: Vec<u8>) -> InputFile {
    InputFile::new(name, bytes)
}

fn json_input(text: &str) -> InputFile {
    InputFile::new("uk_ua.json", text.as_bytes().to_vec())
}

#[test]
fn test_merge_adds_translation_entry() {
    let original = forge_jar("create");
    let package = jar_input("create-1.20.1.jar", original.clone());
    let translation = json_input(TRANSLATION);

    let merged = merge(Some(&package), Some(&translation)).unwrap();

    assert_eq!(merged.mod_id, "create");
    assert_eq!(merged.entry_path, "assets/create/lang/uk_ua.json");
    assert_eq!(merged.file_name, "create-1.20.1_translated.jar");
    assert!(!merged.replaced);
    assert_eq!(
        entry_names(&merged.bytes).len(),
        entry_names(&original).len() + 1
    );
    assert_eq!(
        entry_text(&merged.bytes, "assets/create/lang/uk_ua.json").as_deref(),
        Some(TRANSLATION)
    );
    // Input left alone
    assert_eq!(package.contents, original);
}

#[test]
fn test_merge_preserves_other_entries() {
    let merged = merge_bytes(&forge_jar("create"), TRANSLATION).unwrap();

    assert_eq!(
        entry_text(&merged.bytes, "com/example/Main.class").as_deref(),
        Some("bytecode")
    );
    assert!(entry_text(&merged.bytes, "META-INF/mods.toml").is_some());
}

#[test]
fn test_merge_replaces_existing_translation() {
    let original = build_jar(&[
        ("fabric.mod.json", r#"{"id":"sodium"}"#),
        ("assets/sodium/lang/uk_ua.json", r#"{"old":"stale"}"#),
        ("assets/sodium/lang/en_us.json", "{}"),
    ]);

    let merged = merge_bytes(&original, TRANSLATION).unwrap();

    assert!(merged.replaced);
    let names = entry_names(&merged.bytes);
    assert_eq!(names.len(), 3);
    assert_eq!(
        names
            .iter()
            .filter(|n| *n == "assets/sodium/lang/uk_ua.json")
            .count(),
        1
    );
    assert_eq!(
        entry_text(&merged.bytes, "assets/sodium/lang/uk_ua.json").as_deref(),
        Some(TRANSLATION)
    );
}

#[test]
fn test_missing_identifier_produces_no_output() {
    let package = jar_input("plain.jar", build_jar(&[("readme.txt", "hi")]));

    let err = merge(Some(&package), Some(&json_input("{}"))).unwrap_err();

    assert!(matches!(err, MergeError::IdentifierNotFound));
}

#[test]
fn test_missing_file_is_invalid_input() {
    let package = jar_input("a.jar", forge_jar("a"));

    assert!(matches!(
        merge(Some(&package), None),
        Err(MergeError::InvalidInput { .. })
    ));
    assert!(matches!(
        merge(None, Some(&json_input("{}"))),
        Err(MergeError::InvalidInput { .. })
    ));
}

#[test]
fn test_wrong_extensions_are_invalid_input() {
    let zip_named = jar_input("a.zip", forge_jar("a"));
    let jar = jar_input("a.jar", forge_jar("a"));
    let txt = InputFile::new("uk_ua.txt", b"{}".to_vec());

    assert!(matches!(
        merge(Some(&zip_named), Some(&json_input("{}"))),
        Err(MergeError::InvalidInput { .. })
    ));
    assert!(matches!(
        merge(Some(&jar), Some(&txt)),
        Err(MergeError::InvalidInput { .. })
    ));
}

#[test]
fn test_non_utf8_translation_is_invalid_input() {
    let jar = jar_input("a.jar", forge_jar("a"));
    let binary = InputFile::new("uk_ua.json", vec![0xff, 0xfe, 0x00]);

    assert!(matches!(
        merge(Some(&jar), Some(&binary)),
        Err(MergeError::InvalidInput { .. })
    ));
}

#[test]
fn test_garbage_package_is_archive_error() {
    let jar = jar_input("broken.jar", b"definitely not a zip".to_vec());

    assert!(matches!(
        merge(Some(&jar), Some(&json_input("{}"))),
        Err(MergeError::Archive { .. })
    ));
}

#[test]
fn test_output_file_name() {
    assert_eq!(output_file_name("jei-1.20.jar"), "jei-1.20_translated.jar");
    assert_eq!(output_file_name("noext"), "noext_translated.jar");
}

#[test]
fn test_input_file_from_path_uses_file_name() {
    let input = InputFile::from_path(Path::new("/mods/create-1.20.1.jar"), b"abc".to_vec());

    assert_eq!(input.name, "create-1.20.1.jar");
    assert_eq!(input.contents, b"abc".to_vec());
}

#[test]
fn test_validate_inputs_returns_translation_text() {
    let package = jar_input("create.jar", Vec::new());
    let translation = json_input(TRANSLATION);

    let (checked, text) = validate_inputs(Some(&package), Some(&translation)).unwrap();

    assert_eq!(checked.name, "create.jar");
    assert_eq!(text, TRANSLATION);
}
