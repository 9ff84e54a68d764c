use super::*;
use crate::archive::test_utils::build_jar;
use std::io::Cursor;

fn mod_id_of(entries: &[(&str, &str)]) -> Result<String, MergeError> {
    let bytes = build_jar(entries);
    let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    find_mod_id(&mut archive)
}

#[test]
fn test_forge_mods_toml() {
    let id = mod_id_of(&[(FORGE_METADATA, "[[mods]]\nmodId=\"create\"\n")]).unwrap();
    assert_eq!(id, "create");
}

#[test]
fn test_pattern_allows_whitespace_around_equals() {
    let id = mod_id_of(&[(FORGE_METADATA, "modId   =   \"jei\"")]).unwrap();
    assert_eq!(id, "jei");
}

#[test]
fn test_forge_file_without_mod_id_aborts_lookup() {
    let err = mod_id_of(&[
        (FORGE_METADATA, "[[mods]]\nversion=\"1.0\"\n"),
        (FABRIC_METADATA, r#"{"id":"fallback"}"#),
    ])
    .unwrap_err();

    assert!(matches!(err, MergeError::MetadataParse { ref file, .. } if file == FORGE_METADATA));
}

#[test]
fn test_forge_takes_precedence_over_fabric() {
    let id = mod_id_of(&[
        (FABRIC_METADATA, r#"{"id":"fabric_id"}"#),
        (FORGE_METADATA, "modId=\"forge_id\""),
    ])
    .unwrap();
    assert_eq!(id, "forge_id");
}

#[test]
fn test_fabric_mod_json() {
    let id = mod_id_of(&[(FABRIC_METADATA, r#"{"schemaVersion":1,"id":"sodium"}"#)]).unwrap();
    assert_eq!(id, "sodium");
}

#[test]
fn test_fabric_malformed_json_is_parse_error() {
    let err = mod_id_of(&[(FABRIC_METADATA, "{ id: sodium")]).unwrap_err();
    assert!(matches!(err, MergeError::MetadataParse { .. }));
}

#[test]
fn test_fabric_non_string_id_is_parse_error() {
    let err = mod_id_of(&[(FABRIC_METADATA, r#"{"id":42}"#)]).unwrap_err();
    assert!(matches!(err, MergeError::MetadataParse { .. }));
}

#[test]
fn test_neoforge_fallback() {
    let id = mod_id_of(&[(NEOFORGE_METADATA, "[[mods]]\nmodId=\"neo\"\n")]).unwrap();
    assert_eq!(id, "neo");
}

#[test]
fn test_no_metadata_is_identifier_not_found() {
    let err = mod_id_of(&[("pack.mcmeta", "{}")]).unwrap_err();
    assert!(matches!(err, MergeError::IdentifierNotFound));
}

#[test]
fn test_entry_path() {
    assert_eq!(
        translation_entry_path("create"),
        "assets/create/lang/uk_ua.json"
    );
}
