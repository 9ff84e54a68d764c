use super::*;
use crate::catalog::test_utils::*;

#[test]
fn test_derived_sets_are_sorted_and_distinct() {
    let state = CatalogState::new(1, sample_catalog());

    let versions: Vec<&str> = state.versions().iter().map(String::as_str).collect();
    assert_eq!(versions, vec!["1.18.2", "1.19", "1.20.1"]);

    let loaders: Vec<&str> = state.loaders().iter().map(String::as_str).collect();
    assert_eq!(loaders, vec!["Fabric", "Forge", "NeoForge"]);

    let authors: Vec<&str> = state.authors().iter().map(String::as_str).collect();
    assert_eq!(authors, vec!["A", "B", "Kozak", "Mriya"]);
}

#[test]
fn test_lang_file_authors_do_not_feed_author_choices() {
    let state = CatalogState::new(
        1,
        vec![mod_with(
            "Solo",
            vec![version_entry("1.20", "Fabric", "Writer")],
            vec![lang_file("Someone Else", "u")],
        )],
    );

    assert!(state.authors().contains("Writer"));
    assert!(!state.authors().contains("Someone Else"));
}

#[test]
fn test_rebuild_replaces_rather_than_merges() {
    let first = CatalogState::new(1, sample_catalog());
    assert!(first.loaders().contains("NeoForge"));

    let second = CatalogState::new(2, vec![sodium_mod()]);
    assert!(!second.loaders().contains("NeoForge"));
    assert_eq!(second.len(), 1);
}

#[test]
fn test_mod_id_from_old_generation_does_not_resolve() {
    let first = CatalogState::new(1, sample_catalog());
    let (id, m) = first.entries().next().unwrap();
    assert_eq!(first.get(id), Some(m));

    let second = CatalogState::new(2, sample_catalog());
    assert_eq!(second.get(id), None);
}

#[test]
fn test_get_out_of_range_is_none() {
    let state = CatalogState::new(3, vec![sodium_mod()]);
    let (id, _) = state.entries().next().unwrap();
    assert_eq!(id.generation(), 3);
    assert_eq!(id.index(), 0);
    assert_eq!(id.to_string(), "3:0");

    let empty = CatalogState::empty(3);
    assert!(empty.is_empty());
    assert_eq!(empty.get(id), None);
}

#[test]
fn test_find_by_exact_name_is_case_insensitive() {
    let state = CatalogState::new(1, sample_catalog());
    match state.find_by_name("create") {
        ModLookup::Found(id) => assert_eq!(state.get(id).unwrap().name, "Create"),
        other => panic!("expected exact match, got {other:?}"),
    }
}

#[test]
fn test_find_by_unique_substring() {
    let state = CatalogState::new(1, sample_catalog());
    match state.find_by_name("additions") {
        ModLookup::Found(id) => {
            assert_eq!(state.get(id).unwrap().name, "Create Crafts & Additions")
        }
        other => panic!("expected substring match, got {other:?}"),
    }
}

#[test]
fn test_find_reports_ambiguity_and_absence() {
    let state = CatalogState::new(1, sample_catalog());
    assert_eq!(
        state.find_by_name("o"),
        ModLookup::Ambiguous(vec!["Sodium".to_string(), "Create Crafts & Additions".to_string()])
    );
    assert_eq!(state.find_by_name("iris"), ModLookup::NotFound);
    assert_eq!(state.find_by_name("   "), ModLookup::NotFound);
}
