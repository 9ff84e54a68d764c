use super::*;
use crate::catalog::test_utils::*;

fn loader(value: &str) -> FilterState {
    FilterState::default().with(FilterEvent::Loader(Some(value.to_string())))
}

fn version(value: &str) -> FilterState {
    FilterState::default().with(FilterEvent::Version(Some(value.to_string())))
}

fn author(value: &str) -> FilterState {
    FilterState::default().with(FilterEvent::Author(Some(value.to_string())))
}

// ===== MATCHING TRANSLATIONS =====

#[test]
fn test_loader_filter_selects_first_entry_and_first_lang_file() {
    let m = sodium_mod();
    let result = matching_translations(&m, &loader("Fabric"));

    assert_eq!(result.len(), 1);
    assert!(std::ptr::eq(result[0].version, &m.versions[0]));
    assert!(std::ptr::eq(result[0].lang_file, &m.lang_files[0]));
}

#[test]
fn test_unknown_version_yields_nothing() {
    let m = sodium_mod();
    assert!(matching_translations(&m, &version("2.0")).is_empty());
}

#[test]
fn test_no_filters_pairs_every_translated_entry() {
    let m = sodium_mod();
    let result = matching_translations(&m, &FilterState::default());

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].lang_file.url, "x");
    assert_eq!(result[1].lang_file.url, "y");
}

#[test]
fn test_equality_is_case_insensitive() {
    let m = sodium_mod();
    assert_eq!(matching_translations(&m, &loader("fABRIC")).len(), 1);
    assert_eq!(matching_translations(&m, &author("b")).len(), 1);
}

#[test]
fn test_equality_is_not_substring() {
    let m = sodium_mod();
    // "1.20" is a prefix of "1.20.1" but must not match
    assert!(matching_translations(&m, &version("1.20")).is_empty());
}

#[test]
fn test_filters_are_and_combined() {
    let m = sodium_mod();
    let filter = loader("Fabric").with(FilterEvent::Version(Some("1.19".to_string())));
    assert!(matching_translations(&m, &filter).is_empty());

    let filter = loader("Forge").with(FilterEvent::Version(Some("1.19".to_string())));
    let result = matching_translations(&m, &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].version.author, "B");
}

#[test]
fn test_entries_without_lang_file_are_dropped() {
    let m = mod_with(
        "Untranslated",
        vec![
            version_entry("1.20.1", "Fabric", "Ghost"),
            version_entry("1.20.1", "Forge", "Real"),
        ],
        vec![lang_file("real", "real.json")],
    );

    let result = matching_translations(&m, &FilterState::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].version.author, "Real");
}

#[test]
fn test_first_lang_file_wins_when_authors_repeat() {
    let m = mod_with(
        "Twice",
        vec![version_entry("1.20.1", "Fabric", "Dup")],
        vec![lang_file("dup", "first.json"), lang_file("DUP", "second.json")],
    );

    let result = matching_translations(&m, &FilterState::default());
    assert_eq!(result[0].lang_file.url, "first.json");
}

/// Known limitation: linkage is by author, so one author's entries for
/// different versions all resolve to the same lang file.
#[test]
fn test_author_collision_resolves_to_same_lang_file() {
    let m = mod_with(
        "Collide",
        vec![
            version_entry("1.20.1", "Fabric", "Same"),
            version_entry("1.16.5", "Forge", "Same"),
        ],
        vec![
            lang_file("Same", "only-for-1.20.json"),
            lang_file("Same", "meant-for-1.16.json"),
        ],
    );

    let result = matching_translations(&m, &FilterState::default());
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].lang_file.url, "only-for-1.20.json");
    assert_eq!(result[1].lang_file.url, "only-for-1.20.json");
}

#[test]
fn test_output_is_bounded_and_satisfies_constraints() {
    let filters = [
        FilterState::default(),
        loader("Forge"),
        version("1.20.1"),
        author("kozak"),
        loader("neoforge").with(FilterEvent::Author(Some("KOZAK".to_string()))),
        version("9.9"),
    ];

    for m in sample_catalog() {
        for filter in &filters {
            let result = matching_translations(&m, filter);
            assert!(result.len() <= m.versions.len());
            for t in &result {
                if let Some(v) = &filter.version {
                    assert!(t.version.version.eq_ignore_ascii_case(v));
                }
                if let Some(l) = &filter.loader {
                    assert!(t.version.loader.eq_ignore_ascii_case(l));
                }
                if let Some(a) = &filter.author {
                    assert!(t.version.author.eq_ignore_ascii_case(a));
                }
            }
            // Pure function of its inputs
            assert_eq!(result, matching_translations(&m, filter));
        }
    }
}

// ===== CARD VISIBILITY =====

#[test]
fn test_search_matches_name_substring_case_insensitively() {
    let m = sodium_mod();
    let filter = FilterState::default().with(FilterEvent::Search("DIU".to_string()));
    assert!(card_matches(&m, &filter));

    let filter = FilterState::default().with(FilterEvent::Search("iris".to_string()));
    assert!(!card_matches(&m, &filter));
}

#[test]
fn test_card_uses_substring_where_translations_use_equality() {
    let m = sodium_mod();
    let filter = version("1.20");

    assert!(card_matches(&m, &filter));
    assert!(matching_translations(&m, &filter).is_empty());
}

#[test]
fn test_card_can_be_visible_with_zero_translations() {
    let m = sodium_mod();
    // Each constraint is met by some entry, but never by the same one
    let filter = loader("Fabric").with(FilterEvent::Author(Some("B".to_string())));

    assert!(card_matches(&m, &filter));
    assert!(matching_translations(&m, &filter).is_empty());
}

#[test]
fn test_card_hidden_when_any_aggregate_misses() {
    let m = sodium_mod();
    assert!(!card_matches(&m, &loader("Quilt")));
    assert!(!card_matches(&m, &author("C")));
    assert!(!card_matches(&m, &version("1.18")));
}

// ===== CARD ACTION =====

#[test]
fn test_single_translation_offers_direct_download() {
    let m = sodium_mod();
    match card_action(matching_translations(&m, &loader("Fabric"))) {
        CardAction::Download(t) => assert_eq!(t.lang_file.url, "x"),
        other => panic!("expected download, got {other:?}"),
    }
}

#[test]
fn test_several_or_zero_translations_offer_selection() {
    let m = sodium_mod();
    match card_action(matching_translations(&m, &FilterState::default())) {
        CardAction::Select(list) => assert_eq!(list.len(), 2),
        other => panic!("expected select, got {other:?}"),
    }
    match card_action(matching_translations(&m, &version("2.0"))) {
        CardAction::Select(list) => assert!(list.is_empty()),
        other => panic!("expected select, got {other:?}"),
    }
}

// ===== FILTER EVENTS =====

#[test]
fn test_blank_choices_normalize_to_none_and_reset_clears() {
    let mut filter = FilterState::default();
    filter.apply(FilterEvent::Version(Some("  ".to_string())));
    assert_eq!(filter.version, None);
    assert!(!filter.has_choice());

    filter.apply(FilterEvent::Author(Some("A".to_string())));
    filter.apply(FilterEvent::Search("sod".to_string()));
    assert!(filter.has_choice());

    filter.apply(FilterEvent::Reset);
    assert_eq!(filter, FilterState::default());
}
