use super::*;
use crate::catalog::filter::FilterEvent;
use crate::catalog::state::CatalogState;
use crate::catalog::test_utils::*;

#[test]
fn test_range_uses_numeric_ordering() {
    assert_eq!(
        version_range_label(&["1.9", "1.20.1", "1.16.5"]),
        "1.9 - 1.20.1"
    );
}

#[test]
fn test_single_distinct_version_shows_once() {
    assert_eq!(version_range_label(&["1.20.1", "1.20.1"]), "1.20.1");
}

#[test]
fn test_range_entries_are_skipped() {
    assert_eq!(version_range_label(&["<1.18", "1.19", "1.20"]), "1.19 - 1.20");
}

#[test]
fn test_only_range_entries_falls_back_to_first_raw() {
    assert_eq!(version_range_label(&["<1.18", "<1.12"]), "<1.18");
    assert_eq!(version_range_label(&[]), "N/A");
}

#[test]
fn test_malformed_parts_count_as_zero() {
    // "1.x" compares as 1.0, below 1.2
    assert_eq!(version_range_label(&["1.2", "1.x"]), "1.x - 1.2");
}

#[test]
fn test_card_view_for_single_translation() {
    let state = CatalogState::new(1, vec![sodium_mod()]);
    let (id, m) = state.entries().next().unwrap();
    let filter = FilterState::default().with(FilterEvent::Loader(Some("Fabric".to_string())));

    let card = CardView::build(id, m, &filter);
    assert_eq!(card.version_label, "1.19 - 1.20.1");
    assert_eq!(card.loaders_label, "Fabric - Forge");
    assert_eq!(card.author_label, Some("A"));
    assert!(matches!(card.action, CardAction::Download(_)));
}

#[test]
fn test_card_view_hides_author_when_several() {
    let state = CatalogState::new(1, vec![sodium_mod()]);
    let (id, m) = state.entries().next().unwrap();

    let card = CardView::build(id, m, &FilterState::default());
    assert_eq!(card.author_label, None);
    assert!(matches!(card.action, CardAction::Select(ref list) if list.len() == 2));
}

#[test]
fn test_card_view_same_author_twice_is_single() {
    let m = mod_with(
        "Create",
        vec![
            version_entry("1.20.1", "Forge", "Kozak"),
            version_entry("1.20.1", "NeoForge", "Kozak"),
        ],
        vec![lang_file("Kozak", "u")],
    );
    let state = CatalogState::new(1, vec![m]);
    let (id, m) = state.entries().next().unwrap();

    let card = CardView::build(id, m, &FilterState::default());
    assert_eq!(card.author_label, Some("Kozak"));
    assert_eq!(card.loaders_label, "Forge - NeoForge");
}
