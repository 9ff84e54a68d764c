use super::*;

#[test]
fn test_table_aligns_columns() {
    let styling = StyleManager::plain();
    let lines = render_table(
        &styling,
        &["Version", "Loader"],
        &[vec!["1.20.1", "Fabric"], vec!["1.19", "NeoForge"]],
        None,
    );

    assert_eq!(
        lines,
        vec![
            "Version | Loader",
            "--------+---------",
            "1.20.1  | Fabric",
            "1.19    | NeoForge",
        ]
    );
}

#[test]
fn test_table_truncates_to_width() {
    let styling = StyleManager::plain();
    let lines = render_table(
        &styling,
        &["Name"],
        &[vec!["Create Crafts & Additions"]],
        Some(10),
    );

    assert!(lines.iter().all(|l| measure_text_width(l) <= 10));
    assert!(lines[2].ends_with("..."));
}

#[test]
fn test_empty_table_renders_nothing() {
    assert!(render_table(&StyleManager::plain(), &[], &[], None).is_empty());
}

#[test]
fn test_short_rows_are_padded() {
    let styling = StyleManager::plain();
    let lines = render_table(&styling, &["A", "B"], &[vec!["x"]], None);
    assert_eq!(lines[2], "x |");
}
