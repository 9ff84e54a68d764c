use super::*;

#[test]
fn test_plain_styling_has_no_escapes() {
    let styling = StyleManager::plain();
    assert_eq!(styling.format_success("done"), "✓ done");
    assert_eq!(styling.format_error("failed"), "✗ failed");
    assert_eq!(styling.style_accent("Sodium"), "Sodium");
}

#[test]
fn test_colored_styling_emits_escapes() {
    let styling = StyleManager::new(true, Theme::Dark);
    let styled = styling.style_success("ok");
    assert!(styled.contains('\u{1b}'));
    assert_eq!(console::strip_ansi_codes(&styled), "ok");
}

#[test]
fn test_theme_changes_subtle_color() {
    let dark = StyleManager::new(true, Theme::Dark).style_subtle("x");
    let light = StyleManager::new(true, Theme::Light).style_subtle("x");
    assert_ne!(dark, light);
}
