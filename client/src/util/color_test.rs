use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
}

#[test]
fn tab_background_uses_accent_when_active() {
    assert_eq!(tab_background(Some("#8b5cf6"), true), "rgba(139, 92, 246, 0.1)");
    assert_eq!(tab_background(Some("#8b5cf6"), false), "transparent");
}

#[test]
fn tab_background_without_accent_is_neutral() {
    assert_eq!(tab_background(None, true), "rgba(255, 255, 255, 0.05)");
    assert_eq!(tab_background(Some("purple"), true), "rgba(255, 255, 255, 0.05)");
}

#[test]
fn tab_glow_requires_accent_and_active() {
    assert_eq!(tab_glow(Some("#fff"), true), "0 0 20px rgba(255, 255, 255, 0.1)");
    assert_eq!(tab_glow(None, true), "none");
    assert_eq!(tab_glow(Some("#fff"), false), "none");
}

#[test]
fn card_border_empty_without_accent() {
    assert_eq!(card_border(None), "");
    assert_eq!(card_border(Some("#000000")), "rgba(0, 0, 0, 0.2)");
}

#[test]
fn parse_hex_rgb_rejects_non_ascii() {
    assert_eq!(parse_hex_rgb("#é1"), None);
}

#[test]
fn project_accent_cycles_palette() {
    assert_eq!(project_accent(0), project_accent(5));
    assert_ne!(project_accent(1), project_accent(2));
    assert!(parse_hex_rgb(project_accent(42)).is_some());
}
