//! Accent color helpers for tab highlights and card borders.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

fn rgba(accent: Option<&str>, alpha: f32) -> Option<String> {
    let (r, g, b) = accent.and_then(parse_hex_rgb)?;
    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// Background for a tab button. Inactive tabs are transparent.
pub fn tab_background(accent: Option<&str>, active: bool) -> String {
    if !active {
        return "transparent".to_owned();
    }
    rgba(accent, 0.1).unwrap_or_else(|| "rgba(255, 255, 255, 0.05)".to_owned())
}

/// Glow around the active tab; only drawn with an accent.
pub fn tab_glow(accent: Option<&str>, active: bool) -> String {
    if !active {
        return "none".to_owned();
    }
    rgba(accent, 0.1).map_or_else(|| "none".to_owned(), |c| format!("0 0 20px {c}"))
}

/// Border color for content cards, or empty to keep the stylesheet default.
pub fn card_border(accent: Option<&str>) -> String {
    rgba(accent, 0.2).unwrap_or_default()
}

const PROJECT_ACCENTS: [&str; 5] = ["#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#3b82f6"];

/// Stable accent color for a project card, cycling through the palette by id.
pub fn project_accent(project_id: u64) -> &'static str {
    let len = PROJECT_ACCENTS.len() as u64;
    #[allow(clippy::cast_possible_truncation)]
    let index = (project_id % len) as usize;
    PROJECT_ACCENTS[index]
}
