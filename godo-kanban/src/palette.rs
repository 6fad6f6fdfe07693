//! Fixed color palettes for tasks and columns, and text contrast derivation.
//!
//! Colors are stored on tasks and columns as `#rrggbb` strings. A stored value
//! does not have to be a palette entry; unknown values are kept verbatim and
//! rendered with the default column color.

use crate::types::Theme;

/// A named preset color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColor {
    pub name: &'static str,
    pub value: &'static str,
}

/// A column color with a dark-theme value and a light-theme variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnColor {
    pub name: &'static str,
    pub value: &'static str,
    pub light: &'static str,
}

/// Task colors. The first entry is the default for new tasks.
pub const TASK_COLORS: &[PresetColor] = &[
    PresetColor { name: "Gray", value: "#6B7280" },
    PresetColor { name: "Red", value: "#c24226" },
    PresetColor { name: "Amber", value: "#F59E0B" },
    PresetColor { name: "Green", value: "#10B981" },
    PresetColor { name: "Blue", value: "#3B82F6" },
    PresetColor { name: "Violet", value: "#8B5CF6" },
];

/// Column colors. The first entry is the default for new columns.
pub const COLUMN_COLORS: &[ColumnColor] = &[
    ColumnColor { name: "Default", value: "#2d3748", light: "#e5e7eb" },
    ColumnColor { name: "Deep Blue", value: "#1e40af", light: "#dbeafe" },
    ColumnColor { name: "Forest Green", value: "#166534", light: "#d1fae5" },
    ColumnColor { name: "Rich Purple", value: "#581c87", light: "#f3e8ff" },
    ColumnColor { name: "Warm Red", value: "#991b1b", light: "#fee2e2" },
    ColumnColor { name: "Slate Gray", value: "#334155", light: "#e2e8f0" },
];

pub const DEFAULT_TASK_COLOR: &str = TASK_COLORS[0].value;
pub const DEFAULT_COLUMN_COLOR: &str = COLUMN_COLORS[0].value;

/// Text color used on bright backgrounds
pub const DARK_TEXT: &str = "#1f2937";
/// Text color used on dim backgrounds
pub const LIGHT_TEXT: &str = "#f3f4f6";

/// Perceived brightness above which text switches to [`DARK_TEXT`]
const BRIGHTNESS_THRESHOLD: f64 = 135.0;

/// Look up a task preset by name, case-insensitively
pub fn task_color(name: &str) -> Option<&'static str> {
    TASK_COLORS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.value)
}

/// Find the column palette entry whose dark or light value matches `color`
pub fn find_column_color(color: &str) -> Option<&'static ColumnColor> {
    COLUMN_COLORS
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(color) || c.light.eq_ignore_ascii_case(color))
}

/// Background a column is painted with under `theme`.
///
/// Unrecognized stored colors fall back to the default entry.
pub fn column_background(color: &str, theme: Theme) -> &'static str {
    let entry = COLUMN_COLORS
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(color))
        .unwrap_or(&COLUMN_COLORS[0]);
    match theme {
        Theme::Light => entry.light,
        Theme::Dark => entry.value,
    }
}

/// Pick readable text for `background`.
///
/// Light column variants always get dark text in the light theme. Anything
/// else goes through the perceived-brightness rule; values that do not parse
/// as `#rrggbb` get light text.
pub fn contrasting_text_color(background: &str, theme: Theme) -> &'static str {
    if theme == Theme::Light
        && COLUMN_COLORS
            .iter()
            .any(|c| c.light.eq_ignore_ascii_case(background))
    {
        return DARK_TEXT;
    }

    match perceived_brightness(background) {
        Some(b) if b > BRIGHTNESS_THRESHOLD => DARK_TEXT,
        _ => LIGHT_TEXT,
    }
}

/// Border under a column header, chosen to stay visible against its text
pub fn header_border_color(text_color: &str) -> &'static str {
    if text_color == LIGHT_TEXT {
        "#4b5563"
    } else {
        "#d1d5db"
    }
}

/// `sqrt(0.299 r² + 0.587 g² + 0.114 b²)` for a `#rrggbb` color
pub fn perceived_brightness(color: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(color)?;
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    Some((0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt())
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if !hex.is_ascii() || hex.len() < 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(DEFAULT_TASK_COLOR, "#6B7280");
        assert_eq!(DEFAULT_COLUMN_COLOR, "#2d3748");
    }

    #[test]
    fn test_task_color_lookup() {
        assert_eq!(task_color("blue"), Some("#3B82F6"));
        assert_eq!(task_color("Amber"), Some("#F59E0B"));
        assert_eq!(task_color("chartreuse"), None);
    }

    #[test]
    fn test_column_background_by_theme() {
        assert_eq!(column_background("#1e40af", Theme::Dark), "#1e40af");
        assert_eq!(column_background("#1e40af", Theme::Light), "#dbeafe");
        // Unknown colors render as the default entry
        assert_eq!(column_background("#123456", Theme::Dark), "#2d3748");
        assert_eq!(column_background("#123456", Theme::Light), "#e5e7eb");
    }

    #[test]
    fn test_contrast_threshold() {
        // Amber is bright, gray-blue column default is dim
        assert_eq!(contrasting_text_color("#F59E0B", Theme::Dark), DARK_TEXT);
        assert_eq!(contrasting_text_color("#2d3748", Theme::Dark), LIGHT_TEXT);
        assert_eq!(contrasting_text_color("#ffffff", Theme::Dark), DARK_TEXT);
        assert_eq!(contrasting_text_color("#000000", Theme::Dark), LIGHT_TEXT);
    }

    #[test]
    fn test_light_variant_always_dark_text_in_light_theme() {
        for c in COLUMN_COLORS {
            assert_eq!(contrasting_text_color(c.light, Theme::Light), DARK_TEXT);
        }
    }

    #[test]
    fn test_unparseable_color_gets_light_text() {
        assert_eq!(contrasting_text_color("tomato", Theme::Dark), LIGHT_TEXT);
        assert_eq!(contrasting_text_color("#12", Theme::Dark), LIGHT_TEXT);
        assert_eq!(contrasting_text_color("#aé1234", Theme::Dark), LIGHT_TEXT);
        assert_eq!(contrasting_text_color("#12é456", Theme::Dark), LIGHT_TEXT);
        assert_eq!(perceived_brightness("ééé"), None);
        assert!(perceived_brightness("#zzzzzz").is_none());
    }

    #[test]
    fn test_header_border_follows_text() {
        assert_eq!(header_border_color(LIGHT_TEXT), "#4b5563");
        assert_eq!(header_border_color(DARK_TEXT), "#d1d5db");
    }

    #[test]
    fn test_find_column_color_matches_either_variant() {
        assert_eq!(find_column_color("#166534").unwrap().name, "Forest Green");
        assert_eq!(find_column_color("#d1fae5").unwrap().name, "Forest Green");
        assert!(find_column_color("#abcdef").is_none());
    }
}
