use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Assign one palette colour per category, as `#rrggbb` strings.
pub fn category_colors(categories: &[String]) -> BTreeMap<String, String> {
    categories
        .iter()
        .zip(generate_palette(categories.len()))
        .map(|(name, c)| (name.clone(), to_hex(c)))
        .collect()
}

// ---------------------------------------------------------------------------
// Hex conversions
// ---------------------------------------------------------------------------

pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `#rrggbb` (case-insensitive). Anything else yields `None`.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Same colour with the given opacity in `[0, 1]`.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_outcome_colours() {
        assert_eq!(parse_hex("#00cc96"), Some(Color32::from_rgb(0, 0xcc, 0x96)));
        assert_eq!(parse_hex("#EF553B"), Some(Color32::from_rgb(0xef, 0x55, 0x3b)));
        assert_eq!(parse_hex("00cc96"), None);
        assert_eq!(parse_hex("#00cc9"), None);
    }

    #[test]
    fn hex_formats_lowercase() {
        assert_eq!(to_hex(Color32::from_rgb(0xef, 0x55, 0x3b)), "#ef553b");
    }

    #[test]
    fn categories_get_distinct_colours() {
        let sites = vec!["CCAFS LC-40".to_string(), "KSC LC-39A".to_string()];
        let colors = category_colors(&sites);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors["CCAFS LC-40"], colors["KSC LC-39A"]);
    }
}
