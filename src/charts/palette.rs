//! Hex color handling shared by the on-screen plot, the SVG renderer and the exporter.

use egui::Color32;
use plotters::style::RGBColor;

/// Used when a series carries a color string we cannot read
pub const FALLBACK_RGB: [u8; 3] = [128, 128, 128];

/// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return None;
    }

    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(rgb)
        }
        _ => None,
    }
}

pub fn rgb_or_fallback(hex: &str) -> [u8; 3] {
    parse_hex(hex).unwrap_or(FALLBACK_RGB)
}

/// Lowercase `#rrggbb`, the form a color picker writes back.
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

pub fn color32(hex: &str) -> Color32 {
    let [r, g, b] = rgb_or_fallback(hex);
    Color32::from_rgb(r, g, b)
}

pub fn plotters_rgb(hex: &str) -> RGBColor {
    let [r, g, b] = rgb_or_fallback(hex);
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#FF6B9D"), Some([255, 107, 157]));
        assert_eq!(parse_hex("ff6b9d"), Some([255, 107, 157]));
        assert_eq!(parse_hex("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex("#0a0"), Some([0, 170, 0]));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#ééé"), None);
        assert_eq!(rgb_or_fallback("red"), FALLBACK_RGB);
    }

    #[test]
    fn test_to_hex_round_trip() {
        assert_eq!(to_hex([135, 206, 235]), "#87ceeb");
        assert_eq!(parse_hex(&to_hex([1, 2, 3])), Some([1, 2, 3]));
        assert_eq!(color32("#87CEEB"), Color32::from_rgb(135, 206, 235));
    }
}
