use ratatui::style::{Color, Style, Stylize};
use std::str::FromStr;

use crate::links::DEFAULT_ACCENT;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

/// Parse a `#RRGGBB` color tag, falling back to the default accent.
pub fn color_from_tag(tag: &str) -> Color {
    Color::from_str(tag)
        .or_else(|_| Color::from_str(DEFAULT_ACCENT))
        .unwrap_or(Color::Magenta)
}

/// Perceived brightness in `0.0..=1.0`
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * (r as f32 / 255.0) +
        0.587 * (g as f32 / 255.0) +
        0.114 * (b as f32 / 255.0)
}

/// Near-black brand colors vanish on a dark terminal; lift them to a light gray.
pub fn readable_on_dark(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) if luminance(r, g, b) < 0.2 => Color::Rgb(220, 220, 220),
        Color::Black => Color::Gray,
        other => other,
    }
}

/// Linear blend between two RGB colors, `t` in `0.0..=1.0`.
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tags() {
        assert_eq!(color_from_tag("#0077B5"), Color::Rgb(0x00, 0x77, 0xB5));
        assert_eq!(color_from_tag("not a color"), Color::Rgb(0x66, 0x7e, 0xea));
    }

    #[test]
    fn test_dark_brand_colors_are_lifted() {
        assert_eq!(readable_on_dark(color_from_tag("#181717")), Color::Rgb(220, 220, 220));
        assert_eq!(readable_on_dark(color_from_tag("#E4405F")), Color::Rgb(0xE4, 0x40, 0x5F));
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    }
}
