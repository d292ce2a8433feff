// src/ui/screens/link_hub/background.rs
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::hub::Star;
use crate::ui::style::blend;

const NIGHT_SKY: (u8, u8, u8) = (16, 12, 36);
const GLOW: (u8, u8, u8) = (70, 52, 130);
const GLOW_RADIUS: f32 = 14.0;

/// Star glyphs from faint to bright.
const STAR_GLYPHS: &[&str] = &["·", "∙", "⋆", "✦"];

/// Night sky, a soft glow under the pointer and the twinkling star field.
pub fn render_background(
    stars: &[Star],
    pointer: (u16, u16),
    elapsed: f32,
    area: Rect,
    buf: &mut Buffer,
) {
    let (px, py) = (pointer.0 as f32, pointer.1 as f32);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            // Cells are roughly twice as tall as wide
            let dx = (x as f32 - px) / 2.0;
            let dy = y as f32 - py;
            let distance = (dx * dx + dy * dy).sqrt();
            let glow = (1.0 - distance / GLOW_RADIUS).max(0.0);

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(blend(NIGHT_SKY, GLOW, glow * glow));
            }
        }
    }

    if area.width == 0 || area.height == 0 {
        return;
    }

    for star in stars {
        let x = area.x + ((star.left / 100.0) * area.width as f32) as u16;
        let y = area.y + ((star.top / 100.0) * area.height as f32) as u16;
        let brightness = star.brightness(elapsed);
        let glyph = STAR_GLYPHS[((brightness * (STAR_GLYPHS.len() - 1) as f32).round() as usize)
            .min(STAR_GLYPHS.len() - 1)];
        let level = (120.0 + 135.0 * brightness) as u8;

        if let Some(cell) = buf.cell_mut((x.min(area.right() - 1), y.min(area.bottom() - 1))) {
            cell.set_symbol(glyph).set_fg(Color::Rgb(level, level, level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_is_brightest_under_pointer() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        render_background(&[], (30, 10), 0.0, area, &mut buf);

        let under = buf[(30, 10)].bg;
        let far = buf[(0, 0)].bg;
        assert_eq!(under, Color::Rgb(GLOW.0, GLOW.1, GLOW.2));
        assert_eq!(far, Color::Rgb(NIGHT_SKY.0, NIGHT_SKY.1, NIGHT_SKY.2));
    }

    #[test]
    fn test_stars_land_inside_area() {
        let area = Rect::new(2, 3, 40, 10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 20));
        let stars = [Star { left: 99.9, top: 99.9, delay: 0.0 }];
        render_background(&stars, (0, 0), 1.5, area, &mut buf);

        assert_eq!(buf[(41, 12)].symbol(), "✦");
    }
}
