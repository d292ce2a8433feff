// src/ui/screens/link_hub/links_list.rs
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::error::{LinkHubError, Result};
use crate::links::LinkEntry;
use crate::ui::style::{color_from_tag, dim_unless_focused, readable_on_dark};

/// One bordered row per link. Rows past `revealed` are still waiting for
/// their entrance and stay blank.
pub fn render_links(
    links: &[LinkEntry],
    rows: &[Rect],
    selected: usize,
    revealed: usize,
    buf: &mut Buffer,
) -> Result<()> {
    if selected >= links.len() {
        return Err(LinkHubError::Render(format!(
            "selected link {} out of range ({} links)",
            selected,
            links.len()
        )));
    }

    for (i, (link, row)) in links.iter().zip(rows).enumerate().take(revealed) {
        if row.height < 3 {
            continue;
        }
        render_link_row(link, i, i == selected, *row, buf);
    }

    Ok(())
}

fn render_link_row(link: &LinkEntry, index: usize, is_selected: bool, area: Rect, buf: &mut Buffer) {
    let brand = readable_on_dark(color_from_tag(link.color_tag));

    let border = if is_selected { BorderType::Thick } else { BorderType::Rounded };
    let arrow = if is_selected { "→" } else { " " };

    let name = Line::from(vec![
        Span::styled(format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{:<2} ", link.icon), Style::default().fg(brand).bold()),
        Span::styled(link.name, dim_unless_focused(is_selected, Style::default().fg(Color::White))),
        Span::raw(format!(" {}", arrow)).fg(brand),
    ]);
    let description = Line::from(vec![
        Span::raw("       "),
        Span::styled(link.description, Style::default().fg(Color::Rgb(190, 190, 210))),
    ]);

    Paragraph::new(vec![name, description])
        .block(
            Block::bordered()
                .border_type(border)
                .border_style(Style::default().fg(brand)),
        )
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::SOCIAL_LINKS;

    fn rows() -> Vec<Rect> {
        (0..SOCIAL_LINKS.len() as u16).map(|i| Rect::new(0, i * 4, 60, 4)).collect()
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_all_links_render_once_revealed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        render_links(SOCIAL_LINKS, &rows(), 0, SOCIAL_LINKS.len(), &mut buf).unwrap();

        let text = buffer_text(&buf);
        for link in SOCIAL_LINKS {
            assert!(text.contains(link.name), "{} missing", link.name);
            assert!(text.contains(link.description), "{} description missing", link.name);
        }
    }

    #[test]
    fn test_unrevealed_rows_stay_blank() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        render_links(SOCIAL_LINKS, &rows(), 0, 2, &mut buf).unwrap();

        let text = buffer_text(&buf);
        assert!(text.contains("GitHub"));
        assert!(!text.contains("YouTube"));
    }

    #[test]
    fn test_out_of_range_selection_is_a_render_error() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        let result = render_links(SOCIAL_LINKS, &rows(), 9, SOCIAL_LINKS.len(), &mut buf);
        assert!(matches!(result, Err(LinkHubError::Render(_))));
    }
}
