// src/widgets/error_boundary/links_fallback.rs
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::{CapturedError, FallbackAction, FallbackView};
use crate::links::{find_by_name, LinkEntry};
use crate::ui::{centered_rect, style::color_from_tag};

const MANUAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "💼"),
    ("GitHub", "💻"),
    ("YouTube", "📺"),
];

/// Fallback that keeps the most important links reachable.
#[derive(Debug, Clone)]
pub struct LinksFallback {
    links: Vec<(&'static LinkEntry, &'static str)>,
}

impl LinksFallback {
    pub fn new() -> Self {
        let links = MANUAL_LINKS
            .iter()
            .filter_map(|(name, icon)| find_by_name(name).map(|link| (link, *icon)))
            .collect();
        Self { links }
    }

    pub fn links(&self) -> impl Iterator<Item = &'static LinkEntry> + '_ {
        self.links.iter().map(|(link, _)| *link)
    }
}

impl Default for LinksFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackView for LinksFallback {
    fn render(&self, _error: &CapturedError, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(Color::Rgb(118, 75, 162)))
            .render(area, buf);

        let mut lines = vec![
            Line::from("🚧 Oops! Something went wrong").bold(),
            Line::from(""),
            Line::from("Don't worry, you can still access my social links below:"),
            Line::from(""),
        ];

        for (i, (link, icon)) in self.links.iter().enumerate() {
            let brand = color_from_tag(link.color_tag);
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::White).bg(brand).bold()),
                Span::raw(format!(" {} {} ", icon, link.name)).bold(),
                Span::styled(link.url, Style::default().add_modifier(Modifier::UNDERLINED)),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from("[ r ] 🔄 Try Again").bold());

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .fg(Color::White)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(centered_rect(80, 70, area), buf);
    }

    fn handle_key(&self, key: KeyEvent) -> FallbackAction {
        match key.code {
            KeyCode::Char('r') | KeyCode::F(5) => FallbackAction::Reload,
            KeyCode::Char('q') | KeyCode::Esc => FallbackAction::Quit,
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => FallbackAction::Quit,
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|n| (n as usize).checked_sub(1))
                .and_then(|i| self.links.get(i))
                .map(|(link, _)| FallbackAction::OpenLink { name: link.name, url: link.url })
                .unwrap_or(FallbackAction::None),
            _ => FallbackAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_fixed_manual_links() {
        let names: Vec<_> = LinksFallback::new().links().map(|l| l.name).collect();
        assert_eq!(names, vec!["LinkedIn", "GitHub", "YouTube"]);
    }

    #[test]
    fn test_number_keys_open_links() {
        let fallback = LinksFallback::new();
        assert_eq!(
            fallback.handle_key(key('2')),
            FallbackAction::OpenLink { name: "GitHub", url: "https://github.com/Chdwtm" }
        );
        assert_eq!(fallback.handle_key(key('4')), FallbackAction::None);
        assert_eq!(fallback.handle_key(key('0')), FallbackAction::None);
        assert_eq!(fallback.handle_key(key('r')), FallbackAction::Reload);
    }
}
