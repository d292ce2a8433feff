// src/widgets/error_boundary/retry_fallback.rs
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::{CapturedError, FallbackAction, FallbackView};
use crate::ui::centered_rect;

/// Generic "something went wrong" screen with a refresh action.
#[derive(Debug, Default, Clone, Copy)]
pub struct RetryFallback;

impl FallbackView for RetryFallback {
    fn render(&self, _error: &CapturedError, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(Color::Rgb(102, 126, 234)))
            .render(area, buf);

        let lines = vec![
            Line::from("Something went wrong!").bold(),
            Line::from(""),
            Line::from("Please refresh the page to try again."),
            Line::from(""),
            Line::from("[ r ] Refresh Page").bold(),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .fg(Color::White)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(centered_rect(60, 40, area), buf);
    }

    fn handle_key(&self, key: KeyEvent) -> FallbackAction {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter | KeyCode::F(5) => FallbackAction::Reload,
            KeyCode::Char('q') | KeyCode::Esc => FallbackAction::Quit,
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => FallbackAction::Quit,
            _ => FallbackAction::None,
        }
    }
}
