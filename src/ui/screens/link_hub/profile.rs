// src/ui/screens/link_hub/profile.rs
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::greeting::emoji;
use crate::hub::HubState;

const PHOTO_FRAME: Color = Color::Rgb(118, 75, 162);

/// Name, greeting and taglines. The photo frame is just the initials.
pub fn render_profile(hub: &HubState, area: Rect, buf: &mut Buffer) {
    let initials: String = hub
        .profile
        .display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    let frame = Style::default().fg(PHOTO_FRAME);
    let mut lines = vec![
        Line::from(Span::styled("╭────────╮", frame)),
        Line::from(vec![
            Span::styled("│", frame),
            Span::styled(format!("{:^8}", initials), Style::default().fg(Color::White).bold()),
            Span::styled("│", frame),
        ]),
        Line::from(Span::styled("╰────────╯", frame)),
    ];

    lines.push(Line::from(hub.profile.display_name.as_str()).bold().fg(Color::White));
    lines.push(Line::from(vec![
        Span::raw(hub.greeting()).fg(Color::Rgb(255, 214, 140)),
        Span::raw(format!("  {} {}", emoji(&hub.clock), hub.clock.format("%H:%M")))
            .add_modifier(Modifier::DIM),
    ]));

    for tagline in &hub.profile.taglines {
        lines.push(Line::from(tagline.as_str()).fg(Color::Rgb(200, 200, 230)));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
