// src/ui/screens/link_hub/footer.rs
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::hub::HubState;

pub fn render_footer(hub: &HubState, area: Rect, buf: &mut Buffer) {
    let count = hub.interaction.click_count;
    let count_style = if count > 0 {
        Style::default().fg(Color::Rgb(255, 214, 140)).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines = vec![
        Line::from(format!("Made with ❤️ using Rust • Last updated {}", hub.clock.year()))
            .fg(Color::Rgb(170, 170, 200)),
        Line::from(vec![
            Span::raw("Links clicked: "),
            Span::styled(count.to_string(), count_style),
        ]),
    ];

    if hub.interaction.has_last_clicked() {
        lines.push(Line::from(vec![
            Span::raw("Last visited: "),
            Span::raw(hub.interaction.last_clicked.as_str()).bold(),
            Span::raw(" ✨"),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw("● ").fg(Color::Green),
        Span::raw("All systems operational").fg(Color::Rgb(170, 170, 200)),
    ]));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}
