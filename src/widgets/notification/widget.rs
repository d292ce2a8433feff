// src/widgets/notification/widget.rs
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};
use std::time::Instant;
use uuid::Uuid;

use super::state::{Notification, NotificationCenter, NotificationKind, NotificationPhase};
use crate::ui::style::color_from_tag;

const OVERLAY_WIDTH: u16 = 44;
const OVERLAY_HEIGHT: u16 = 6;
const MARGIN: u16 = 1;

/// Resting place of the `index`-th overlay: top-right corner, stacking downwards.
pub fn overlay_area(area: Rect, index: usize) -> Rect {
    let width = OVERLAY_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
    let x = area.right().saturating_sub(width + MARGIN * 2);
    let y = area.y + MARGIN + (index as u16).saturating_mul(OVERLAY_HEIGHT);
    Rect::new(x, y, width, OVERLAY_HEIGHT).intersection(area)
}

/// Where the `index`-th overlay is drawn at `now`, shifted by its slide
/// animation. `None` once it has expired or slid out of view.
fn placed_area(notification: &Notification, area: Rect, index: usize, now: Instant) -> Option<Rect> {
    let resting = overlay_area(area, index);

    let slide = match notification.phase(now) {
        NotificationPhase::Expired => return None,
        NotificationPhase::Entering(p) => 1.0 - p,
        NotificationPhase::Visible => 0.0,
        NotificationPhase::Exiting(p) => p,
    };

    // Slide in from (and back out to) the right edge
    let offset = (resting.width as f32 * slide).round() as u16;
    let shifted = Rect {
        x: resting.x.saturating_add(offset),
        ..resting
    }
    .intersection(area);

    (shifted.width >= 4).then_some(shifted)
}

/// The overlay drawn under a mouse click at `now`, if any.
pub fn hit_test(center: &NotificationCenter, area: Rect, now: Instant, column: u16, row: u16) -> Option<Uuid> {
    center
        .iter()
        .enumerate()
        .filter_map(|(i, n)| placed_area(n, area, i, now).map(|rect| (rect, n.id)))
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, id)| id)
}

pub struct NotificationsWidget<'a> {
    center: &'a NotificationCenter,
    now: Instant,
}

impl<'a> NotificationsWidget<'a> {
    pub fn new(center: &'a NotificationCenter, now: Instant) -> Self {
        Self { center, now }
    }
}

impl Widget for NotificationsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, notification) in self.center.iter().enumerate() {
            if overlay_area(area, i).is_empty() {
                break;
            }
            if let Some(placed) = placed_area(notification, area, i, self.now) {
                render_overlay(notification, placed, buf);
            }
        }
    }
}

fn render_overlay(notification: &Notification, area: Rect, buf: &mut Buffer) {
    let accent = color_from_tag(&notification.accent);

    let (panel, text, link) = match notification.kind {
        NotificationKind::Blocked => (
            Style::default().bg(Color::Rgb(245, 245, 245)).fg(Color::Rgb(51, 51, 51)),
            Style::default().fg(Color::Rgb(90, 90, 90)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        NotificationKind::Error => (
            Style::default().bg(accent).fg(Color::White),
            Style::default().fg(Color::White),
            Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
        ),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", notification.kind.icon())),
            Span::raw(notification.kind.title()).bold(),
        ]),
    ];

    if notification.kind == NotificationKind::Blocked {
        lines.push(Line::from(Span::styled("Please allow popups or", text)));
        lines.push(Line::from(Span::styled(format!("click here to open {}", notification.name), link)));
    } else {
        lines.push(Line::from(Span::styled(format!("Click here to open {}", notification.name), link)));
    }
    lines.push(Line::from(Span::styled(notification.url.clone(), text.add_modifier(Modifier::DIM))));

    Clear.render(area, buf);
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(panel)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        )
        .render(area, buf);
}
