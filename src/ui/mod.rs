pub mod screens;
pub mod style;
pub mod terminal;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use std::time::Instant;

use crate::app::App;
use crate::ui::screens::link_hub::render_link_hub;
use crate::widgets::notification::NotificationsWidget;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let now = Instant::now();
        let hub = &self.hub;

        self.boundary.render(area, buf, |area, buf| render_link_hub(hub, now, area, buf));

        // Overlays sit above whatever the boundary produced
        NotificationsWidget::new(&self.hub.notifications, now).render(area, buf);
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
