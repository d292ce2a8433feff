use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Stylize},
    widgets::{Paragraph, Widget},
};
use std::time::Instant;

use crate::error::Result;
use crate::hub::HubState;

pub mod background;
pub mod footer;
pub mod layout;
pub mod links_list;
pub mod profile;

pub use layout::HubLayout;

const HELP_TEXT: &str =
    "↑/↓: Select • Enter: Open • 1-5: Quick open • o: Open notification link • x: Dismiss • F5: Reload • q: Quit";

pub fn render_link_hub(hub: &HubState, now: Instant, area: Rect, buf: &mut Buffer) -> Result<()> {
    let layout = HubLayout::compute(area);
    let position = hub.pointer.position();

    background::render_background(
        &hub.stars,
        (position.x, position.y),
        hub.elapsed(now).as_secs_f32(),
        area,
        buf,
    );

    profile::render_profile(hub, layout.header, buf);

    links_list::render_links(
        hub.links(),
        &layout.links,
        hub.selected,
        hub.revealed_links(now),
        buf,
    )?;

    footer::render_footer(hub, layout.footer, buf);

    Paragraph::new(HELP_TEXT)
        .fg(Color::Yellow)
        .alignment(Alignment::Center)
        .render(layout.help, buf);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::hub::Profile;
    use crate::util::database::MemoryStore;
    use std::time::Duration;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_fresh_hub_shows_zero_and_no_last_visited() {
        let store = MemoryStore::new();
        let t0 = Instant::now();
        let mut hub = HubState::new_at(Profile::from(&AppConfig::default()), &store, t0, chrono::Local::now());
        hub.on_frame(t0 + Duration::from_secs(1));

        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        render_link_hub(&hub, t0 + Duration::from_secs(1), area, &mut buf).unwrap();

        let text = buffer_text(&buf);
        assert!(text.contains("Chiesa Anugrah Dwitama"));
        assert!(text.contains("Links clicked: 0"));
        assert!(!text.contains("Last visited"));
        assert!(text.contains("Instagram"));
    }
}
