// src/ui/screens/link_hub/layout.rs
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::links::SOCIAL_LINKS;

const COLUMN_WIDTH: u16 = 64;
const LINK_ROW_HEIGHT: u16 = 4;

/// Where each part of the hub goes. Shared by rendering and mouse hit tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubLayout {
    pub header: Rect,
    pub links: Vec<Rect>,
    pub footer: Rect,
    pub help: Rect,
}

impl HubLayout {
    pub fn compute(area: Rect) -> Self {
        let width = COLUMN_WIDTH.min(area.width);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(LINK_ROW_HEIGHT),
                Constraint::Length(5),
                Constraint::Length(1),
            ])
            .split(column);

        let links_area = main_layout[1];
        let links = (0..SOCIAL_LINKS.len())
            .map(|i| Rect {
                y: links_area.y + i as u16 * LINK_ROW_HEIGHT,
                height: LINK_ROW_HEIGHT,
                ..links_area
            })
            .map(|row| row.intersection(links_area))
            .collect();

        // Help spans the full width, not just the column
        let help = Rect {
            x: area.x,
            width: area.width,
            ..main_layout[3]
        };

        Self {
            header: main_layout[0],
            links,
            footer: main_layout[2],
            help,
        }
    }

    /// Index of the link row under a mouse position.
    pub fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        self.links
            .iter()
            .position(|rect| !rect.is_empty() && rect.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_without_overlap() {
        let layout = HubLayout::compute(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.links.len(), SOCIAL_LINKS.len());
        for pair in layout.links.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].y);
        }
        assert_eq!(layout.header.width, 64);
        assert_eq!(layout.help.width, 120);
    }

    #[test]
    fn test_link_hit_testing() {
        let layout = HubLayout::compute(Rect::new(0, 0, 120, 40));
        let github = layout.links[1];

        assert_eq!(layout.link_at(github.x + 2, github.y + 1), Some(1));
        assert_eq!(layout.link_at(0, 0), None);
    }

    #[test]
    fn test_tiny_terminal_clips_rows() {
        let layout = HubLayout::compute(Rect::new(0, 0, 30, 12));
        assert!(layout.links.iter().all(|rect| rect.width <= 30));
    }
}
