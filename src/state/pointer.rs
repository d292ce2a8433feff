// src/state/pointer.rs
use ratatui::layout::Position;

/// Coalesces pointer moves so the position changes at most once per frame.
#[derive(Debug, Clone, Default)]
pub struct PointerSampler {
    position: Position,
    pending: Option<Position>,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move. Only the latest move before the next frame is kept.
    pub fn on_move(&mut self, column: u16, row: u16) {
        self.pending = Some(Position::new(column, row));
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Frame callback. Returns true when the sampled position changed.
    pub fn on_frame(&mut self) -> bool {
        match self.pending.take() {
            Some(next) if next != self.position => {
                self.position = next;
                true
            }
            _ => false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
