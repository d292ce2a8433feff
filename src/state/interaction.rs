// src/state/interaction.rs
use serde::{Deserialize, Serialize};

use crate::util::database::KeyValueStore;
use crate::{log_debug, log_warn};

pub const CLICK_COUNT_KEY: &str = "linktree-click-count";
pub const LAST_CLICKED_KEY: &str = "linktree-last-clicked";

/// Click counter and last visited link, mirrored to local storage on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub click_count: u64,
    /// Empty when nothing was clicked yet.
    pub last_clicked: String,
}

impl InteractionState {
    /// Rehydrate from storage. Missing or unreadable values fall back to defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let click_count = match store.get(CLICK_COUNT_KEY) {
            Ok(Some(raw)) => parse_click_count(&raw),
            Ok(None) => 0,
            Err(e) => {
                log_warn!("Failed to read click count: {}", e);
                0
            }
        };

        let last_clicked = match store.get(LAST_CLICKED_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                log_warn!("Failed to read last clicked: {}", e);
                String::new()
            }
        };

        log_debug!("Rehydrated interaction state: count={}, last={:?}", click_count, last_clicked);

        Self { click_count, last_clicked }
    }

    pub fn has_last_clicked(&self) -> bool {
        !self.last_clicked.is_empty()
    }

    /// Count a click on `name` and persist both fields.
    ///
    /// Write failures are logged and swallowed; the in-memory state stays correct.
    pub fn record_click(&mut self, name: &str, store: &dyn KeyValueStore) {
        self.click_count = self.click_count.saturating_add(1);
        self.last_clicked = name.to_string();
        self.persist(store);
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(CLICK_COUNT_KEY, &self.click_count.to_string()) {
            log_warn!("Failed to save click count: {}", e);
        }

        if self.has_last_clicked() {
            if let Err(e) = store.set(LAST_CLICKED_KEY, &self.last_clicked) {
                log_warn!("Failed to save last clicked: {}", e);
            }
        }
    }
}

/// Leading decimal digits are accepted ("12px" reads as 12); anything else is 0.
fn parse_click_count(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
