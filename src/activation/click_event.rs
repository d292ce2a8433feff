// src/activation/click_event.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;

/// Announced to the optional listener on every activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkClickEvent {
    pub name: String,
    pub url: String,
    /// RFC 3339
    pub timestamp: String,
}

impl LinkClickEvent {
    pub fn now(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub type ClickListener = Arc<dyn Fn(&LinkClickEvent) -> Result<()> + Send + Sync>;

/// Listener that records every click as a structured tracing event.
pub fn tracing_listener() -> ClickListener {
    Arc::new(|event: &LinkClickEvent| -> Result<()> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(
            target: "linkhub::clicks",
            name = %event.name,
            url = %event.url,
            timestamp = %event.timestamp,
            payload = %payload,
            "link clicked"
        );
        Ok(())
    })
}
