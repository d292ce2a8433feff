// src/widgets/error_boundary/mod.rs
//! Render supervisor with a static fallback.
//!
//! The supervised subtree renders through a `Result`-returning closure. The
//! first error (or panic) moves the boundary from `Healthy` to `Failed`, after
//! which only the fallback is drawn. There is no automatic recovery; the user
//! has to reload.

pub mod links_fallback;
pub mod retry_fallback;

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    crossterm::event::KeyEvent,
    layout::Rect,
    widgets::{Clear, Widget},
};
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub use links_fallback::LinksFallback;
pub use retry_fallback::RetryFallback;

use crate::config::FallbackKind;
use crate::error::Result;
use crate::log_error;

thread_local! {
    /// Set while a boundary runs its child on this thread.
    static SUPERVISING: Cell<bool> = const { Cell::new(false) };
}

/// Wrap the current panic hook so panics a boundary catches stay silent.
///
/// Call this after the terminal has been set up: the hook installed there
/// restores the terminal, and it must not run for a panic the boundary
/// turns into a fallback screen. Panics anywhere else still reach it.
pub fn install_panic_guard() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if SUPERVISING.with(Cell::get) {
            return;
        }
        previous(info);
    }));
}

/// What went wrong inside the supervised subtree.
#[derive(Debug, Clone)]
pub struct CapturedError {
    pub message: String,
    pub boundary: &'static str,
    pub captured_at: DateTime<Local>,
}

impl CapturedError {
    pub fn new(boundary: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            boundary,
            captured_at: Local::now(),
        }
    }

    fn from_panic(boundary: &'static str, payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::new(boundary, format!("panic: {}", message))
    }
}

#[derive(Debug, Clone, Default)]
pub enum BoundaryState {
    #[default]
    Healthy,
    /// Terminal until the boundary is reset by a reload.
    Failed(CapturedError),
}

impl BoundaryState {
    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryState::Failed(_))
    }

    pub fn error(&self) -> Option<&CapturedError> {
        match self {
            BoundaryState::Healthy => None,
            BoundaryState::Failed(e) => Some(e),
        }
    }
}

/// What a keypress on a fallback screen asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackAction {
    None,
    Reload,
    OpenLink { name: &'static str, url: &'static str },
    Quit,
}

/// Static content drawn in place of a failed subtree.
pub trait FallbackView: Send + std::fmt::Debug {
    fn render(&self, error: &CapturedError, area: Rect, buf: &mut Buffer);
    fn handle_key(&self, key: KeyEvent) -> FallbackAction;
}

pub fn fallback_for(kind: FallbackKind) -> Box<dyn FallbackView> {
    match kind {
        FallbackKind::Links => Box::new(LinksFallback::new()),
        FallbackKind::Retry => Box::new(RetryFallback),
    }
}

#[derive(Debug)]
pub struct ErrorBoundary {
    name: &'static str,
    fallback: Box<dyn FallbackView>,
    state: BoundaryState,
}

impl ErrorBoundary {
    pub fn new(name: &'static str, fallback: Box<dyn FallbackView>) -> Self {
        Self {
            name,
            fallback,
            state: BoundaryState::Healthy,
        }
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state.is_failed()
    }

    /// Render the child, or the fallback once the boundary has failed.
    ///
    /// The child draws into a scratch buffer that is only merged on success, so
    /// a half-finished frame never reaches the screen.
    pub fn render<F>(&mut self, area: Rect, buf: &mut Buffer, child: F)
    where
        F: FnOnce(Rect, &mut Buffer) -> Result<()>,
    {
        if let BoundaryState::Healthy = self.state {
            let mut scratch = Buffer::empty(area);
            SUPERVISING.with(|flag| flag.set(true));
            let outcome = catch_unwind(AssertUnwindSafe(|| child(area, &mut scratch)));
            SUPERVISING.with(|flag| flag.set(false));

            let failure = match outcome {
                Ok(Ok(())) => {
                    buf.merge(&scratch);
                    return;
                }
                Ok(Err(e)) => CapturedError::new(self.name, e.to_string()),
                Err(payload) => CapturedError::from_panic(self.name, payload),
            };
            self.report(failure);
        }

        if let BoundaryState::Failed(error) = &self.state {
            Clear.render(area, buf);
            self.fallback.render(error, area, buf);
        }
    }

    /// Record a failure. Returns false when the boundary had already failed;
    /// later errors never replace the first one.
    pub fn report(&mut self, error: CapturedError) -> bool {
        if self.state.is_failed() {
            log_error!("[{}] further error after failure ignored: {}", self.name, error.message);
            return false;
        }

        log_error!("[{}] render failure: {}", self.name, error.message);
        tracing::error!(boundary = self.name, message = %error.message, "error boundary tripped");
        self.state = BoundaryState::Failed(error);
        true
    }

    /// Keys only reach the fallback while the boundary is failed.
    pub fn handle_key(&self, key: KeyEvent) -> FallbackAction {
        if self.is_failed() {
            self.fallback.handle_key(key)
        } else {
            FallbackAction::None
        }
    }

    /// Back to healthy. Only called as part of an explicit reload.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Healthy;
    }
}
