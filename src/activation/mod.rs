// src/activation/mod.rs
//! What happens when a link is triggered.

pub mod click_event;
pub mod haptics;
pub mod navigator;

use std::sync::Arc;
use std::time::Duration;

pub use click_event::{tracing_listener, ClickListener, LinkClickEvent};
pub use haptics::{Haptics, TerminalBell};
pub use navigator::{BrowsingContext, Navigator, SystemBrowser};

use crate::error::Result;
use crate::links::accent_for;
use crate::state::InteractionState;
use crate::util::database::KeyValueStore;
use crate::widgets::notification::{NotificationCenter, NotificationKind};
use crate::{log_debug, log_error, log_info};

const HAPTIC_PULSE: Duration = Duration::from_millis(50);

/// Result of one activation. Informational only: failures have already been
/// turned into notifications by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    Opened,
    Blocked,
    Failed(String),
}

#[derive(Clone)]
pub struct ActivationHandler {
    navigator: Arc<dyn Navigator>,
    haptics: Option<Arc<dyn Haptics>>,
    listener: Option<ClickListener>,
}

impl std::fmt::Debug for ActivationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationHandler")
            .field("navigator", &self.navigator)
            .field("haptics", &self.haptics)
            .field("listener", &self.listener.as_ref().map(|_| "<listener>"))
            .finish()
    }
}

impl ActivationHandler {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            haptics: None,
            listener: None,
        }
    }

    pub fn with_haptics(mut self, haptics: Arc<dyn Haptics>) -> Self {
        self.haptics = Some(haptics);
        self
    }

    pub fn with_listener(mut self, listener: ClickListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Record the click, then try to open `url` in a new context.
    ///
    /// The click is counted before anything else, whether or not the open
    /// succeeds. A blocked or failed open leaves a notification carrying a
    /// manual link; the hub itself never navigates away.
    pub fn activate(
        &self,
        url: &str,
        name: &str,
        interaction: &mut InteractionState,
        store: &dyn KeyValueStore,
        notifications: &mut NotificationCenter,
    ) -> ActivationOutcome {
        interaction.record_click(name, store);

        match self.try_open(url, name) {
            Ok(true) => {
                log_debug!("Opened {} ({})", name, url);
                ActivationOutcome::Opened
            }
            Ok(false) => {
                notifications.present(NotificationKind::Blocked, name, url, Some(accent_for(name)));
                log_info!("Popup blocked. Please manually visit: {}", url);
                ActivationOutcome::Blocked
            }
            Err(e) => {
                log_error!("Error opening link {}: {}", url, e);
                notifications.present(NotificationKind::Error, name, url, None);
                ActivationOutcome::Failed(e.to_string())
            }
        }
    }

    /// Open `url` from a notification's manual link. Not counted as a click.
    pub fn open_manual(&self, url: &str) -> ActivationOutcome {
        match self.open_context(url) {
            Ok(true) => ActivationOutcome::Opened,
            Ok(false) => {
                log_info!("Manual open of {} was blocked as well", url);
                ActivationOutcome::Blocked
            }
            Err(e) => {
                log_error!("Manual open of {} failed: {}", url, e);
                ActivationOutcome::Failed(e.to_string())
            }
        }
    }

    /// Steps after counting. `Ok(false)` means the open could not be confirmed.
    fn try_open(&self, url: &str, name: &str) -> Result<bool> {
        if let Some(haptics) = &self.haptics {
            haptics.pulse(HAPTIC_PULSE)?;
        }

        if let Some(listener) = &self.listener {
            let event = LinkClickEvent::now(name, url);
            if let Err(e) = listener(&event) {
                log_debug!("Click listener failed: {}", e);
            }
        }

        self.open_context(url)
    }

    fn open_context(&self, url: &str) -> Result<bool> {
        let context = self.navigator.open_in_new_context(url)?;

        // A context closed this early is indistinguishable from a blocked one
        let blocked = match context {
            None => true,
            Some(mut context) => context.is_closed().unwrap_or(true),
        };

        Ok(!blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkHubError;
    use crate::util::database::MemoryStore;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy)]
    enum Host {
        Opens,
        NoHandle,
        ClosedHandle,
        SilentHandle,
        Throws,
    }

    struct FixedContext(Option<bool>);

    impl BrowsingContext for FixedContext {
        fn is_closed(&mut self) -> Option<bool> {
            self.0
        }
    }

    #[derive(Debug)]
    struct FakeNavigator {
        host: Host,
        opened: Mutex<Vec<String>>,
    }

    impl FakeNavigator {
        fn new(host: Host) -> Arc<Self> {
            Arc::new(Self { host, opened: Mutex::new(Vec::new()) })
        }
    }

    impl Navigator for FakeNavigator {
        fn open_in_new_context(&self, url: &str) -> Result<Option<Box<dyn BrowsingContext>>> {
            self.opened.lock().unwrap().push(url.to_string());
            match self.host {
                Host::Opens => Ok(Some(Box::new(FixedContext(Some(false))))),
                Host::NoHandle => Ok(None),
                Host::ClosedHandle => Ok(Some(Box::new(FixedContext(Some(true))))),
                Host::SilentHandle => Ok(Some(Box::new(FixedContext(None)))),
                Host::Throws => Err(LinkHubError::Navigation("no display".to_string())),
            }
        }
    }

    #[derive(Debug)]
    struct BrokenHaptics;

    impl Haptics for BrokenHaptics {
        fn pulse(&self, _duration: Duration) -> Result<()> {
            Err(LinkHubError::Navigation("vibration motor gone".to_string()))
        }
    }

    fn activate_with(host: Host) -> (ActivationOutcome, InteractionState, NotificationCenter) {
        let handler = ActivationHandler::new(FakeNavigator::new(host));
        let store = MemoryStore::new();
        let mut interaction = InteractionState::default();
        let mut notifications = NotificationCenter::new();
        let outcome = handler.activate(
            "https://github.com/Chdwtm",
            "GitHub",
            &mut interaction,
            &store,
            &mut notifications,
        );
        (outcome, interaction, notifications)
    }

    #[test]
    fn test_click_is_counted_for_every_outcome() {
        for host in [Host::Opens, Host::NoHandle, Host::ClosedHandle, Host::SilentHandle, Host::Throws] {
            let (_, interaction, _) = activate_with(host);
            assert_eq!(interaction.click_count, 1, "{:?}", host);
            assert_eq!(interaction.last_clicked, "GitHub", "{:?}", host);
        }
    }

    #[test]
    fn test_blocked_classification() {
        for host in [Host::NoHandle, Host::ClosedHandle, Host::SilentHandle] {
            let (outcome, _, notifications) = activate_with(host);
            assert_eq!(outcome, ActivationOutcome::Blocked, "{:?}", host);
            let shown = notifications.latest().unwrap();
            assert_eq!(shown.kind, NotificationKind::Blocked);
            assert_eq!(shown.name, "GitHub");
            assert_eq!(shown.url, "https://github.com/Chdwtm");
            assert_eq!(shown.accent, "#181717");
        }
    }

    #[test]
    fn test_successful_open_shows_nothing() {
        let (outcome, _, notifications) = activate_with(Host::Opens);
        assert_eq!(outcome, ActivationOutcome::Opened);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_navigation_error_becomes_error_notification() {
        let (outcome, _, notifications) = activate_with(Host::Throws);
        assert!(matches!(outcome, ActivationOutcome::Failed(_)));
        assert_eq!(notifications.latest().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_haptics_failure_is_an_activation_error() {
        let navigator = FakeNavigator::new(Host::Opens);
        let handler = ActivationHandler::new(navigator.clone()).with_haptics(Arc::new(BrokenHaptics));
        let store = MemoryStore::new();
        let mut interaction = InteractionState::default();
        let mut notifications = NotificationCenter::new();

        let outcome = handler.activate("https://github.com/Chdwtm", "GitHub", &mut interaction, &store, &mut notifications);

        assert!(matches!(outcome, ActivationOutcome::Failed(_)));
        assert_eq!(notifications.latest().unwrap().kind, NotificationKind::Error);
        assert!(navigator.opened.lock().unwrap().is_empty());
        assert_eq!(interaction.click_count, 1);
    }

    #[test]
    fn test_listener_receives_event_and_its_failure_is_ignored() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener: ClickListener = Arc::new(move |event: &LinkClickEvent| -> Result<()> {
            sink.lock().unwrap().push(event.clone());
            Err(LinkHubError::Render("listener exploded".to_string()))
        });

        let handler = ActivationHandler::new(FakeNavigator::new(Host::Opens)).with_listener(listener);
        let store = MemoryStore::new();
        let mut interaction = InteractionState::default();
        let mut notifications = NotificationCenter::new();

        let outcome = handler.activate("https://www.tiktok.com/@chdwtm", "TikTok", &mut interaction, &store, &mut notifications);

        assert_eq!(outcome, ActivationOutcome::Opened);
        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "TikTok");
        assert!(chrono::DateTime::parse_from_rfc3339(&events[0].timestamp).is_ok());
    }

    #[test]
    fn test_manual_open_is_not_counted() {
        let navigator = FakeNavigator::new(Host::Opens);
        let handler = ActivationHandler::new(navigator.clone());
        assert_eq!(handler.open_manual("https://github.com/Chdwtm"), ActivationOutcome::Opened);
        assert_eq!(navigator.opened.lock().unwrap().len(), 1);
    }
}
