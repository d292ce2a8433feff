// src/widgets/notification/state.rs
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::links::DEFAULT_ACCENT;

/// How long an overlay stays before it starts leaving.
pub const DISMISS_AFTER: Duration = Duration::from_millis(5000);
/// Exit animation, used for both auto and manual dismissal.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);
pub const ENTER_ANIMATION: Duration = Duration::from_millis(300);

/// Fixed alert color for activation errors.
pub const ALERT_ACCENT: &str = "#FF3B30";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The new context could not be confirmed open.
    Blocked,
    /// Something went wrong while activating.
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Blocked => "🔗",
            NotificationKind::Error => "⚠️",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Blocked => "Popup blocked!",
            NotificationKind::Error => "Error opening link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationPhase {
    /// Sliding in, with progress in `0.0..1.0`.
    Entering(f32),
    Visible,
    /// Sliding out, with progress in `0.0..1.0`.
    Exiting(f32),
    Expired,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub name: String,
    pub url: String,
    pub accent: String,
    created_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Notification {
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    fn exit_starts_at(&self) -> Instant {
        let auto = self.created_at + DISMISS_AFTER;
        match self.dismissed_at {
            Some(manual) if manual < auto => manual,
            _ => auto,
        }
    }

    /// When the overlay leaves the screen, absent external removal.
    pub fn expires_at(&self) -> Instant {
        self.exit_starts_at() + EXIT_ANIMATION
    }

    pub fn phase(&self, now: Instant) -> NotificationPhase {
        let exit_start = self.exit_starts_at();

        if now >= exit_start + EXIT_ANIMATION {
            NotificationPhase::Expired
        } else if now >= exit_start {
            NotificationPhase::Exiting(progress(now - exit_start, EXIT_ANIMATION))
        } else {
            let shown_for = now.saturating_duration_since(self.created_at);
            if shown_for < ENTER_ANIMATION {
                NotificationPhase::Entering(progress(shown_for, ENTER_ANIMATION))
            } else {
                NotificationPhase::Visible
            }
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// Transient corner overlays. Overlapping notifications are not deduplicated.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new overlay. `blocked` overlays use the link's own accent.
    pub fn present(
        &mut self,
        kind: NotificationKind,
        name: &str,
        url: &str,
        accent: Option<&str>,
    ) -> Uuid {
        self.present_at(kind, name, url, accent, Instant::now())
    }

    pub fn present_at(
        &mut self,
        kind: NotificationKind,
        name: &str,
        url: &str,
        accent: Option<&str>,
        now: Instant,
    ) -> Uuid {
        let accent = match kind {
            NotificationKind::Blocked => accent.unwrap_or(DEFAULT_ACCENT),
            NotificationKind::Error => ALERT_ACCENT,
        };

        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            name: name.to_string(),
            url: url.to_string(),
            accent: accent.to_string(),
            created_at: now,
            dismissed_at: None,
        };
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Start the exit animation of the newest overlay still on screen.
    pub fn dismiss_latest(&mut self, now: Instant) -> bool {
        let latest = self
            .items
            .iter_mut()
            .rev()
            .find(|n| !matches!(n.phase(now), NotificationPhase::Exiting(_) | NotificationPhase::Expired));

        match latest {
            Some(notification) => {
                notification.dismissed_at = Some(now);
                true
            }
            None => false,
        }
    }

    /// Remove an overlay immediately. Removing one that is already gone is a no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop expired overlays, returning how many left.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.phase(now) != NotificationPhase::Expired);
        before - self.items.len()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.items.iter().any(|n| {
            matches!(n.phase(now), NotificationPhase::Entering(_) | NotificationPhase::Exiting(_))
        })
    }

    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    /// Oldest first, matching the top-to-bottom stacking on screen.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_blocked_notification_lifetime() {
        let mut center = NotificationCenter::new();
        let t0 = Instant::now();
        let id = center.present_at(NotificationKind::Blocked, "GitHub", "https://github.com/Chdwtm", Some("#181717"), t0);

        center.prune(t0 + ms(4999));
        assert!(center.get(id).is_some());
        assert_eq!(center.get(id).unwrap().phase(t0 + ms(4999)), NotificationPhase::Visible);

        center.prune(t0 + ms(5150));
        assert!(matches!(center.get(id).unwrap().phase(t0 + ms(5150)), NotificationPhase::Exiting(_)));

        center.prune(t0 + ms(5300));
        assert!(center.get(id).is_none());
    }

    #[test]
    fn test_accent_by_kind() {
        let mut center = NotificationCenter::new();
        let blocked = center.present(NotificationKind::Blocked, "YouTube", "https://youtube.com", Some("#FF0000"));
        let error = center.present(NotificationKind::Error, "YouTube", "https://youtube.com", Some("#FF0000"));
        let plain = center.present(NotificationKind::Blocked, "Other", "https://example.com", None);

        assert_eq!(center.get(blocked).unwrap().accent, "#FF0000");
        assert_eq!(center.get(error).unwrap().accent, ALERT_ACCENT);
        assert_eq!(center.get(plain).unwrap().accent, DEFAULT_ACCENT);
    }

    #[test]
    fn test_overlapping_notifications_are_not_deduplicated() {
        let mut center = NotificationCenter::new();
        center.present(NotificationKind::Blocked, "GitHub", "https://github.com/Chdwtm", None);
        center.present(NotificationKind::Blocked, "GitHub", "https://github.com/Chdwtm", None);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_manual_dismiss_plays_exit_animation() {
        let mut center = NotificationCenter::new();
        let t0 = Instant::now();
        let id = center.present_at(NotificationKind::Error, "TikTok", "https://tiktok.com", None, t0);

        assert!(center.dismiss_latest(t0 + ms(1000)));
        assert!(matches!(center.get(id).unwrap().phase(t0 + ms(1100)), NotificationPhase::Exiting(_)));
        assert_eq!(center.get(id).unwrap().expires_at(), t0 + ms(1300));

        assert_eq!(center.prune(t0 + ms(1300)), 1);
        assert!(center.is_empty());
        assert!(!center.dismiss_latest(t0 + ms(1400)));
    }

    #[test]
    fn test_removing_twice_is_a_noop() {
        let mut center = NotificationCenter::new();
        let id = center.present(NotificationKind::Blocked, "GitHub", "https://github.com/Chdwtm", None);
        assert!(center.remove(id));
        assert!(!center.remove(id));
    }

    #[test]
    fn test_entrance_animation() {
        let mut center = NotificationCenter::new();
        let t0 = Instant::now();
        let id = center.present_at(NotificationKind::Blocked, "GitHub", "https://github.com/Chdwtm", None, t0);
        assert!(matches!(center.get(id).unwrap().phase(t0 + ms(150)), NotificationPhase::Entering(p) if (p - 0.5).abs() < 0.01));
        assert!(center.is_animating(t0 + ms(150)));
        assert!(!center.is_animating(t0 + ms(1000)));
    }
}
