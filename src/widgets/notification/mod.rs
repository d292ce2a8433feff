pub mod state;
pub mod widget;

pub use state::{
    Notification, NotificationCenter, NotificationKind, NotificationPhase, ALERT_ACCENT,
    DISMISS_AFTER, EXIT_ANIMATION,
};
pub use widget::{hit_test, overlay_area, NotificationsWidget};
