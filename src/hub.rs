// src/hub.rs
//! State owned by the link hub screen. Renderers borrow it; only the
//! activation handler mutates the interaction part.
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::greeting::greeting;
use crate::links::{LinkEntry, SOCIAL_LINKS};
use crate::state::{InteractionState, PointerSampler};
use crate::util::database::KeyValueStore;
use crate::widgets::notification::NotificationCenter;

/// Delay before the screen counts as loaded and links start appearing.
pub const LOAD_DELAY: Duration = Duration::from_millis(100);
/// Gap between two link rows appearing.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);
pub const STAR_COUNT: usize = 50;
/// Twinkle cycle length in seconds.
pub const TWINKLE_PERIOD: f32 = 3.0;
const TWINKLE_STEPS_PER_SEC: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub display_name: String,
    pub taglines: Vec<String>,
}

impl From<&AppConfig> for Profile {
    fn from(config: &AppConfig) -> Self {
        Self {
            display_name: config.display_name.clone(),
            taglines: config.taglines.clone(),
        }
    }
}

/// A decorative background star. Positions are percentages of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub left: f32,
    pub top: f32,
    pub delay: f32,
}

impl Star {
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<Star> {
        (0..count)
            .map(|_| Star {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay: rng.gen_range(0.0..TWINKLE_PERIOD),
            })
            .collect()
    }

    /// Brightness in `0.0..=1.0` at `elapsed` seconds.
    pub fn brightness(&self, elapsed: f32) -> f32 {
        let phase = ((elapsed + self.delay) % TWINKLE_PERIOD) / TWINKLE_PERIOD;
        0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
    }
}

#[derive(Debug)]
pub struct HubState {
    pub profile: Profile,
    pub interaction: InteractionState,
    pub notifications: NotificationCenter,
    pub pointer: PointerSampler,
    pub clock: DateTime<Local>,
    pub selected: usize,
    pub stars: Vec<Star>,
    started_at: Instant,
    loaded: bool,
    twinkle_step: u64,
}

impl HubState {
    /// Fresh screen state, rehydrating the interaction counters from `store`.
    pub fn new(profile: Profile, store: &dyn KeyValueStore) -> Self {
        Self::new_at(profile, store, Instant::now(), Local::now())
    }

    pub fn new_at(
        profile: Profile,
        store: &dyn KeyValueStore,
        started_at: Instant,
        clock: DateTime<Local>,
    ) -> Self {
        Self {
            profile,
            interaction: InteractionState::load(store),
            notifications: NotificationCenter::new(),
            pointer: PointerSampler::new(),
            clock,
            selected: 0,
            stars: Star::scatter(STAR_COUNT, &mut rand::thread_rng()),
            started_at,
            loaded: false,
            twinkle_step: 0,
        }
    }

    pub fn links(&self) -> &'static [LinkEntry] {
        SOCIAL_LINKS
    }

    pub fn selected_link(&self) -> Option<&'static LinkEntry> {
        SOCIAL_LINKS.get(self.selected)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SOCIAL_LINKS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            SOCIAL_LINKS.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < SOCIAL_LINKS.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn greeting(&self) -> String {
        greeting(&self.clock)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// How many link rows have appeared so far.
    pub fn revealed_links(&self, now: Instant) -> usize {
        if !self.loaded {
            return 0;
        }
        let steps = self.elapsed(now).as_millis() / REVEAL_STAGGER.as_millis();
        (steps as usize).min(SOCIAL_LINKS.len())
    }

    /// Frame callback. Returns true when anything visible changed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let mut changed = self.pointer.on_frame();

        if !self.loaded && self.elapsed(now) >= LOAD_DELAY {
            self.loaded = true;
            changed = true;
        }

        // Rows are still staggering in
        if self.loaded && self.elapsed(now) <= REVEAL_STAGGER * SOCIAL_LINKS.len() as u32 {
            changed = true;
        }

        if self.notifications.prune(now) > 0 || self.notifications.is_animating(now) {
            changed = true;
        }

        let step = (self.elapsed(now).as_secs_f32() * TWINKLE_STEPS_PER_SEC) as u64;
        if step != self.twinkle_step {
            self.twinkle_step = step;
            changed = true;
        }

        changed
    }

    /// Minute tick: the clock and greeting move on.
    pub fn on_clock_tick(&mut self, now: DateTime<Local>) {
        self.clock = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::database::MemoryStore;
    use rand::SeedableRng;

    fn profile() -> Profile {
        Profile::from(&AppConfig::default())
    }

    #[test]
    fn test_links_reveal_after_load() {
        let store = MemoryStore::new();
        let t0 = Instant::now();
        let mut hub = HubState::new_at(profile(), &store, t0, Local::now());

        hub.on_frame(t0 + Duration::from_millis(50));
        assert!(!hub.is_loaded());
        assert_eq!(hub.revealed_links(t0 + Duration::from_millis(50)), 0);

        assert!(hub.on_frame(t0 + Duration::from_millis(120)));
        assert!(hub.is_loaded());
        assert_eq!(hub.revealed_links(t0 + Duration::from_millis(120)), 1);
        assert_eq!(hub.revealed_links(t0 + Duration::from_secs(2)), SOCIAL_LINKS.len());
    }

    #[test]
    fn test_selection_wraps() {
        let store = MemoryStore::new();
        let mut hub = HubState::new(profile(), &store);

        hub.select_previous();
        assert_eq!(hub.selected_link().unwrap().name, "Instagram");
        hub.select_next();
        assert_eq!(hub.selected_link().unwrap().name, "LinkedIn");
        assert!(!hub.select(SOCIAL_LINKS.len()));
    }

    #[test]
    fn test_pointer_is_applied_on_frame_only() {
        let store = MemoryStore::new();
        let t0 = Instant::now();
        let mut hub = HubState::new_at(profile(), &store, t0, Local::now());

        hub.pointer.on_move(10, 5);
        assert_eq!(hub.pointer.position().x, 0);
        hub.on_frame(t0 + Duration::from_millis(10));
        assert_eq!(hub.pointer.position().x, 10);
    }

    #[test]
    fn test_star_field() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let stars = Star::scatter(STAR_COUNT, &mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            let b = star.brightness(1.3);
            assert!((0.0..=1.0).contains(&b));
        }
    }
}
