use crate::activation::{tracing_listener, ActivationHandler, ActivationOutcome, SystemBrowser, TerminalBell};
use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::hub::{HubState, Profile};
use crate::ui::screens::link_hub::HubLayout;
use crate::util::database::{Database, KeyValueStore, MemoryStore};
use crate::widgets::error_boundary::{fallback_for, ErrorBoundary, FallbackAction};
use crate::widgets::notification::hit_test;
use crate::{log_info, log_warn};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use color_eyre::Result;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Name the root boundary reports under.
const ROOT_BOUNDARY: &str = "link-hub";

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: AppConfig,
    /// Where click counters live between runs
    pub store: Arc<dyn KeyValueStore>,
    /// Everything the hub screen shows
    pub hub: HubState,
    /// Root error boundary around the hub screen
    pub boundary: ErrorBoundary,
    pub activation: ActivationHandler,
    /// Event handler.
    pub events: EventHandler,
    /// Last area drawn to, used to map mouse clicks back to widgets
    pub viewport: Rect,
}

impl App {
    /// Constructs a new instance of [`App`] wired to the system browser.
    pub fn new(config: AppConfig) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match Database::open(&config.db_path) {
            Ok(db) => Arc::new(db),
            Err(e) => {
                log_warn!(
                    "Could not open {}: {}. Click counts will not survive a restart.",
                    config.db_path.display(),
                    e
                );
                Arc::new(MemoryStore::new())
            }
        };

        let mut activation = ActivationHandler::new(Arc::new(SystemBrowser::new()))
            .with_listener(tracing_listener());
        if config.haptics {
            activation = activation.with_haptics(Arc::new(TerminalBell));
        }

        Ok(Self::with_parts(config, store, activation))
    }

    /// Assemble an [`App`] from already-built collaborators.
    pub fn with_parts(config: AppConfig, store: Arc<dyn KeyValueStore>, activation: ActivationHandler) -> Self {
        let hub = HubState::new(Profile::from(&config), store.as_ref());
        let boundary = ErrorBoundary::new(ROOT_BOUNDARY, fallback_for(config.fallback));
        let events = EventHandler::new(config.frame_rate);

        Self {
            running: true,
            config,
            store,
            hub,
            boundary,
            activation,
            events,
            viewport: Rect::default(),
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| {
                    let area = frame.area();
                    self.viewport = area;
                    frame.render_widget(&mut self, area);
                })?;

                // save power
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    if self.hub.on_frame(Instant::now()) {
                        needs_redraw = true;
                    }
                }
                Event::Clock => {
                    self.hub.on_clock_tick(chrono::Local::now());
                    needs_redraw = true;
                }
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) => self.handle_key_events(key_event)?,
                    // Pointer moves are only applied on the next frame tick
                    crossterm::event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if let Some(app_event) = self.map_key(key_event) {
            self.events.send(app_event);
        }
        Ok(())
    }

    /// Which application event a keypress stands for, if any.
    pub fn map_key(&self, key_event: KeyEvent) -> Option<AppEvent> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }

        // While the boundary shows its fallback, the fallback owns the keyboard
        if self.boundary.is_failed() {
            return match self.boundary.handle_key(key_event) {
                FallbackAction::None => None,
                FallbackAction::Reload => Some(AppEvent::Reload),
                FallbackAction::Quit => Some(AppEvent::Quit),
                FallbackAction::OpenLink { name, url } => Some(AppEvent::OpenManual {
                    name: name.to_string(),
                    url: url.to_string(),
                }),
            };
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => Some(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SelectNext),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::ActivateSelected),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                (index < self.hub.links().len()).then_some(AppEvent::Activate(index))
            }
            KeyCode::Char('o') => Some(AppEvent::OpenNotificationLink(None)),
            KeyCode::Char('x') => Some(AppEvent::DismissNotification),
            KeyCode::F(5) | KeyCode::Char('r') => Some(AppEvent::Reload),
            _ => None,
        }
    }

    /// Pointer moves feed the glow; a left click opens a notification's link
    /// or activates the link row under it.
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.hub.pointer.on_move(mouse_event.column, mouse_event.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = hit_test(&self.hub.notifications, self.viewport, Instant::now(), mouse_event.column, mouse_event.row) {
                    self.events.send(AppEvent::OpenNotificationLink(Some(id)));
                    return;
                }
                if self.boundary.is_failed() {
                    return;
                }
                let layout = HubLayout::compute(self.viewport);
                if let Some(index) = layout.link_at(mouse_event.column, mouse_event.row) {
                    if index < self.hub.revealed_links(Instant::now()) {
                        self.events.send(AppEvent::Activate(index));
                    }
                }
            }
            _ => {}
        }
    }

    /// Apply one application event.
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::SelectNext => self.hub.select_next(),
            AppEvent::SelectPrevious => self.hub.select_previous(),
            AppEvent::ActivateSelected => {
                self.activate(self.hub.selected);
            }
            AppEvent::Activate(index) => {
                if self.hub.select(index) {
                    self.activate(index);
                }
            }
            AppEvent::OpenNotificationLink(id) => self.open_notification_link(id),
            AppEvent::DismissNotification => {
                self.hub.notifications.dismiss_latest(Instant::now());
            }
            AppEvent::OpenManual { name, url } => {
                log_info!("Opening {} from the fallback screen", name);
                self.activation.open_manual(&url);
            }
            AppEvent::Reload => self.reload(),
            AppEvent::Quit => self.quit(),
        }
    }

    /// Activate the link at `index`. Out-of-range indices do nothing.
    pub fn activate(&mut self, index: usize) -> Option<ActivationOutcome> {
        let link = self.hub.links().get(index)?;
        let outcome = self.activation.activate(
            link.url,
            link.name,
            &mut self.hub.interaction,
            self.store.as_ref(),
            &mut self.hub.notifications,
        );
        Some(outcome)
    }

    /// Follow the manual link of a notification (the newest when `id` is `None`).
    /// The notification goes away once its link has been followed.
    fn open_notification_link(&mut self, id: Option<Uuid>) {
        let target = match id {
            Some(id) => self.hub.notifications.get(id),
            None => self.hub.notifications.latest(),
        }
        .map(|n| (n.id, n.url.clone()));

        if let Some((id, url)) = target {
            self.activation.open_manual(&url);
            self.hub.notifications.remove(id);
        }
    }

    /// Start the hub over from persisted state, the way a page refresh would.
    pub fn reload(&mut self) {
        log_info!("Reloading link hub");
        self.hub = HubState::new(Profile::from(&self.config), self.store.as_ref());
        self.boundary.reset();
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
