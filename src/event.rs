use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use uuid::Uuid;

/// How often the displayed clock refreshes.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(60);

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// Frame tick, emitted at the configured frame rate.
    Tick,
    /// The one-minute clock tick.
    Clock,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Navigation
    SelectNext,
    SelectPrevious,

    // Links
    ActivateSelected,
    Activate(usize),

    // Notifications
    OpenNotificationLink(Option<Uuid>),
    DismissNotification,

    // Fallback screen
    OpenManual { name: String, url: String },

    // System
    Reload,
    Quit,
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns the task feeding it.
    ///
    /// The task stops once this handler is dropped, so no tick can reach a
    /// screen that has been torn down.
    pub fn new(frame_rate: f64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone(), frame_rate);
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be sent to the event receiver.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// Reads crossterm events and emits frame and clock ticks.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    frame_rate: f64,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>, frame_rate: f64) -> Self {
        Self { sender, frame_rate }
    }

    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / self.frame_rate);

        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        let mut clock = tokio::time::interval_at(
            tokio::time::Instant::now() + CLOCK_PERIOD,
            CLOCK_PERIOD,
        );
        loop {
            let tick_delay = tick.tick();
            let clock_delay = clock.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              _ = clock_delay => {
                self.send(Event::Clock);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
