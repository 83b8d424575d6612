use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Fired by the testimonial autoplay timer.
    CarouselTick,
}

/// Pull-based source of events, used to replay scripted input in tests.
pub trait EventSource {
    fn next_event(&mut self) -> Option<AppEvent>;
}

pub struct EventReader {
    tx: mpsc::Sender<AppEvent>,
    tick_rate: Duration,
}

impl EventReader {
    #[must_use]
    pub fn new(tx: mpsc::Sender<AppEvent>, tick_rate: Duration) -> Self {
        Self { tx, tick_rate }
    }

    /// Blocking loop. Must run on a dedicated `std::thread`, not a tokio worker.
    pub fn run(self) {
        loop {
            if event::poll(self.tick_rate).unwrap_or(false) {
                let evt = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                        AppEvent::Key(key)
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                if self.tx.blocking_send(evt).is_err() {
                    break;
                }
            } else if self.tx.blocking_send(AppEvent::Tick).is_err() {
                break;
            }
        }
        tracing::debug!("event reader stopped");
    }
}
