//! Cyclic carousel state and its autoplay timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::PreconditionViolation;

pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Index over a fixed, non-empty list. Wraps in both directions.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    current: usize,
    auto_advance: bool,
}

impl<T> Carousel<T> {
    /// # Errors
    ///
    /// Returns [`PreconditionViolation::EmptyCarousel`] if `items` is empty.
    pub fn new(items: Vec<T>) -> Result<Self, PreconditionViolation> {
        if items.is_empty() {
            return Err(PreconditionViolation::EmptyCarousel);
        }
        Ok(Self {
            items,
            current: 0,
            auto_advance: true,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.items.len();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        let len = self.items.len();
        self.current = (self.current + len - 1) % len;
        self.current
    }

    /// # Errors
    ///
    /// Returns [`PreconditionViolation::IndexOutOfRange`] and keeps the current
    /// index when `index >= len`.
    pub fn go_to(&mut self, index: usize) -> Result<usize, PreconditionViolation> {
        if index >= self.items.len() {
            return Err(PreconditionViolation::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Returns `true` if the state changed.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.auto_advance, false)
    }

    /// Returns `true` if the state changed.
    pub fn resume(&mut self) -> bool {
        !std::mem::replace(&mut self.auto_advance, true)
    }

    /// Apply one autoplay tick. Ignored while paused.
    pub fn tick(&mut self) -> Option<usize> {
        self.auto_advance.then(|| self.next())
    }
}

/// Handle to a running autoplay timer. The timer task is aborted when the
/// handle is cancelled or dropped.
#[derive(Debug)]
pub struct Autoplay {
    handle: JoinHandle<()>,
    period: Duration,
}

impl Autoplay {
    /// Spawn a timer that sends `event` into `tx` once per `period`, starting
    /// one period from now. Returns `None` outside a tokio runtime.
    ///
    /// The task stops on its own once the receiving side is closed. A tick that
    /// finds the channel full is dropped.
    #[must_use]
    pub fn start<E>(period: Duration, tx: mpsc::Sender<E>, event: E) -> Option<Self>
    where
        E: Clone + Send + 'static,
    {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no tokio runtime, carousel autoplay disabled");
            return None;
        };
        let first = Instant::now() + period;
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                match tx.try_send(event.clone()) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });
        Some(Self { handle, period })
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Carousel plus the timer that drives it.
///
/// Ticks are delivered as `E` events into the caller's channel and applied with
/// [`on_tick`](Self::on_tick) on the caller's loop, so state is only ever
/// touched from one place. The timer is armed while the carousel auto-advances
/// and disarmed on pause and on drop.
#[derive(Debug)]
pub struct CarouselController<T, E> {
    carousel: Carousel<T>,
    period: Duration,
    autoplay_enabled: bool,
    tick_tx: mpsc::Sender<E>,
    tick_event: E,
    timer: Option<Autoplay>,
}

impl<T, E> CarouselController<T, E>
where
    E: Clone + Send + 'static,
{
    /// # Errors
    ///
    /// Returns [`PreconditionViolation::EmptyCarousel`] if `items` is empty.
    pub fn new(
        items: Vec<T>,
        period: Duration,
        tick_tx: mpsc::Sender<E>,
        tick_event: E,
    ) -> Result<Self, PreconditionViolation> {
        Ok(Self {
            carousel: Carousel::new(items)?,
            period,
            autoplay_enabled: true,
            tick_tx,
            tick_event,
            timer: None,
        })
    }

    /// Disable autoplay entirely; `resume` then never re-arms the timer.
    #[must_use]
    pub fn with_autoplay(mut self, enabled: bool) -> Self {
        self.autoplay_enabled = enabled;
        if !enabled {
            self.carousel.pause();
            self.disarm();
        }
        self
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    #[must_use]
    pub fn current(&self) -> &T {
        self.carousel.current()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.carousel.is_auto_advancing()
    }

    /// Arm the timer if the carousel is auto-advancing. Idempotent.
    pub fn start(&mut self) {
        if self.autoplay_enabled && self.carousel.is_auto_advancing() && self.timer.is_none() {
            self.arm();
        }
    }

    pub fn pause(&mut self) {
        if self.carousel.pause() {
            tracing::debug!(index = self.carousel.current_index(), "carousel paused");
        }
        self.disarm();
    }

    pub fn resume(&mut self) {
        if !self.autoplay_enabled {
            return;
        }
        if self.carousel.resume() {
            tracing::debug!(index = self.carousel.current_index(), "carousel resumed");
        }
        self.start();
    }

    pub fn next(&mut self) -> usize {
        self.carousel.next()
    }

    pub fn prev(&mut self) -> usize {
        self.carousel.prev()
    }

    /// # Errors
    ///
    /// Returns [`PreconditionViolation::IndexOutOfRange`] for an invalid index.
    pub fn go_to(&mut self, index: usize) -> Result<usize, PreconditionViolation> {
        self.carousel.go_to(index)
    }

    /// Apply a timer tick received from the event channel.
    pub fn on_tick(&mut self) -> Option<usize> {
        self.carousel.tick()
    }

    fn arm(&mut self) {
        self.timer = Autoplay::start(self.period, self.tick_tx.clone(), self.tick_event.clone());
    }

    fn disarm(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> Carousel<u8> {
        Carousel::new(vec![0, 1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn starts_at_zero_auto_advancing() {
        let c = six();
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_advancing());
        assert_eq!(*c.current(), 0);
    }

    #[test]
    fn empty_is_rejected() {
        let err = Carousel::<u8>::new(Vec::new()).unwrap_err();
        assert_eq!(err, PreconditionViolation::EmptyCarousel);
    }

    #[test]
    fn next_seven_times_wraps_to_one() {
        let mut c = six();
        for _ in 0..7 {
            c.next();
        }
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut c = six();
        assert_eq!(c.prev(), 5);
    }

    #[test]
    fn go_to_out_of_range_keeps_index() {
        let mut c = six();
        c.go_to(3).unwrap();
        let err = c.go_to(6).unwrap_err();
        assert_eq!(err, PreconditionViolation::IndexOutOfRange { index: 6, len: 6 });
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn tick_ignored_while_paused() {
        let mut c = six();
        assert!(c.pause());
        assert!(!c.pause());
        assert_eq!(c.tick(), None);
        assert_eq!(c.current_index(), 0);
        assert!(c.resume());
        assert!(!c.resume());
        assert_eq!(c.tick(), Some(1));
    }

    #[test]
    fn single_item_carousel_stays_put() {
        let mut c = Carousel::new(vec!["only"]).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn start_without_runtime_stays_disarmed() {
        let (tx, _rx) = mpsc::channel::<()>(4);
        let mut controller =
            CarouselController::new(vec![1, 2, 3], DEFAULT_AUTOPLAY_INTERVAL, tx, ()).unwrap();
        controller.start();
        assert!(!controller.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_ticks_once_per_interval() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut controller =
            CarouselController::new(vec!['a', 'b', 'c'], Duration::from_secs(5), tx, ()).unwrap();
        controller.start();
        assert!(controller.is_armed());

        let started = Instant::now();
        rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert_eq!(controller.on_tick(), Some(1));

        rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(10));
        assert_eq!(controller.on_tick(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_and_resume_rearms() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut controller =
            CarouselController::new(vec![1, 2, 3], Duration::from_secs(5), tx, ()).unwrap();
        controller.start();
        controller.pause();
        assert!(!controller.is_armed());

        let waited = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert!(waited.is_err(), "paused carousel must not tick");
        assert_eq!(controller.current_index(), 0);

        controller.resume();
        assert!(controller.is_armed());
        let waited = tokio::time::timeout(Duration::from_secs(6), rx.recv()).await;
        assert!(waited.is_ok());
        assert_eq!(controller.on_tick(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_timer() {
        let (tx, mut rx) = mpsc::channel::<()>(4);
        let mut controller =
            CarouselController::new(vec![1, 2], Duration::from_secs(5), tx, ()).unwrap();
        controller.start();
        drop(controller);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_autoplay_never_arms() {
        let (tx, _rx) = mpsc::channel::<()>(4);
        let mut controller = CarouselController::new(vec![1, 2], Duration::from_secs(5), tx, ())
            .unwrap()
            .with_autoplay(false);
        controller.start();
        controller.resume();
        assert!(!controller.is_armed());
        assert!(!controller.is_auto_advancing());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_stops_when_receiver_closes() {
        let (tx, rx) = mpsc::channel::<()>(1);
        let timer = Autoplay::start(Duration::from_secs(1), tx, ()).unwrap();
        drop(rx);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(timer.is_finished());
        assert_eq!(timer.period(), Duration::from_secs(1));
    }

    mod proptest_carousel {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn index_always_in_range(
                len in 1usize..20,
                moves in proptest::collection::vec(proptest::bool::ANY, 0..100),
            ) {
                let mut c = Carousel::new(vec![(); len]).unwrap();
                for forward in moves {
                    let index = if forward { c.next() } else { c.prev() };
                    prop_assert!(index < len);
                }
            }

            #[test]
            fn next_len_times_is_identity(len in 1usize..20, start in 0usize..20) {
                let mut c = Carousel::new(vec![(); len]).unwrap();
                let start = start % len;
                c.go_to(start).unwrap();
                for _ in 0..len {
                    c.next();
                }
                prop_assert_eq!(c.current_index(), start);
            }

            #[test]
            fn prev_then_next_returns_to_start(len in 1usize..20, start in 0usize..20) {
                let mut c = Carousel::new(vec![(); len]).unwrap();
                let start = start % len;
                c.go_to(start).unwrap();
                c.prev();
                c.next();
                prop_assert_eq!(c.current_index(), start);
            }
        }
    }
}
