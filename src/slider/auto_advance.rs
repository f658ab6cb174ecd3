//! Timer-driven rotation of a slide cursor
//!
//! The timer and manual navigation mutate the same cursor independently.
//! A manual move never restarts the countdown: the next automatic advance
//! still fires one full period after the previous one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{
    Instant,
    MissedTickBehavior,
};

use super::SlideCursor;

/// A slide cursor advanced by a background timer.
///
/// Must be created inside a tokio runtime. Dropping the slider stops its
/// timer.
#[derive(Debug)]
pub struct AutoSlider {
    cursor: Arc<watch::Sender<SlideCursor>>,
    period: Duration,
    timer: JoinHandle<()>,
}

impl AutoSlider {
    /// Start rotating over `len` slides, first advance one `period` from now.
    #[must_use]
    pub fn start(len: usize, period: Duration) -> Self {
        let (cursor, _) = watch::channel(SlideCursor::new(len));
        let cursor = Arc::new(cursor);

        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shared = Arc::clone(&cursor);
        let timer = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                shared.send_modify(|cursor| {
                    cursor.next();
                });
                tracing::trace!(index = shared.borrow().index(), "Slide auto-advanced");
            }
        });
        tracing::debug!(slides = len, period_ms = period.as_millis(), "Slider started");

        Self { cursor, period, timer }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.cursor.borrow().index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor.borrow().is_empty()
    }

    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    pub fn next(&self) -> usize {
        self.modify(SlideCursor::next)
    }

    pub fn prev(&self) -> usize {
        self.modify(SlideCursor::prev)
    }

    /// Jump to a slide; out-of-range targets leave the cursor unchanged.
    pub fn go_to(&self, index: usize) -> bool {
        self.cursor.send_if_modified(|cursor| cursor.go_to(index))
    }

    /// Receiver notified whenever the active slide changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SlideCursor> {
        self.cursor.subscribe()
    }

    fn modify(&self, step: impl FnOnce(&mut SlideCursor) -> usize) -> usize {
        let mut index = 0;
        self.cursor.send_modify(|cursor| index = step(cursor));
        index
    }
}

impl Drop for AutoSlider {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio::time::sleep;

    use super::*;

    const PERIOD: Duration = Duration::from_millis(7000);

    #[tokio::test(start_paused = true)]
    async fn two_slides_alternate_every_period() {
        let slider = AutoSlider::start(2, PERIOD);
        assert_eq!(slider.active(), 0);

        sleep(Duration::from_millis(7001)).await;
        assert_eq!(slider.active(), 1);

        sleep(PERIOD).await;
        assert_eq!(slider.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_next_does_not_reset_countdown() {
        let slider = AutoSlider::start(2, PERIOD);

        sleep(Duration::from_millis(3000)).await;
        assert_eq!(slider.next(), 1);

        // The timer still fires at 7000 ms, not 3000 + 7000 ms.
        sleep(Duration::from_millis(4001)).await;
        assert_eq!(slider.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn seven_slides_wrap_after_a_full_cycle() {
        let slider = AutoSlider::start(7, PERIOD);

        sleep(PERIOD * 7 + Duration::from_millis(1)).await;

        assert_eq!(slider.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_wraps() {
        let slider = AutoSlider::start(7, PERIOD);

        assert_eq!(slider.prev(), 6);
        assert_eq!(slider.next(), 0);
        assert!(slider.go_to(3));
        assert!(!slider.go_to(9));
        assert_eq!(slider.active(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_automatic_advances() {
        let slider = AutoSlider::start(3, PERIOD);
        let mut receiver = slider.subscribe();

        receiver.changed().await.unwrap();

        assert_eq!(receiver.borrow_and_update().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_slider_stops_the_timer() {
        let slider = AutoSlider::start(2, PERIOD);
        let receiver = slider.subscribe();

        drop(slider);
        sleep(PERIOD * 2).await;

        assert_eq!(receiver.borrow().index(), 0);
    }
}
