//! Eased count-up of an integer
//!
//! [`CountUp`] is a pure state machine fed with frame timestamps. The
//! first frame after the reveal becomes the animation start; every frame
//! sets the value to `round(ease_out_quart(progress) × end)`, and frames
//! stop once progress reaches 1. [`CountUpTask`] drives one on a tokio
//! timer.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{
    Instant,
    MissedTickBehavior,
};

use super::VisibilityGate;

/// Quartic ease-out: fast start, gentle landing.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(4)
}

/// Result of feeding a frame to a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not revealed yet, or already finished; the frame did nothing
    Idle,
    /// Another frame is wanted
    Continue,
    /// This frame reached the target
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Armed,
    Running { start: Duration },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    end: u64,
    duration: Duration,
    prefix: String,
    suffix: String,
    gate: VisibilityGate,
    phase: Phase,
    value: u64,
}

impl CountUp {
    #[must_use]
    pub fn new(end: u64, duration: Duration) -> Self {
        Self {
            end,
            duration,
            prefix: String::new(),
            suffix: String::new(),
            gate: VisibilityGate::once(),
            phase: Phase::Hidden,
            value: 0,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Report whether the element is in view. Returns `true` only for the
    /// sample that arms the animation.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if self.gate.observe(in_view).is_some() && self.phase == Phase::Hidden {
            tracing::trace!(end = self.end, "Count-up revealed");
            self.phase = Phase::Armed;
            return true;
        }
        false
    }

    /// Shorthand for `observe(true)`.
    pub fn reveal(&mut self) -> bool {
        self.observe(true)
    }

    /// Advance to the frame at `timestamp` (any monotonic origin).
    pub fn frame(&mut self, timestamp: Duration) -> FrameOutcome {
        let start = match self.phase {
            Phase::Hidden | Phase::Done => return FrameOutcome::Idle,
            Phase::Armed => {
                self.phase = Phase::Running { start: timestamp };
                timestamp
            }
            Phase::Running { start } => start,
        };

        let progress = self.progress(timestamp.saturating_sub(start));
        self.value = self.value_at(progress);
        if progress >= 1.0 {
            self.phase = Phase::Done;
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    #[allow(clippy::float_arithmetic)]
    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    #[allow(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn value_at(&self, progress: f64) -> u64 {
        let value = (ease_out_quart(progress) * self.end as f64).round() as u64;
        value.min(self.end)
    }

    /// Jump straight to the final value, as if every frame had run.
    pub fn complete(&mut self) {
        self.reveal();
        self.value = self.end;
        self.phase = Phase::Done;
    }

    /// Current value with prefix, suffix and `,` thousands separators.
    #[must_use]
    pub fn display(&self) -> String {
        self.format(self.value)
    }

    /// `value` decorated the way this counter displays its own.
    #[must_use]
    pub fn format(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, group_thousands(value), self.suffix)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Background driver of one revealed [`CountUp`].
///
/// Waits `start_delay`, then feeds a frame every `frame_interval` until the
/// counter finishes. Dropping the task cancels any pending frame.
#[derive(Debug)]
pub struct CountUpTask {
    values: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl CountUpTask {
    /// Reveal `counter` and start animating it. Must be called inside a tokio
    /// runtime.
    #[must_use]
    pub fn spawn(mut counter: CountUp, start_delay: Duration, frame_interval: Duration) -> Self {
        counter.reveal();
        let (sender, values) = watch::channel(counter.value());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(start_delay).await;
            let origin = Instant::now();
            let mut frames = tokio::time::interval(frame_interval);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                frames.tick().await;
                let outcome = counter.frame(origin.elapsed());
                sender.send_replace(counter.value());
                if outcome != FrameOutcome::Continue {
                    tracing::trace!(value = counter.value(), "Count-up finished");
                    break;
                }
            }
        });

        Self { values, handle }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        *self.values.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.values.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountUpTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
#[allow(clippy::float_arithmetic, clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use tokio::time::sleep;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.5, 0.9375)]
    #[case(1.0, 1.0)]
    #[case(2.0, 1.0)]
    fn ease_out_quart_values(#[case] progress: f64, #[case] expected: f64) {
        assert_that!(ease_out_quart(progress), near(expected, 1e-12));
    }

    #[googletest::test]
    fn frames_before_reveal_do_nothing() {
        let mut counter = CountUp::new(180, Duration::from_millis(2800));

        expect_that!(counter.frame(Duration::from_secs(5)), eq(FrameOutcome::Idle));
        expect_that!(counter.value(), eq(0));
    }

    #[googletest::test]
    fn reaches_end_exactly_and_never_decreases() {
        let mut counter = CountUp::new(180, Duration::from_millis(2800));
        counter.reveal();

        let mut previous = 0;
        let mut timestamp = Duration::from_secs(10);
        loop {
            let outcome = counter.frame(timestamp);
            expect_that!(counter.value(), ge(previous));
            expect_that!(counter.value(), le(180));
            previous = counter.value();
            if outcome == FrameOutcome::Finished {
                break;
            }
            timestamp += FRAME;
        }

        expect_that!(counter.value(), eq(180));
        expect_that!(counter.frame(timestamp + FRAME), eq(FrameOutcome::Idle));
    }

    #[googletest::test]
    fn first_frame_is_the_start() {
        let mut counter = CountUp::new(2000, Duration::from_secs(2));
        counter.reveal();

        expect_that!(counter.frame(Duration::from_secs(100)), eq(FrameOutcome::Continue));
        expect_that!(counter.value(), eq(0));
        counter.frame(Duration::from_secs(101));
        // Half way: ease 0.9375
        expect_that!(counter.value(), eq(1875));
    }

    #[googletest::test]
    fn reveal_fires_once() {
        let mut counter = CountUp::new(9, Duration::from_millis(2500));

        expect_that!(counter.observe(false), eq(false));
        expect_that!(counter.reveal(), eq(true));
        expect_that!(counter.reveal(), eq(false));
    }

    #[googletest::test]
    fn zero_duration_finishes_on_first_frame() {
        let mut counter = CountUp::new(200, Duration::ZERO);
        counter.reveal();

        expect_that!(counter.frame(Duration::ZERO), eq(FrameOutcome::Finished));
        expect_that!(counter.value(), eq(200));
    }

    #[rstest]
    #[case(0, "+0")]
    #[case(9, "+9")]
    #[case(999, "+999")]
    #[case(2000, "+2,000")]
    #[case(1_234_567, "+1,234,567")]
    fn display_groups_thousands(#[case] end: u64, #[case] expected: &str) {
        let mut counter = CountUp::new(end, Duration::ZERO).with_prefix("+");
        counter.reveal();
        counter.frame(Duration::ZERO);

        assert_that!(counter.display(), eq(expected));
    }

    #[googletest::test]
    fn complete_skips_to_the_end() {
        let mut counter = CountUp::new(180, Duration::from_millis(2800)).with_prefix("+");
        counter.reveal();
        counter.frame(Duration::from_millis(100));
        counter.frame(Duration::from_millis(300));

        counter.complete();

        expect_that!(counter.display(), eq("+180"));
        expect_that!(counter.is_finished(), eq(true));
        expect_that!(counter.frame(Duration::from_secs(9)), eq(FrameOutcome::Idle));
        expect_that!(counter.format(2500), eq("+2,500"));
    }

    #[googletest::test]
    fn suffix_follows_value() {
        let counter = CountUp::new(50, Duration::from_secs(1)).with_suffix("%");

        expect_that!(counter.display(), eq("0%"));
    }

    #[tokio::test(start_paused = true)]
    async fn task_waits_start_delay_then_runs_to_end() {
        let counter = CountUp::new(180, Duration::from_millis(2800));
        let task = CountUpTask::spawn(counter, Duration::from_millis(100), FRAME);

        sleep(Duration::from_millis(50)).await;
        assert_eq!(task.value(), 0);

        sleep(Duration::from_millis(3000)).await;
        assert_eq!(task.value(), 180);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_task_stops_updates() {
        let counter = CountUp::new(2000, Duration::from_millis(3200));
        let task = CountUpTask::spawn(counter, Duration::from_millis(100), FRAME);
        let values = task.subscribe();

        sleep(Duration::from_millis(1000)).await;
        drop(task);
        let frozen = *values.borrow();
        sleep(Duration::from_secs(5)).await;

        assert!(frozen > 0 && frozen < 2000);
        assert_eq!(*values.borrow(), frozen);
    }
}
