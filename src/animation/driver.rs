use crate::animation::pingpong::PingPong;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Monotonic time source for [`ProgressDriver`].
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
    /// Suspend until roughly `dur` has passed.
    fn sleep(&self, dur: Duration);
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

/// Clock that only moves when told to; `sleep` advances it instantly.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&self, dur: Duration) {
        self.advance(dur);
    }
}

/// Runs a [`PingPong`] against a clock, started at construction.
///
/// There is no explicit stop: the loop in [`ProgressDriver::run`] ends when its callback breaks,
/// and dropping the driver ends the animation.
#[derive(Debug)]
pub struct ProgressDriver<C: Clock = SystemClock> {
    timer: PingPong,
    clock: C,
    started_at: Duration,
}

impl ProgressDriver<SystemClock> {
    pub fn start_now(timer: PingPong) -> Self {
        Self::start(timer, SystemClock::default())
    }
}

impl<C: Clock> ProgressDriver<C> {
    pub fn start(timer: PingPong, clock: C) -> Self {
        let started_at = clock.now();
        Self {
            timer,
            clock,
            started_at,
        }
    }

    pub fn timer(&self) -> &PingPong {
        &self.timer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started_at)
    }

    pub fn progress(&self) -> f64 {
        self.timer.value_at(self.elapsed())
    }

    /// Call `on_tick` with the current progress every `frame_interval` until it breaks.
    ///
    /// Returns the number of ticks delivered.
    pub fn run<F>(&self, frame_interval: Duration, mut on_tick: F) -> u64
    where
        F: FnMut(f64) -> ControlFlow<()>,
    {
        let mut ticks = 0u64;
        loop {
            let progress = self.progress();
            ticks += 1;
            if on_tick(progress).is_break() {
                tracing::debug!(ticks, "progress driver cancelled");
                return ticks;
            }
            self.clock.sleep(frame_interval);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
