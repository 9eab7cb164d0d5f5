use crate::animation::ease::Ease;
use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{RevealError, RevealResult};
use std::time::Duration;

/// Endless 0 -> 1 -> 0 oscillation, one leg per `duration_ms`.
///
/// Even legs rise, odd legs play the same eased curve backwards in time, so the value is
/// continuous at every turn-around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PingPong {
    duration_ms: u64,
    ease: Ease,
}

impl PingPong {
    pub fn new(duration_ms: u64, ease: Ease) -> RevealResult<Self> {
        if duration_ms == 0 {
            return Err(RevealError::invalid_argument(
                "animation duration must be > 0 ms",
            ));
        }
        Ok(Self { duration_ms, ease })
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn leg_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }

    pub fn value_at(&self, elapsed: Duration) -> f64 {
        self.value_at_secs(elapsed.as_secs_f64())
    }

    pub fn value_at_secs(&self, secs: f64) -> f64 {
        let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
        let legs = secs / self.leg_secs();
        let leg = legs.floor();
        let local = legs - leg;
        let rising = (leg as u64) % 2 == 0;
        if rising {
            self.ease.apply(local)
        } else {
            self.ease.apply(1.0 - local)
        }
    }

    pub fn value_at_frame(&self, frame: FrameIndex, fps: Fps) -> f64 {
        self.value_at_secs(fps.frames_to_secs(frame.0))
    }

    /// Frames covering one full rise and fall at `fps`.
    pub fn cycle_frames(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_ceil(2.0 * self.leg_secs()).max(1)
    }

    pub fn cycles_range(&self, fps: Fps, cycles: u64) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.cycle_frames(fps).saturating_mul(cycles)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pingpong.rs"]
mod tests;
