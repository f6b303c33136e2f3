//! Count-up animation for displayed amounts.

use std::time::Duration;

/// Exponential ease-out: fast start, settles on 1 at `t = 1`.
#[inline]
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else if t <= 0.0 || t.is_nan() {
        0.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

/// Animates a number from 0 up to its target over a fixed duration.
/// Advanced by elapsed frame time; retargeting restarts from 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    elapsed: Duration,
    duration: Duration,
}

impl CountUp {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Count again from 0 toward `target`.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `dt` and return the value to display.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.target;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.target * ease_out_expo(t) as f64
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
