//! Duration-based scalar tweens
//!
//! A [`Tween`] interpolates from one value to another over a fixed duration,
//! shaped by an [`Easing`]. It can play once or repeat forever, optionally
//! reversing direction on every other cycle.

use std::time::Duration;

use crate::easing::Easing;
use crate::values::Interpolate;

/// How a tween behaves when it reaches the end of its duration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Stop at the end value
    #[default]
    Once,
    /// Start another cycle; with `autoreverse`, odd cycles run end to start
    Forever { autoreverse: bool },
}

/// A scalar tween
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    repeat: Repeat,
    elapsed: Duration,
    /// Part of the next ticks that predates `start`
    lead_in: Duration,
    playing: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            repeat: Repeat::Once,
            elapsed: Duration::ZERO,
            lead_in: Duration::ZERO,
            playing: false,
        }
    }

    /// A stopped tween resting at `value`
    pub fn at_rest(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    /// Set the repeat mode (builder pattern)
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn from_value(&self) -> f32 {
        self.from
    }

    pub fn to_value(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn repeat_mode(&self) -> Repeat {
        self.repeat
    }

    /// Start from the beginning
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.lead_in = Duration::ZERO;
        self.playing = !self.duration.is_zero();
    }

    /// Freeze at the current position
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Linear progress through the current cycle (0.0 to 1.0), direction applied
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let cycles = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        match self.repeat {
            Repeat::Once => cycles.min(1.0) as f32,
            Repeat::Forever { autoreverse } => {
                let index = cycles.floor();
                let fraction = (cycles - index) as f32;
                if autoreverse && index as u64 % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        }
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Ignore the first `lead_in` of upcoming ticks
    ///
    /// For a tween started between frames: the next frame covers time from
    /// before the tween existed.
    pub fn skip_lead_in(&mut self, lead_in: Duration) {
        self.lead_in = lead_in;
    }

    /// Advance by `dt`
    pub fn tick(&mut self, dt: Duration) {
        if !self.playing {
            return;
        }

        let skipped = dt.min(self.lead_in);
        self.lead_in -= skipped;
        self.elapsed += dt - skipped;

        match self.repeat {
            Repeat::Once => {
                if self.elapsed >= self.duration {
                    self.elapsed = self.duration;
                    self.playing = false;
                }
            }
            Repeat::Forever { autoreverse } => {
                // Wrap on the full period so elapsed stays small and direction is kept
                let period = if autoreverse {
                    self.duration * 2
                } else {
                    self.duration
                };
                let period_nanos = period.as_nanos();
                let wrapped = self.elapsed.as_nanos() % period_nanos;
                self.elapsed = Duration::from_nanos(wrapped as u64);
            }
        }
    }
}
