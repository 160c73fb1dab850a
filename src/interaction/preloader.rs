use std::time::Duration;

use crate::foundation::math::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreloaderPhase {
    Loading,
    /// Reached 100%; dismisses at `until`.
    Holding { until: Duration },
    Done,
}

/// Fake load progress: random increments on a fixed interval, then a short hold.
#[derive(Clone, Debug)]
pub struct Preloader<R> {
    phase: PreloaderPhase,
    progress: f64,
    next_tick: Duration,
    rng: R,
}

impl<R: RandomSource> Preloader<R> {
    pub const TICK: Duration = Duration::from_millis(100);
    pub const HOLD: Duration = Duration::from_millis(500);
    pub const MAX_STEP: f64 = 15.0;

    pub fn new(rng: R) -> Self {
        Self {
            phase: PreloaderPhase::Loading,
            progress: 0.0,
            next_tick: Self::TICK,
            rng,
        }
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == PreloaderPhase::Done
    }

    /// Raw progress; may overshoot 100 for one tick.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn percent(&self) -> u32 {
        self.progress.round().clamp(0.0, 100.0) as u32
    }

    /// Run every interval tick due at or before `now` (time since mount).
    pub fn tick(&mut self, now: Duration) -> PreloaderPhase {
        while self.phase == PreloaderPhase::Loading && self.next_tick <= now {
            let at = self.next_tick;
            if self.progress >= 100.0 {
                self.progress = 100.0;
                self.phase = PreloaderPhase::Holding {
                    until: at + Self::HOLD,
                };
                tracing::debug!(at_ms = at.as_millis() as u64, "preloader complete");
            } else {
                self.progress += self.rng.next_f64_01() * Self::MAX_STEP;
            }
            self.next_tick += Self::TICK;
        }
        if let PreloaderPhase::Holding { until } = self.phase {
            if now >= until {
                self.phase = PreloaderPhase::Done;
                tracing::debug!("preloader dismissed");
            }
        }
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = PreloaderPhase::Loading;
        self.progress = 0.0;
        self.next_tick = Self::TICK;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/preloader.rs"]
mod tests;
