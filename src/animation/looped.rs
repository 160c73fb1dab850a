use crate::{
    animation::{interp::BreakpointTable, lerp::Lerp},
    foundation::error::{ScrollError, ScrollResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    #[default]
    Repeat,
    PingPong,
}

/// A time-driven keyframe track that repeats forever.
///
/// The table's inputs are cycle phase in `[0, 1]`. Before `delay` elapses the
/// track holds its phase-0 value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopedTrack<T> {
    pub table: BreakpointTable<T>,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub mode: LoopMode,
}

impl<T> LoopedTrack<T>
where
    T: Lerp + Clone,
{
    pub fn new(table: BreakpointTable<T>, duration_secs: f64) -> ScrollResult<Self> {
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(ScrollError::validation(
                "LoopedTrack duration must be finite and > 0",
            ));
        }
        Ok(Self {
            table,
            duration_secs,
            delay_secs: 0.0,
            mode: LoopMode::Repeat,
        })
    }

    pub fn delay(mut self, secs: f64) -> Self {
        self.delay_secs = secs.max(0.0);
        self
    }

    pub fn mode(mut self, mode: LoopMode) -> Self {
        self.mode = mode;
        self
    }

    /// Cycle phase in `[0, 1)` at `t_secs`.
    pub fn phase(&self, t_secs: f64) -> f64 {
        let local = t_secs - self.delay_secs;
        if local.is_nan() || local <= 0.0 {
            return 0.0;
        }
        match self.mode {
            LoopMode::Repeat => (local / self.duration_secs).fract(),
            LoopMode::PingPong => {
                let cycle = (local / self.duration_secs) % 2.0;
                if cycle < 1.0 { cycle } else { 2.0 - cycle }
            }
        }
    }

    pub fn sample(&self, t_secs: f64) -> T {
        self.table.sample(self.phase(t_secs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looped.rs"]
mod tests;
