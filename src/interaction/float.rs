use std::time::Duration;

use crate::{
    animation::spring::{SpringConfig, SpringFollower},
    foundation::math::RandomSource,
    timeline::{channel::Channel, style::ElementStyle},
};

/// A card that drifts to a new random lean on a jittered interval.
///
/// Targets are picked from the injected [`RandomSource`] and followed through
/// [`SpringConfig::FLOATING`] springs. Hovering lifts the card and holds it
/// straight.
#[derive(Clone, Debug)]
pub struct FloatingCard<R> {
    pub intensity: f64,
    interval: Duration,
    next_at: Duration,
    y: SpringFollower,
    rotate: SpringFollower,
    hovered: bool,
    rng: R,
}

impl<R: RandomSource> FloatingCard<R> {
    pub const BASE_INTERVAL: Duration = Duration::from_millis(2000);
    pub const JITTER: Duration = Duration::from_millis(1000);
    /// Full vertical range at intensity 1.
    pub const DRIFT_PX: f64 = 20.0;
    /// Full rotation range at intensity 1.
    pub const LEAN_DEG: f64 = 4.0;
    pub const HOVER_LIFT_PX: f64 = -20.0;
    pub const HOVER_SCALE: f64 = 1.05;

    pub fn new(mut rng: R, intensity: f64) -> Self {
        let interval = Self::BASE_INTERVAL + Self::JITTER.mul_f64(rng.next_f64_01());
        Self {
            intensity,
            interval,
            next_at: interval,
            y: SpringFollower::new(SpringConfig::FLOATING, 0.0),
            rotate: SpringFollower::new(SpringConfig::FLOATING, 0.0),
            hovered: false,
            rng,
        }
    }

    /// Time between new targets, fixed at mount.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Pick a new target if an interval elapsed by `now` (time since mount).
    /// Missed intervals collapse into one retarget. Returns whether it moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        if now < self.next_at {
            return false;
        }
        let missed = ((now - self.next_at).as_secs_f64() / self.interval.as_secs_f64()).floor();
        self.next_at += self.interval.mul_f64(missed + 1.0);

        let y = (self.rng.next_f64_01() - 0.5) * Self::DRIFT_PX * self.intensity;
        let rotate = (self.rng.next_f64_01() - 0.5) * Self::LEAN_DEG * self.intensity;
        self.y.set_target(y);
        self.rotate.set_target(rotate);
        tracing::debug!(y, rotate, "floating card retarget");
        true
    }

    pub fn step(&mut self, dt: f64) {
        self.y.step(dt);
        self.rotate.step(dt);
    }

    /// `(y, rotate)` the springs are heading for.
    pub fn target(&self) -> (f64, f64) {
        (self.y.target(), self.rotate.target())
    }

    /// Current `(y, rotate)` of the springs.
    pub fn offset(&self) -> (f64, f64) {
        (self.y.value(), self.rotate.value())
    }

    pub fn hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn style(&self) -> ElementStyle {
        let (y, rotate, scale) = if self.hovered {
            (Self::HOVER_LIFT_PX, 0.0, Self::HOVER_SCALE)
        } else {
            (self.y.value(), self.rotate.value(), 1.0)
        };
        let mut style = ElementStyle::default();
        style.set(Channel::TranslateY, Channel::TranslateY.value_from(y));
        style.set(Channel::Rotate, Channel::Rotate.value_from(rotate));
        style.set(Channel::Scale, Channel::Scale.value_from(scale));
        style
    }

    pub fn reset(&mut self) {
        self.y.jump(0.0);
        self.rotate.jump(0.0);
        self.hovered = false;
        self.next_at = self.interval;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/float.rs"]
mod tests;
