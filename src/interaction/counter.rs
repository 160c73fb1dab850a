use crate::animation::spring::{SpringConfig, SpringFollower};

/// A number that springs from zero to its value once scrolled into view.
#[derive(Clone, Debug)]
pub struct AnimatedCounter {
    pub value: f64,
    pub prefix: String,
    pub suffix: String,
    spring: SpringFollower,
    seen: bool,
}

impl AnimatedCounter {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            prefix: String::new(),
            suffix: String::new(),
            spring: SpringFollower::new(SpringConfig::COUNTER, 0.0),
            seen: false,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Start counting. Only the first call has an effect.
    pub fn enter_view(&mut self) {
        if !self.seen {
            self.seen = true;
            self.spring.set_target(self.value);
            tracing::debug!(value = self.value, "counter in view");
        }
    }

    pub fn has_entered(&self) -> bool {
        self.seen
    }

    pub fn step(&mut self, dt: f64) -> f64 {
        self.spring.step(dt)
    }

    pub fn current(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }

    pub fn text(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            self.spring.value().round() as i64,
            self.suffix
        )
    }

    pub fn reset(&mut self) {
        self.spring.jump(0.0);
        self.seen = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/counter.rs"]
mod tests;
