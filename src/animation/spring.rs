/// Damped spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Distance from target below which the spring may come to rest.
    #[serde(default = "default_rest")]
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    #[serde(default = "default_rest")]
    pub rest_speed: f64,
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest() -> f64 {
    0.01
}

impl SpringConfig {
    pub const GENTLE: Self = Self::new(200.0, 30.0);
    pub const BOUNCY: Self = Self::new(300.0, 15.0);
    pub const STIFF: Self = Self::new(500.0, 40.0);
    pub const FLOATING: Self = Self::new(100.0, 20.0);
    /// Smoothing applied to raw scroll progress.
    pub const SCROLL: Self = Self::new(100.0, 30.0).with_rest(0.001, 0.001);
    pub const MAGNETIC: Self = Self::new(150.0, 15.0);
    pub const COUNTER: Self = Self::new(100.0, 30.0);

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub const fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::GENTLE
    }
}

/// A value that chases a target through a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringFollower {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl SpringFollower {
    const MAX_SUBSTEP: f64 = 1.0 / 240.0;
    const MAX_STEP: f64 = 1.0;

    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Teleport to `value` and stop.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest || dt.is_nan() || dt <= 0.0 {
            return self.value;
        }

        let mass = self.config.mass.max(1e-6);
        let mut remaining = dt.min(Self::MAX_STEP);
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;

            if (self.value - self.target).abs() < self.config.rest_delta
                && self.velocity.abs() < self.config.rest_speed
            {
                self.jump(self.target);
                break;
            }
        }
        self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
