use std::fmt;

use rayon::prelude::*;

use crate::{
    animation::{
        ease::Ease,
        interp::BreakpointTable,
        lerp::Lerp,
        looped::LoopedTrack,
    },
    foundation::{
        core::{Point, Rgba8, Vec2},
        error::{ScrollError, ScrollResult},
        math::{RandomSource, Rng64, derive_seed},
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Twinkling stars behind the contact portal.
    Starfield,
    /// Rising embers in the skills sector.
    Embers,
    /// Falling leaves in the ESG sector.
    Leaves,
    /// Pulsing data nodes on the Infra-Q dashboard.
    Nodes,
}

impl FieldKind {
    pub const ALL: [Self; 4] = [Self::Starfield, Self::Embers, Self::Leaves, Self::Nodes];

    pub fn name(self) -> &'static str {
        match self {
            Self::Starfield => "starfield",
            Self::Embers => "embers",
            Self::Leaves => "leaves",
            Self::Nodes => "nodes",
        }
    }

    pub fn parse(s: &str) -> ScrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ScrollError::validation(format!("unknown particle field '{s}'")))
    }

    pub fn preset(self) -> FieldSpec {
        match self {
            Self::Starfield => FieldSpec {
                kind: self,
                count: 50,
                size_px: Span::new(1.0, 3.0),
                duration_secs: Span::new(2.0, 5.0),
                delay_secs: Span::new(0.0, 2.0),
                drift_px: 0.0,
                color: Rgba8::WHITE,
            },
            Self::Embers => FieldSpec {
                kind: self,
                count: 20,
                size_px: Span::new(2.0, 5.0),
                duration_secs: Span::new(6.0, 10.0),
                delay_secs: Span::new(0.0, 3.0),
                drift_px: 100.0,
                color: Rgba8::hex(0xEC954E),
            },
            Self::Leaves => FieldSpec {
                kind: self,
                count: 15,
                size_px: Span::fixed(8.0),
                duration_secs: Span::new(10.0, 15.0),
                delay_secs: Span::new(0.0, 5.0),
                drift_px: 50.0,
                color: Rgba8::hex(0x528940),
            },
            Self::Nodes => FieldSpec {
                kind: self,
                count: 30,
                size_px: Span::fixed(4.0),
                duration_secs: Span::new(2.0, 5.0),
                delay_secs: Span::new(0.0, 2.0),
                drift_px: 0.0,
                color: Rgba8::hex(0x8D68AA),
            },
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed range `[lo, hi]` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub const fn fixed(v: f64) -> Self {
        Self { lo: v, hi: v }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }

    fn validate(&self, what: &str) -> ScrollResult<()> {
        if !(self.lo.is_finite() && self.hi.is_finite()) || self.lo > self.hi {
            return Err(ScrollError::validation(format!(
                "{what} range [{}, {}] is invalid",
                self.lo, self.hi
            )));
        }
        Ok(())
    }

    fn sample(&self, rng: &mut impl RandomSource) -> f64 {
        rng.range(self.lo, self.hi)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub count: usize,
    pub size_px: Span,
    pub duration_secs: Span,
    pub delay_secs: Span,
    /// Peak sideways sway; each particle scales it by `sin(id)`.
    pub drift_px: f64,
    pub color: Rgba8,
}

impl FieldSpec {
    pub fn validate(&self) -> ScrollResult<()> {
        self.size_px.validate("size")?;
        self.duration_secs.validate("duration")?;
        self.delay_secs.validate("delay")?;
        if self.duration_secs.lo <= 0.0 {
            return Err(ScrollError::validation("particle duration must be > 0"));
        }
        if self.delay_secs.lo < 0.0 || self.size_px.lo < 0.0 {
            return Err(ScrollError::validation(
                "particle delay and size must be non-negative",
            ));
        }
        if !self.drift_px.is_finite() {
            return Err(ScrollError::validation("particle drift must be finite"));
        }
        Ok(())
    }
}

/// Animated offsets of one particle relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Offset in percent of the container.
    pub shift: Vec2,
    /// Offset in pixels.
    pub drift: Vec2,
    pub opacity: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            shift: Vec2::ZERO,
            drift: Vec2::ZERO,
            opacity: 1.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            shift: <Vec2 as Lerp>::lerp(&a.shift, &b.shift, t),
            drift: <Vec2 as Lerp>::lerp(&a.drift, &b.drift, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            rotate: <f64 as Lerp>::lerp(&a.rotate, &b.rotate, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    pub id: usize,
    /// Resting position in percent of the container, both axes in `[0, 100]`.
    pub origin: Point,
    pub size_px: f64,
    pub motion: LoopedTrack<Pose>,
}

/// A particle resolved at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleState {
    pub id: usize,
    /// Percent of the container.
    pub center: Point,
    /// Extra pixel offset applied after `center` is resolved.
    pub drift: Vec2,
    pub radius_px: f64,
    pub opacity: f64,
    pub rotate: f64,
}

impl ParticleState {
    pub fn position_in(&self, width: f64, height: f64) -> Point {
        Point::new(
            self.center.x / 100.0 * width + self.drift.x,
            self.center.y / 100.0 * height + self.drift.y,
        )
    }
}

impl Particle {
    pub fn sample(&self, t_secs: f64) -> ParticleState {
        let pose = self.motion.sample(t_secs);
        ParticleState {
            id: self.id,
            center: self.origin + pose.shift,
            drift: pose.drift,
            radius_px: self.size_px * 0.5 * pose.scale,
            opacity: pose.opacity.clamp(0.0, 1.0),
            rotate: pose.rotate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleField {
    pub spec: FieldSpec,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Deterministic field for `seed`; each kind draws from its own stream.
    pub fn generate(spec: FieldSpec, seed: u64) -> ScrollResult<Self> {
        let mut rng = Rng64::new(derive_seed(seed, spec.kind.name()));
        Self::generate_with(spec, &mut rng)
    }

    #[tracing::instrument(level = "debug", skip(spec, rng), fields(kind = %spec.kind, count = spec.count))]
    pub fn generate_with(spec: FieldSpec, rng: &mut impl RandomSource) -> ScrollResult<Self> {
        spec.validate()?;
        let mut particles = Vec::with_capacity(spec.count);
        for id in 0..spec.count {
            let x = rng.range(0.0, 100.0);
            let y = rng.range(0.0, 100.0);
            let size_px = spec.size_px.sample(rng);
            let duration = spec.duration_secs.sample(rng);
            let delay = spec.delay_secs.sample(rng);

            let (origin, keys, ease) = motion_keys(&spec, id, x, y);
            let (inputs, outputs): (Vec<f64>, Vec<Pose>) = keys.into_iter().unzip();
            let table = BreakpointTable::new(inputs, outputs)?.with_ease(ease);
            let motion = LoopedTrack::new(table, duration)?.delay(delay);
            particles.push(Particle {
                id,
                origin,
                size_px,
                motion,
            });
        }
        Ok(Self { spec, particles })
    }

    pub fn preset(kind: FieldKind, seed: u64) -> ScrollResult<Self> {
        Self::generate(kind.preset(), seed)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// All particles at `t_secs`, in id order.
    pub fn sample(&self, t_secs: f64) -> Vec<ParticleState> {
        self.particles.par_iter().map(|p| p.sample(t_secs)).collect()
    }
}

/// Origin and phase keyframes for one particle of `spec.kind`.
fn motion_keys(spec: &FieldSpec, id: usize, x: f64, y: f64) -> (Point, Vec<(f64, Pose)>, Ease) {
    let sway = (id as f64).sin() * spec.drift_px;
    let rest = Pose::default();
    match spec.kind {
        FieldKind::Starfield => (
            Point::new(x, y),
            vec![
                (0.0, Pose { opacity: 0.2, ..rest }),
                (0.5, Pose { opacity: 0.8, scale: 1.5, ..rest }),
                (1.0, Pose { opacity: 0.2, ..rest }),
            ],
            Ease::EASE_IN_OUT,
        ),
        // Launched from just below the container, rising 1.2 heights.
        FieldKind::Embers => (
            Point::new(x, 100.0),
            vec![
                (0.0, Pose { shift: Vec2::new(0.0, 5.0), opacity: 0.8, ..rest }),
                (
                    1.0,
                    Pose {
                        shift: Vec2::new(0.0, 5.0 - 120.0),
                        drift: Vec2::new(sway, 0.0),
                        opacity: 0.0,
                        scale: 0.5,
                        ..rest
                    },
                ),
            ],
            Ease::EASE_OUT,
        ),
        FieldKind::Leaves => (
            Point::new(x, 0.0),
            vec![
                (0.0, Pose { shift: Vec2::new(0.0, -10.0), opacity: 0.3, ..rest }),
                (
                    1.0,
                    Pose {
                        shift: Vec2::new(0.0, 110.0),
                        drift: Vec2::new(sway, 0.0),
                        opacity: 0.3,
                        rotate: 360.0,
                        ..rest
                    },
                ),
            ],
            Ease::Linear,
        ),
        FieldKind::Nodes => (
            Point::new(x, y),
            vec![
                (0.0, Pose { opacity: 0.0, ..rest }),
                (0.5, Pose { opacity: 1.0, scale: 2.0, ..rest }),
                (1.0, Pose { opacity: 0.0, ..rest }),
            ],
            Ease::EASE_IN_OUT,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
