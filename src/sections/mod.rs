use std::fmt;

use crate::{
    animation::spring::SpringConfig,
    foundation::error::{ScrollError, ScrollResult},
    scroll::offset::ScrollWindow,
    timeline::animator::{Animator, Driver, TimelineFrame},
};

pub(crate) mod home;
pub(crate) mod parallax;
pub(crate) mod sectors;

/// Every page section with scroll-linked animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Navigation,
    ScrollIndicator,
    Hero,
    Manifesto,
    Infrastructure,
    Esg,
    Systems,
    Skills,
    Safety,
    InfraQPreview,
    Stats,
    Projects,
    Contact,
    InfraQHero,
}

impl SectionKind {
    pub const ALL: [Self; 14] = [
        Self::Navigation,
        Self::ScrollIndicator,
        Self::Hero,
        Self::Manifesto,
        Self::Infrastructure,
        Self::Esg,
        Self::Systems,
        Self::Skills,
        Self::Safety,
        Self::InfraQPreview,
        Self::Stats,
        Self::Projects,
        Self::Contact,
        Self::InfraQHero,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::ScrollIndicator => "scroll_indicator",
            Self::Hero => "hero",
            Self::Manifesto => "manifesto",
            Self::Infrastructure => "infrastructure",
            Self::Esg => "esg",
            Self::Systems => "systems",
            Self::Skills => "skills",
            Self::Safety => "safety",
            Self::InfraQPreview => "infra_q_preview",
            Self::Stats => "stats",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::InfraQHero => "infra_q_hero",
        }
    }

    pub fn from_name(name: &str) -> ScrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ScrollError::validation(format!("unknown section '{name}'")))
    }

    /// Build this section's timeline configuration.
    pub fn build(self) -> ScrollResult<Section> {
        match self {
            Self::Navigation => home::navigation(),
            Self::ScrollIndicator => home::scroll_indicator(),
            Self::Hero => home::hero(),
            Self::Manifesto => home::manifesto(),
            Self::Infrastructure => sectors::infrastructure(),
            Self::Esg => sectors::esg(),
            Self::Systems => sectors::systems(),
            Self::Skills => sectors::skills(),
            Self::Safety => sectors::safety(),
            Self::InfraQPreview => home::infra_q_preview(),
            Self::Stats => home::stats(),
            Self::Projects => home::projects(),
            Self::Contact => home::contact(),
            Self::InfraQHero => home::infra_q_hero(),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A section's animator plus how its progress signal is produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub window: ScrollWindow,
    pub smoothing: Option<SpringConfig>,
    pub animator: Animator,
}

impl Section {
    pub(crate) fn new(kind: SectionKind, window: ScrollWindow, animator: Animator) -> Self {
        Self {
            kind,
            window,
            smoothing: None,
            animator,
        }
    }

    pub(crate) fn smoothed(mut self, spring: SpringConfig) -> Self {
        self.smoothing = Some(spring);
        self
    }

    /// `steps + 1` evenly spaced frames across the animator's input domain.
    pub fn curve(&self, steps: usize) -> ScrollResult<Vec<TimelineFrame>> {
        if steps == 0 {
            return Err(ScrollError::validation("curve needs at least one step"));
        }
        let (lo, hi) = match self.animator.driver {
            Driver::Progress => (0.0, 1.0),
            Driver::ScrollPx => self.animator.domain(),
        };
        Ok((0..=steps)
            .map(|i| {
                let input = lo + (hi - lo) * i as f64 / steps as f64;
                self.animator.sample(input)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/mod.rs"]
mod tests;
