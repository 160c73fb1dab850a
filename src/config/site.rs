use std::collections::BTreeMap;

use crate::{
    config::SiteConfig,
    foundation::{
        core::Viewport,
        error::{ScrollError, ScrollResult},
    },
    scroll::source::{ScrollEvent, ScrollHub, ScrollSource, SourceId},
    sections::{Section, SectionKind, home::manifesto_current_line},
    timeline::animator::{Driver, TimelineFrame},
};

#[derive(Clone, Debug)]
struct Mounted {
    section: Section,
    source: SourceId,
}

/// Every configured section wired to a shared scroll hub.
#[derive(Clone, Debug)]
pub struct Site {
    hub: ScrollHub,
    mounted: Vec<Mounted>,
}

/// One section's sampled state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionFrame {
    pub section: SectionKind,
    pub progress: f64,
    pub frame: TimelineFrame,
    pub css: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteFrame {
    pub scroll_y: f64,
    pub sections: Vec<SectionFrame>,
}

impl SiteFrame {
    pub fn section(&self, kind: SectionKind) -> Option<&SectionFrame> {
        self.sections.iter().find(|s| s.section == kind)
    }
}

impl Site {
    pub const MAX_SETTLE_SECS: f64 = 600.0;

    pub fn from_config(cfg: &SiteConfig) -> ScrollResult<Self> {
        cfg.validate()?;
        let mut hub = ScrollHub::new(cfg.viewport, cfg.document_height);
        let mut mounted = Vec::with_capacity(cfg.sections.len());
        for m in &cfg.sections {
            let section = m.section.build()?;
            let window = m.window.unwrap_or(section.window);
            let mut source = ScrollSource::new(m.region, window);
            if cfg.smoothing {
                if let Some(spring) = section.smoothing {
                    source = source.smoothed(spring);
                }
            }
            let id = hub.mount_source(source);
            tracing::debug!(section = %m.section, ?id, "mounted section");
            mounted.push(Mounted {
                section,
                source: id,
            });
        }
        Ok(Self { hub, mounted })
    }

    pub fn hub(&self) -> &ScrollHub {
        &self.hub
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.mounted.iter().map(|m| &m.section)
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.hub.dispatch(ScrollEvent::Scroll { y });
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.hub.dispatch(ScrollEvent::Resize { viewport });
    }

    /// Advance smoothed sources by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.hub.tick(dt);
    }

    /// Tick in fixed steps for up to `secs`, stopping early once every
    /// spring is at rest. Simulated time is capped at [`Self::MAX_SETTLE_SECS`].
    pub fn settle(&mut self, secs: f64) -> ScrollResult<()> {
        const STEP: f64 = 1.0 / 60.0;
        if !secs.is_finite() || secs < 0.0 {
            return Err(ScrollError::validation(format!(
                "settle time must be finite and >= 0, got {secs}"
            )));
        }
        let secs = secs.min(Self::MAX_SETTLE_SECS);
        let steps = (secs / STEP).ceil() as u64;
        let mut left = secs;
        for _ in 0..steps {
            if self.hub.is_settled() {
                break;
            }
            self.tick(STEP.min(left));
            left -= STEP;
        }
        Ok(())
    }

    pub fn progress(&self, kind: SectionKind) -> Option<f64> {
        self.mounted
            .iter()
            .find(|m| m.section.kind == kind)
            .map(|m| self.hub.progress(m.source))
    }

    /// Unsmoothed progress of a mounted section.
    pub fn raw_progress(&self, kind: SectionKind) -> Option<f64> {
        self.mounted
            .iter()
            .find(|m| m.section.kind == kind)
            .map(|m| self.hub.raw_progress(m.source))
    }

    /// Manifesto line reached, if the manifesto is mounted.
    pub fn manifesto_line(&self) -> Option<usize> {
        self.raw_progress(SectionKind::Manifesto)
            .map(manifesto_current_line)
    }

    /// Sample every mounted section at the current scroll state.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn sample(&self) -> SiteFrame {
        let scroll_y = self.hub.metrics().scroll_y;
        let sections = self
            .mounted
            .iter()
            .map(|m| {
                let progress = self.hub.progress(m.source);
                let input = match m.section.animator.driver {
                    Driver::Progress => progress,
                    Driver::ScrollPx => scroll_y,
                };
                let frame = m.section.animator.sample(input);
                SectionFrame {
                    section: m.section.kind,
                    progress,
                    css: frame.css(),
                    frame,
                }
            })
            .collect();
        SiteFrame { scroll_y, sections }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
