use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::Viewport,
        error::{ScrollError, ScrollResult},
    },
    scroll::{offset::ScrollWindow, source::ScrollRegion},
    sections::SectionKind,
};

pub(crate) mod site;

/// Where one section sits on the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionMount {
    pub section: SectionKind,
    /// Tracked region; omitted means the region is not laid out yet and the
    /// section reports progress 0.
    #[serde(default)]
    pub region: Option<ScrollRegion>,
    /// Overrides the section's own window.
    #[serde(default)]
    pub window: Option<ScrollWindow>,
}

impl SectionMount {
    pub fn element(section: SectionKind, top: f64, height: f64) -> Self {
        Self {
            section,
            region: Some(ScrollRegion::Element { top, height }),
            window: None,
        }
    }

    pub fn page(section: SectionKind) -> Self {
        Self {
            section,
            region: Some(ScrollRegion::Page),
            window: None,
        }
    }
}

/// Page geometry plus the sections mounted on it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub viewport: Viewport,
    pub document_height: f64,
    /// Base seed for decorative randomness.
    #[serde(default)]
    pub seed: u64,
    /// Spring-smooth the sections that ask for it.
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
    pub sections: Vec<SectionMount>,
}

fn default_smoothing() -> bool {
    true
}

impl SiteConfig {
    pub fn from_path(path: &Path) -> ScrollResult<Self> {
        let f = File::open(path).map_err(|e| {
            ScrollError::from(
                anyhow::Error::new(e).context(format!("open site config '{}'", path.display())),
            )
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json(json: &str) -> ScrollResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ScrollResult<()> {
        Viewport::new(self.viewport.width, self.viewport.height)?;
        if !(self.document_height.is_finite() && self.document_height > 0.0) {
            return Err(ScrollError::validation(format!(
                "document_height must be finite and > 0, got {}",
                self.document_height
            )));
        }

        let mut seen = BTreeSet::new();
        for m in &self.sections {
            if !seen.insert(m.section) {
                return Err(ScrollError::validation(format!(
                    "section '{}' is mounted twice",
                    m.section
                )));
            }
            if let Some(ScrollRegion::Element { top, height }) = m.region {
                if !top.is_finite() || !height.is_finite() || height < 0.0 {
                    return Err(ScrollError::validation(format!(
                        "section '{}' has an invalid region (top {top}, height {height})",
                        m.section
                    )));
                }
            }
        }
        Ok(())
    }

    /// The homepage at a 1440x900 viewport, in page order.
    pub fn homepage() -> Self {
        let vh = 900.0;
        let mut sections = vec![
            SectionMount::page(SectionKind::Navigation),
            SectionMount::page(SectionKind::ScrollIndicator),
        ];
        let layout = [
            (SectionKind::Hero, vh),
            (SectionKind::Manifesto, 4.0 * vh),
            (SectionKind::Stats, vh),
            (SectionKind::Infrastructure, vh),
            (SectionKind::Esg, vh),
            (SectionKind::Systems, vh),
            (SectionKind::Skills, vh),
            (SectionKind::Safety, vh),
            (SectionKind::Projects, 3.0 * vh),
            (SectionKind::InfraQPreview, vh),
        ];
        let mut top = 0.0;
        for (kind, height) in layout {
            sections.push(SectionMount::element(kind, top, height));
            top += height;
        }
        // Testimonials sit between the preview and contact.
        top += vh;
        sections.push(SectionMount::element(SectionKind::Contact, top, vh));
        top += vh;

        Self {
            viewport: Viewport::default(),
            document_height: top + 400.0,
            seed: 0,
            smoothing: true,
            sections,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;
