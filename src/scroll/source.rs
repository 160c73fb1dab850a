use std::collections::BTreeMap;

use crate::{
    animation::spring::{SpringConfig, SpringFollower},
    foundation::{
        core::Viewport,
        error::{ScrollError, ScrollResult},
    },
    scroll::offset::ScrollWindow,
};

/// What a progress source tracks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRegion {
    /// The whole document: 0 at the top, 1 when scrolled to the bottom.
    Page,
    /// A box in document coordinates.
    Element { top: f64, height: f64 },
}

/// Current scroll geometry of the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            viewport,
            document_height,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

/// Normalized `[0, 1]` progress of `region` through `window` at the given metrics.
pub fn compute_progress(region: &ScrollRegion, window: &ScrollWindow, m: &ScrollMetrics) -> f64 {
    let (top, height, window) = match *region {
        ScrollRegion::Page => (0.0, m.document_height, ScrollWindow::PINNED),
        ScrollRegion::Element { top, height } => (top, height.max(0.0), *window),
    };
    let vh = m.viewport.height;
    let at = |o: crate::scroll::offset::ScrollOffset| {
        top + o.target.resolve(height) - o.container.resolve(vh)
    };
    let start = at(window.start);
    let end = at(window.end);
    let y = m.scroll_y;

    if y.is_nan() {
        return 0.0;
    }
    let span = end - start;
    if span.abs() < f64::EPSILON {
        return if y >= end { 1.0 } else { 0.0 };
    }
    ((y - start) / span).clamp(0.0, 1.0)
}

/// One subscribed progress signal.
#[derive(Clone, Debug)]
pub struct ScrollSource {
    region: Option<ScrollRegion>,
    window: ScrollWindow,
    raw: f64,
    smoothing: Option<SpringFollower>,
}

impl ScrollSource {
    pub fn new(region: Option<ScrollRegion>, window: ScrollWindow) -> Self {
        Self {
            region,
            window,
            raw: 0.0,
            smoothing: None,
        }
    }

    pub fn smoothed(mut self, config: SpringConfig) -> Self {
        self.smoothing = Some(SpringFollower::new(config, self.raw));
        self
    }

    pub fn region(&self) -> Option<ScrollRegion> {
        self.region
    }

    pub fn window(&self) -> ScrollWindow {
        self.window
    }

    /// Unsmoothed progress.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Progress as consumers should see it (smoothed when configured).
    pub fn progress(&self) -> f64 {
        match &self.smoothing {
            Some(spring) => spring.value().clamp(0.0, 1.0),
            None => self.raw,
        }
    }

    /// True once any smoothing spring has come to rest on its target.
    pub fn is_settled(&self) -> bool {
        self.smoothing.as_ref().is_none_or(SpringFollower::is_at_rest)
    }

    fn recompute(&mut self, metrics: &ScrollMetrics) {
        // A region that never mounted keeps reporting its initial 0.
        let Some(region) = &self.region else {
            return;
        };
        self.raw = compute_progress(region, &self.window, metrics);
        if let Some(spring) = &mut self.smoothing {
            spring.set_target(self.raw);
        }
    }

    fn tick(&mut self, dt: f64) {
        if let Some(spring) = &mut self.smoothing {
            spring.step(dt);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollEvent {
    Scroll { y: f64 },
    Resize { viewport: Viewport },
    DocumentResize { height: f64 },
}

/// Owns the page scroll metrics and every mounted progress source.
///
/// Sources are recomputed on each dispatched event. Unmounting drops the
/// source so later events no longer touch it.
#[derive(Clone, Debug)]
pub struct ScrollHub {
    metrics: ScrollMetrics,
    sources: BTreeMap<SourceId, ScrollSource>,
    next_id: u64,
}

impl ScrollHub {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            metrics: ScrollMetrics::new(viewport, document_height),
            sources: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Subscribe a source. `None` registers a source whose region is not laid out yet.
    pub fn mount(&mut self, region: Option<ScrollRegion>, window: ScrollWindow) -> SourceId {
        self.mount_source(ScrollSource::new(region, window))
    }

    pub fn mount_smoothed(
        &mut self,
        region: Option<ScrollRegion>,
        window: ScrollWindow,
        spring: SpringConfig,
    ) -> SourceId {
        self.mount_source(ScrollSource::new(region, window).smoothed(spring))
    }

    pub fn mount_source(&mut self, mut source: ScrollSource) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;
        source.recompute(&self.metrics);
        if let Some(spring) = &mut source.smoothing {
            spring.jump(source.raw);
        }
        tracing::debug!(id = id.0, region = ?source.region, "mount scroll source");
        self.sources.insert(id, source);
        id
    }

    /// Provide (or replace) the region for a mounted source.
    pub fn attach(&mut self, id: SourceId, region: ScrollRegion) -> ScrollResult<()> {
        let source = self
            .sources
            .get_mut(&id)
            .ok_or_else(|| ScrollError::validation(format!("scroll source {} is not mounted", id.0)))?;
        source.region = Some(region);
        source.recompute(&self.metrics);
        Ok(())
    }

    pub fn unmount(&mut self, id: SourceId) -> bool {
        let removed = self.sources.remove(&id).is_some();
        if removed {
            tracing::debug!(id = id.0, "unmount scroll source");
        }
        removed
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dispatch(&mut self, event: ScrollEvent) {
        match event {
            ScrollEvent::Scroll { y } => self.metrics.scroll_y = y,
            ScrollEvent::Resize { viewport } => self.metrics.viewport = viewport,
            ScrollEvent::DocumentResize { height } => self.metrics.document_height = height,
        }
        for source in self.sources.values_mut() {
            source.recompute(&self.metrics);
        }
    }

    /// Advance smoothing springs by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        for source in self.sources.values_mut() {
            source.tick(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.sources.values().all(ScrollSource::is_settled)
    }

    /// Consumer-facing progress; 0 for ids that are not mounted.
    pub fn progress(&self, id: SourceId) -> f64 {
        self.sources.get(&id).map_or(0.0, ScrollSource::progress)
    }

    pub fn raw_progress(&self, id: SourceId) -> f64 {
        self.sources.get(&id).map_or(0.0, ScrollSource::raw)
    }

    pub fn source(&self, id: SourceId) -> Option<&ScrollSource> {
        self.sources.get(&id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/source.rs"]
mod tests;
