//! Scrollreel is a scroll-timeline engine for animated marketing sites.
//!
//! It turns page scroll state into per-element style values (numbers, colours,
//! lengths, CSS declarations) that a view layer binds to the DOM. Nothing here
//! touches a browser: every stage is a pure function of its inputs, so whole
//! pages can be sampled, diffed and snapshotted headlessly.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: [`ScrollHub`] tracks page metrics and derives a `[0, 1]`
//!    progress per mounted [`ScrollSource`], optionally spring-smoothed.
//! 2. **Interpolate**: a [`BreakpointTable`] maps progress (or raw pixels) to a
//!    [`ChannelValue`] through piecewise, optionally eased segments.
//! 3. **Animate**: an [`Animator`] groups channel bindings for a section and
//!    samples them into a [`TimelineFrame`], renderable as inline CSS.
//! 4. **Decorate**: seeded [`ParticleField`]s loop independently of scroll and
//!    can be rasterised to PNG for visual checks.
//!
//! Interaction state (contact form, preloader, navigation, pointer effects) is
//! modelled as small explicit state machines driven by `tick(now)` calls.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod interaction;
mod particles;
mod scroll;
mod sections;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interp::BreakpointTable;
pub use animation::lerp::Lerp;
pub use animation::looped::{LoopMode, LoopedTrack};
pub use animation::spring::{SpringConfig, SpringFollower};
pub use animation::value::{ChannelValue, LengthUnit};
pub use config::site::{SectionFrame, Site, SiteFrame};
pub use config::{SectionMount, SiteConfig};
pub use foundation::core::{Canvas, Point, Rect, Rgba8, Vec2, Viewport, fmt_css_number};
pub use foundation::error::{ScrollError, ScrollResult};
pub use foundation::math::{RandomSource, Rng64};
pub use interaction::chrome::{MenuState, MobileMenu, NavigationBar};
pub use interaction::counter::AnimatedCounter;
pub use interaction::float::FloatingCard;
pub use interaction::form::{
    ContactForm, FormField, FormFields, FormState, FormSubmitter, SimulatedSubmitter,
    SubmitOutcome, Submission,
};
pub use interaction::pointer::{
    CustomCursor, FocusFlag, HeroTilt, HoverFlag, MAGNETIC_STRENGTH, MagneticButton,
    magnetic_offset, tilt_target,
};
pub use interaction::preloader::{Preloader, PreloaderPhase};
pub use particles::field::{
    FieldKind, FieldSpec, Particle, ParticleField, ParticleState, Pose, Span,
};
pub use particles::raster::{FrameRGBA, rasterize_field};
pub use scroll::offset::{Edge, ScrollOffset, ScrollWindow};
pub use scroll::source::{
    ScrollEvent, ScrollHub, ScrollMetrics, ScrollRegion, ScrollSource, SourceId, compute_progress,
};
pub use sections::home::{
    MANIFESTO_LINES, NAV_FADE_PX, NAV_SCROLLED_PX, manifesto_current_line, manifesto_dots,
    manifesto_line_tables,
};
pub use sections::parallax::ParallaxDirection;
pub use sections::sectors::{
    Sector, SectorIcon, SectorId, illustration_progress, prism_card, sectors,
};
pub use sections::{Section, SectionKind};
pub use timeline::animator::{Animator, AnimatorBuilder, Driver, TimelineFrame};
pub use timeline::channel::{Channel, ChannelBinding};
pub use timeline::style::ElementStyle;

/// Reusable parallax animators.
pub mod parallax {
    pub use crate::sections::parallax::{layer, parallax, scene_layer, wrapper};
}
