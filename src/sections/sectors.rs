//! The five sector showcases and their shared presentation data.

use std::fmt;

use crate::{
    animation::interp::BreakpointTable,
    foundation::{
        core::Rgba8,
        error::{ScrollError, ScrollResult},
    },
    scroll::offset::ScrollWindow,
    sections::{Section, SectionKind},
    timeline::{
        animator::{Animator, AnimatorBuilder},
        channel::Channel,
    },
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectorId {
    Infra,
    Esg,
    Systems,
    Skills,
    Safety,
}

impl SectorId {
    pub const ALL: [Self; 5] = [
        Self::Infra,
        Self::Esg,
        Self::Systems,
        Self::Skills,
        Self::Safety,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Infra => "infra",
            Self::Esg => "esg",
            Self::Systems => "systems",
            Self::Skills => "skills",
            Self::Safety => "safety",
        }
    }

    pub fn parse(s: &str) -> ScrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScrollError::validation(format!("unknown sector '{s}'")))
    }

    /// Three hover-gradient stops, dark to light.
    pub fn gradient(self) -> [Rgba8; 3] {
        match self {
            Self::Infra => [
                Rgba8::hex(0x0A0F3C),
                Rgba8::hex(0x2C5DA9),
                Rgba8::hex(0xC8DAF9),
            ],
            Self::Esg => [
                Rgba8::hex(0x33644A),
                Rgba8::hex(0x528940),
                Rgba8::hex(0xA1DDAA),
            ],
            Self::Systems => [
                Rgba8::hex(0x3A294F),
                Rgba8::hex(0x8D68AA),
                Rgba8::hex(0xF4D6FF),
            ],
            Self::Skills => [
                Rgba8::hex(0x844212),
                Rgba8::hex(0xEC954E),
                Rgba8::hex(0xFFD9B2),
            ],
            Self::Safety => [
                Rgba8::hex(0xA20505),
                Rgba8::hex(0xD40114),
                Rgba8::hex(0xFF7474),
            ],
        }
    }

    pub fn gradient_css(self) -> String {
        let [a, b, c] = self.gradient();
        format!(
            "linear-gradient(135deg, {}, {}, {})",
            a.to_hex(),
            b.to_hex(),
            c.to_hex()
        )
    }

    pub fn section(self) -> SectionKind {
        match self {
            Self::Infra => SectionKind::Infrastructure,
            Self::Esg => SectionKind::Esg,
            Self::Systems => SectionKind::Systems,
            Self::Skills => SectionKind::Skills,
            Self::Safety => SectionKind::Safety,
        }
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SectorIcon {
    Building2,
    Leaf,
    Cpu,
    GraduationCap,
    Shield,
}

impl SectorIcon {
    /// Unknown names fall back to `Building2`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Leaf" => Self::Leaf,
            "Cpu" => Self::Cpu,
            "GraduationCap" => Self::GraduationCap,
            "Shield" => Self::Shield,
            _ => Self::Building2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub icon: String,
}

impl Sector {
    pub fn icon(&self) -> SectorIcon {
        SectorIcon::from_name(&self.icon)
    }
}

pub fn sectors() -> Vec<Sector> {
    let row = |id, name: &str, description: &str, icon: &str| Sector {
        id,
        name: name.to_owned(),
        tagline: "Winning Expertise".to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
    };
    vec![
        row(
            SectorId::Infra,
            "Infrastructure",
            "Building the foundations of tomorrow",
            "Building2",
        ),
        row(
            SectorId::Esg,
            "ESG",
            "Sustainable solutions for a greener future",
            "Leaf",
        ),
        row(
            SectorId::Systems,
            "Systems",
            "Integrated engineering excellence",
            "Cpu",
        ),
        row(
            SectorId::Skills,
            "Skills",
            "Empowering the next generation",
            "GraduationCap",
        ),
        row(
            SectorId::Safety,
            "Safety",
            "Protecting what matters most",
            "Shield",
        ),
    ]
}

/// Sticky prism card for one sector: drifts up through the viewport.
pub fn prism_card(id: SectorId) -> ScrollResult<Animator> {
    AnimatorBuilder::new(format!("prism_{id}"))
        .scalar("card", Channel::TranslateY, &[0.0, 1.0], &[100.0, -100.0])?
        .scalar(
            "card",
            Channel::Opacity,
            &[0.0, 0.3, 0.7, 1.0],
            &[0.0, 1.0, 1.0, 0.0],
        )?
        .build()
}

fn watermark(b: AnimatorBuilder, peak: f64) -> ScrollResult<AnimatorBuilder> {
    b.scalar(
        "watermark",
        Channel::Opacity,
        &[0.3, 0.5, 0.7],
        &[0.0, peak, 0.0],
    )
}

/// Illustration progress shared by the infrastructure and ESG drawings:
/// section progress `0.1..0.45` remapped onto `0..1`.
pub fn illustration_progress() -> ScrollResult<BreakpointTable<f64>> {
    BreakpointTable::new(vec![0.1, 0.45], vec![0.0, 1.0])
}

/// Corner construction marks, staggered by 0.05 on illustration progress.
fn corner_marks(
    mut b: AnimatorBuilder,
    drawing: &BreakpointTable<f64>,
    count: usize,
    group_opacity: f64,
) -> ScrollResult<AnimatorBuilder> {
    b = b.scalar_via(drawing, "corners", Channel::Opacity, &[0.1, 0.3], &[0.0, group_opacity])?;
    for i in 0..count {
        let lo = 0.1 + 0.05 * i as f64;
        b = b.scalar_via(
            drawing,
            format!("corner-{i}"),
            Channel::PathLength,
            &[lo, lo + 0.2],
            &[0.0, 1.0],
        )?;
    }
    Ok(b)
}

pub fn infrastructure() -> ScrollResult<Section> {
    let drawing = illustration_progress()?;
    let mut b = AnimatorBuilder::new("infrastructure")
        .scalar(
            "grid",
            Channel::Opacity,
            &[0.0, 0.2, 0.6, 1.0],
            &[0.0, 1.0, 1.0, 0.0],
        )?
        .scalar("building", Channel::PathLength, &[0.1, 0.45], &[0.0, 1.0])?
        .scalar("beam-0", Channel::ScaleX, &[0.1, 0.4], &[0.0, 1.0])?
        .scalar("beam-1", Channel::ScaleX, &[0.2, 0.5], &[0.0, 1.0])?;
    b = watermark(b, 0.1)?;

    b = b
        .scalar_via(&drawing, "blueprint", Channel::Opacity, &[0.0, 0.2], &[0.0, 0.15])?
        .scalar_via(&drawing, "guides", Channel::Opacity, &[0.05, 0.25], &[0.0, 0.3])?
        .scalar_via(&drawing, "flange-top", Channel::ScaleX, &[0.15, 0.35], &[0.0, 1.0])?
        .scalar_via(&drawing, "web", Channel::ScaleY, &[0.2, 0.45], &[0.0, 1.0])?
        .scalar_via(&drawing, "flange-bottom", Channel::ScaleX, &[0.3, 0.5], &[0.0, 1.0])?
        .scalar_via(&drawing, "rivets", Channel::Opacity, &[0.4, 0.55], &[0.0, 0.6])?
        .scalar_via(&drawing, "compass", Channel::Opacity, &[0.3, 0.5], &[0.0, 0.4])?
        .scalar_via(&drawing, "dimension-width", Channel::Opacity, &[0.35, 0.5], &[0.0, 0.8])?
        .scalar_via(&drawing, "dimension-height", Channel::Opacity, &[0.4, 0.55], &[0.0, 0.8])?
        .scalar_via(&drawing, "loads", Channel::Opacity, &[0.45, 0.6], &[0.0, 0.7])?
        .scalar_via(&drawing, "supports", Channel::Opacity, &[0.5, 0.65], &[0.0, 0.7])?
        .scalar_via(&drawing, "label", Channel::Opacity, &[0.5, 0.65], &[0.0, 0.9])?
        .scalar_via(&drawing, "stress", Channel::Opacity, &[0.6, 0.75], &[0.0, 0.4])?;
    for i in 0..3 {
        let lo = 0.1 + 0.05 * i as f64;
        b = b.scalar_via(
            &drawing,
            format!("guide-{i}"),
            Channel::PathLength,
            &[lo, lo + 0.25],
            &[0.0, 1.0],
        )?;
    }
    b = corner_marks(b, &drawing, 4, 0.5)?;

    Ok(Section::new(
        SectionKind::Infrastructure,
        ScrollWindow::THROUGH,
        b.build()?,
    ))
}

pub fn esg() -> ScrollResult<Section> {
    let growth = illustration_progress()?;
    let mut b = AnimatorBuilder::new("esg")
        .scalar("tree", Channel::PathLength, &[0.1, 0.45], &[0.0, 1.0])?
        .scalar_via(&growth, "blueprint", Channel::Opacity, &[0.0, 0.2], &[0.0, 0.1])?
        .scalar_via(&growth, "outer-ring", Channel::Opacity, &[0.05, 0.2], &[0.0, 0.3])?
        .scalar_via(&growth, "beacon", Channel::Opacity, &[0.25, 0.35], &[0.0, 1.0])?
        .scalar_via(&growth, "canopy", Channel::Opacity, &[0.35, 0.5], &[0.0, 1.0])?
        .scalar_via(&growth, "canopy", Channel::Scale, &[0.35, 0.55], &[0.0, 1.0])?
        .scalar_via(&growth, "vein", Channel::PathLength, &[0.45, 0.6], &[0.0, 1.0])?
        .scalar_via(&growth, "flows", Channel::Opacity, &[0.45, 0.6], &[0.0, 0.6])?
        .scalar_via(&growth, "metrics", Channel::Opacity, &[0.5, 0.65], &[0.0, 0.8])?
        .scalar_via(&growth, "label", Channel::Opacity, &[0.5, 0.65], &[0.0, 0.9])?;
    b = watermark(b, 0.08)?;
    // Environmental, social and governance rings draw in turn.
    for i in 0..3 {
        let lo = 0.1 + 0.05 * i as f64;
        let fill = 0.3 + 0.05 * i as f64;
        let label = 0.4 + 0.05 * i as f64;
        b = b
            .scalar_via(
                &growth,
                format!("root-{i}"),
                Channel::PathLength,
                &[lo, lo + 0.25],
                &[0.0, 1.0],
            )?
            .scalar_via(
                &growth,
                format!("root-fill-{i}"),
                Channel::Opacity,
                &[fill, fill + 0.15],
                &[0.0, 1.0],
            )?
            .scalar_via(
                &growth,
                format!("root-label-{i}"),
                Channel::Opacity,
                &[label, label + 0.15],
                &[0.0, 0.8],
            )?;
    }
    b = corner_marks(b, &growth, 4, 0.4)?;

    Ok(Section::new(
        SectionKind::Esg,
        ScrollWindow::THROUGH,
        b.build()?,
    ))
}

pub fn systems() -> ScrollResult<Section> {
    let mut b = watermark(AnimatorBuilder::new("systems"), 0.1)?;
    for i in 0..6 {
        let lo = 0.05 + 0.05 * i as f64;
        b = b.scalar(
            format!("trace-h-{i}"),
            Channel::ScaleX,
            &[lo, lo + 0.15],
            &[0.0, 1.0],
        )?;
    }
    for i in 0..4 {
        let lo = 0.1 + 0.05 * i as f64;
        b = b.scalar(
            format!("trace-v-{i}"),
            Channel::ScaleY,
            &[lo, lo + 0.2],
            &[0.0, 1.0],
        )?;
    }
    Ok(Section::new(
        SectionKind::Systems,
        ScrollWindow::THROUGH,
        b.build()?,
    ))
}

/// Three steps rise in a stagger, then the connector line fades in.
pub fn skills() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("skills")
        .scalar(
            "heading",
            Channel::Opacity,
            &[0.2, 0.5, 0.8],
            &[0.0, 1.0, 0.0],
        )?
        .scalar("step-1", Channel::TranslateY, &[0.0, 0.3], &[100.0, 0.0])?
        .scalar("step-1", Channel::Opacity, &[0.0, 0.2], &[0.0, 1.0])?
        .scalar("step-2", Channel::TranslateY, &[0.1, 0.4], &[150.0, 0.0])?
        .scalar("step-2", Channel::Opacity, &[0.1, 0.3], &[0.0, 1.0])?
        .scalar("step-3", Channel::TranslateY, &[0.2, 0.5], &[200.0, 0.0])?
        .scalar("step-3", Channel::Opacity, &[0.2, 0.4], &[0.0, 1.0])?
        .scalar("connector", Channel::Opacity, &[0.4, 0.6], &[0.0, 0.6])?
        .build()?;
    Ok(Section::new(
        SectionKind::Skills,
        ScrollWindow::THROUGH,
        animator,
    ))
}

pub fn safety() -> ScrollResult<Section> {
    let mut b = AnimatorBuilder::new("safety")
        .scalar(
            "heading",
            Channel::Opacity,
            &[0.2, 0.5, 0.8],
            &[0.0, 1.0, 0.0],
        )?
        .scalar("shield", Channel::PathLength, &[0.1, 0.45], &[0.0, 1.0])?
        .scalar("shield-fill", Channel::Opacity, &[0.2, 0.4], &[0.0, 0.3])?
        .scalar("check", Channel::PathLength, &[0.35, 0.5], &[0.0, 1.0])?;
    for i in 0..5 {
        let lo = 0.4 + 0.02 * i as f64;
        b = b.scalar(
            format!("ring-{i}"),
            Channel::Opacity,
            &[lo, lo + 0.1],
            &[0.0, 0.3],
        )?;
    }
    Ok(Section::new(
        SectionKind::Safety,
        ScrollWindow::THROUGH,
        b.build()?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/sections/sectors.rs"]
mod tests;
