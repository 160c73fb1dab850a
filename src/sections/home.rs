//! Homepage and Infra-Q section timelines.

use crate::{
    animation::{spring::SpringConfig, value::ChannelValue},
    foundation::{core::Rgba8, error::ScrollResult},
    scroll::offset::ScrollWindow,
    sections::{Section, SectionKind},
    timeline::{
        animator::{AnimatorBuilder, Driver},
        channel::Channel,
        style::ElementStyle,
    },
};

/// Scroll distance (px) over which the navigation bar gains its backdrop.
pub const NAV_FADE_PX: f64 = 100.0;
/// Scroll offset (px) past which the navigation bar counts as scrolled.
pub const NAV_SCROLLED_PX: f64 = 50.0;

pub const MANIFESTO_LINES: [&str; 8] = [
    "We don't just build",
    "structures.",
    "We architect",
    "possibilities.",
    "We engineer",
    "dreams.",
    "We CREATE",
    "THE FUTURE.",
];

pub fn navigation() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("navigation")
        .driver(Driver::ScrollPx)
        .values(
            "nav",
            Channel::BackgroundColor,
            &[0.0, NAV_FADE_PX],
            vec![Rgba8::TRANSPARENT, Rgba8::BLACK.with_alpha(0.8)],
        )?
        .scalar("nav", Channel::BackdropBlur, &[0.0, NAV_FADE_PX], &[0.0, 10.0])?
        .build()?;
    Ok(Section::new(
        SectionKind::Navigation,
        ScrollWindow::PINNED,
        animator,
    ))
}

/// Page-wide progress bar, smoothed.
pub fn scroll_indicator() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("scroll_indicator")
        .scalar("bar", Channel::ScaleY, &[0.0, 1.0], &[0.0, 1.0])?
        .scalar("bar-mobile", Channel::ScaleX, &[0.0, 1.0], &[0.0, 1.0])?
        .build()?;
    Ok(Section::new(
        SectionKind::ScrollIndicator,
        ScrollWindow::PINNED,
        animator,
    )
    .smoothed(SpringConfig::SCROLL))
}

pub fn hero() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("hero")
        .scalar("content", Channel::Opacity, &[0.0, 0.5], &[1.0, 0.0])?
        .scalar("content", Channel::Scale, &[0.0, 0.5], &[1.0, 0.8])?
        .scalar("content", Channel::TranslateY, &[0.0, 0.5], &[0.0, 100.0])?
        .build()?;
    Ok(Section::new(SectionKind::Hero, ScrollWindow::EXIT, animator))
}

/// Breakpoints for one manifesto line: `(inputs, outputs)` per channel.
///
/// Each line owns an equal slice of progress; it fades and sharpens in, peaks
/// mid-slice, then recedes. The final line stays on screen.
pub fn manifesto_line_tables(index: usize, total: usize) -> [(Channel, Vec<f64>, Vec<f64>); 4] {
    let seg = 1.0 / total.max(1) as f64;
    let start = index as f64 * seg;
    let peak = start + seg * 0.5;
    let end = start + seg;
    let last = index + 1 == total;
    let pick = |held: f64, out: f64| if last { held } else { out };

    [
        (
            Channel::Opacity,
            vec![start, start + seg * 0.2, peak, end - seg * 0.1, end],
            vec![0.0, 1.0, 1.0, 1.0, pick(1.0, 0.0)],
        ),
        (
            Channel::TranslateY,
            vec![start, start + seg * 0.3, peak, end],
            vec![80.0, 0.0, 0.0, pick(0.0, -50.0)],
        ),
        (
            Channel::Scale,
            vec![start, peak, end],
            vec![0.9, 1.0, pick(1.0, 0.95)],
        ),
        (
            Channel::Blur,
            vec![start, start + seg * 0.2, peak, end - seg * 0.1, end],
            vec![10.0, 0.0, 0.0, 0.0, pick(0.0, 5.0)],
        ),
    ]
}

/// Pinned manifesto: one line per progress slice, driven by smoothed progress.
pub fn manifesto() -> ScrollResult<Section> {
    let total = MANIFESTO_LINES.len();
    let mut b = AnimatorBuilder::new("manifesto")
        .scalar("intro", Channel::Opacity, &[0.0, 0.05], &[0.0, 1.0])?
        .scalar("intro", Channel::TranslateY, &[0.0, 0.05], &[30.0, 0.0])?
        .scalar("hint", Channel::Opacity, &[0.1, 0.2], &[0.0, 1.0])?
        .scalar("quote-mark", Channel::Rotate, &[0.0, 1.0], &[0.0, 360.0])?
        .scalar("quote-mark", Channel::Scale, &[0.0, 0.5, 1.0], &[0.5, 1.0, 0.5])?
        .scalar(
            "quote-mark",
            Channel::Opacity,
            &[0.0, 0.2, 0.8, 1.0],
            &[0.02, 0.05, 0.05, 0.02],
        )?
        .scalar("orb-blue", Channel::TranslateY, &[0.0, 1.0], &[100.0, -100.0])?
        .scalar("orb-blue", Channel::Scale, &[0.0, 0.5, 1.0], &[0.8, 1.2, 0.8])?
        .scalar("orb-violet", Channel::TranslateY, &[0.0, 1.0], &[50.0, -150.0])?
        .scalar("orb-violet", Channel::Scale, &[0.0, 0.5, 1.0], &[1.0, 0.8, 1.2])?
        .scalar("orb-green", Channel::TranslateY, &[0.0, 1.0], &[150.0, -50.0])?
        .scalar("rule-top", Channel::ScaleX, &[0.1, 0.3], &[0.0, 1.0])?
        .scalar(
            "rule-top",
            Channel::Opacity,
            &[0.1, 0.3, 0.7, 0.9],
            &[0.0, 0.5, 0.5, 0.0],
        )?
        .scalar("rule-bottom", Channel::ScaleX, &[0.2, 0.4], &[0.0, 1.0])?
        .scalar(
            "rule-bottom",
            Channel::Opacity,
            &[0.2, 0.4, 0.6, 0.8],
            &[0.0, 0.5, 0.5, 0.0],
        )?
        .scalar("accents-left", Channel::TranslateY, &[0.0, 1.0], &[200.0, -200.0])?
        .scalar("accents-right", Channel::TranslateY, &[0.0, 1.0], &[-100.0, 300.0])?
        .scalar("bracket-top", Channel::Scale, &[0.0, 0.2], &[0.5, 1.0])?
        .scalar("bracket-top", Channel::Opacity, &[0.0, 0.2], &[0.0, 0.5])?
        .scalar("bracket-bottom", Channel::Scale, &[0.8, 1.0], &[0.5, 1.0])?
        .scalar("bracket-bottom", Channel::Opacity, &[0.8, 1.0], &[0.0, 0.5])?
        .values(
            "progress-rail",
            Channel::Height,
            &[0.0, 1.0],
            vec![ChannelValue::percent(0.0), ChannelValue::percent(100.0)],
        )?;

    for i in 0..3 {
        let lo = 0.1 * i as f64;
        let element = format!("square-{i}");
        b = b
            .scalar(
                element.as_str(),
                Channel::Rotate,
                &[0.0, 1.0],
                &[0.0, 180.0 + 60.0 * i as f64],
            )?
            .scalar(element.as_str(), Channel::Opacity, &[lo, lo + 0.2], &[0.0, 0.5])?;
    }
    for i in 0..4 {
        let lo = 0.1 * i as f64;
        let element = format!("dot-{i}");
        b = b
            .scalar(element.as_str(), Channel::Scale, &[lo, lo + 0.3], &[0.0, 1.0])?
            .scalar(element.as_str(), Channel::Opacity, &[lo, lo + 0.2], &[0.0, 0.4])?;
    }

    for i in 0..total {
        let element = format!("line-{i}");
        for (channel, inputs, outputs) in manifesto_line_tables(i, total) {
            b = b.scalar(element.as_str(), channel, &inputs, &outputs)?;
        }
    }

    Ok(Section::new(
        SectionKind::Manifesto,
        ScrollWindow::PINNED,
        b.build()?,
    )
    .smoothed(SpringConfig::SCROLL))
}

/// Line the reader has reached, from unsmoothed manifesto progress.
pub fn manifesto_current_line(raw_progress: f64) -> usize {
    let total = MANIFESTO_LINES.len();
    if raw_progress.is_nan() || raw_progress <= 0.0 {
        return 0;
    }
    ((raw_progress * total as f64).floor() as usize).min(total - 1)
}

/// Progress dots under the manifesto: lines reached are solid white and the
/// current one is stretched.
pub fn manifesto_dots(current: usize) -> Vec<ElementStyle> {
    (0..MANIFESTO_LINES.len())
        .map(|i| {
            let mut style = ElementStyle::default();
            let color = if i <= current {
                Rgba8::WHITE
            } else {
                Rgba8::WHITE.with_alpha(0.2)
            };
            style.set(Channel::BackgroundColor, ChannelValue::Color(color));
            let stretch = if i == current { 1.5 } else { 1.0 };
            style.set(Channel::ScaleX, ChannelValue::Number(stretch));
            style
        })
        .collect()
}

pub fn infra_q_preview() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("infra_q_preview")
        .scalar("dashboard", Channel::Scale, &[0.0, 0.5], &[0.8, 1.0])?
        .scalar("dashboard", Channel::Opacity, &[0.0, 0.3], &[0.0, 1.0])?
        .scalar("dashboard", Channel::RotateX, &[0.0, 0.5], &[45.0, 0.0])?
        .build()?;
    Ok(Section::new(
        SectionKind::InfraQPreview,
        ScrollWindow::THROUGH,
        animator,
    ))
}

pub fn stats() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("stats")
        .scalar("ornament", Channel::Rotate, &[0.0, 1.0], &[0.0, 180.0])?
        .build()?;
    Ok(Section::new(SectionKind::Stats, ScrollWindow::THROUGH, animator))
}

/// Horizontal project rail scrolled by a pinned vertical span.
pub fn projects() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("projects")
        .values(
            "track",
            Channel::TranslateX,
            &[0.0, 1.0],
            vec![ChannelValue::percent(0.0), ChannelValue::percent(-60.0)],
        )?
        .build()?;
    Ok(Section::new(
        SectionKind::Projects,
        ScrollWindow::PINNED,
        animator,
    ))
}

pub fn contact() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("contact")
        .scalar(
            "portal-ring",
            Channel::Opacity,
            &[0.2, 0.5, 0.8],
            &[0.0, 0.3, 0.0],
        )?
        .build()?;
    Ok(Section::new(
        SectionKind::Contact,
        ScrollWindow::THROUGH,
        animator,
    ))
}

pub fn infra_q_hero() -> ScrollResult<Section> {
    let animator = AnimatorBuilder::new("infra_q_hero")
        .values(
            "backdrop",
            Channel::TranslateY,
            &[0.0, 1.0],
            vec![ChannelValue::percent(0.0), ChannelValue::percent(50.0)],
        )?
        .scalar("content", Channel::Opacity, &[0.0, 0.5], &[1.0, 0.0])?
        .build()?;
    Ok(Section::new(
        SectionKind::InfraQHero,
        ScrollWindow::EXIT,
        animator,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/sections/home.rs"]
mod tests;
