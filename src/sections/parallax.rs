//! Reusable parallax animators, driven by `ScrollWindow::THROUGH` progress.

use crate::{
    foundation::error::ScrollResult,
    timeline::{
        animator::{Animator, AnimatorBuilder},
        channel::Channel,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
}

/// Drift, fade at both ends and swell at mid-window.
pub fn parallax(element: &str, speed: f64) -> ScrollResult<Animator> {
    AnimatorBuilder::new(format!("parallax_{element}"))
        .scalar(
            element,
            Channel::TranslateY,
            &[0.0, 1.0],
            &[100.0 * speed, -100.0 * speed],
        )?
        .scalar(
            element,
            Channel::Opacity,
            &[0.0, 0.2, 0.8, 1.0],
            &[0.0, 1.0, 1.0, 0.0],
        )?
        .scalar(element, Channel::Scale, &[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8])?
        .build()
}

/// Translation only. `Up` starts below and moves against the scroll.
pub fn wrapper(element: &str, speed: f64, direction: ParallaxDirection) -> ScrollResult<Animator> {
    let m = match direction {
        ParallaxDirection::Up => -1.0,
        ParallaxDirection::Down => 1.0,
    };
    AnimatorBuilder::new(format!("parallax_wrapper_{element}"))
        .scalar(
            element,
            Channel::TranslateY,
            &[0.0, 1.0],
            &[100.0 * speed * m, -100.0 * speed * m],
        )?
        .build()
}

/// `depth` 0 is static, 1 is full parallax.
pub fn layer(element: &str, depth: f64) -> ScrollResult<Animator> {
    let edge = 1.0 - 0.05 * depth;
    AnimatorBuilder::new(format!("parallax_layer_{element}"))
        .scalar(
            element,
            Channel::TranslateY,
            &[0.0, 1.0],
            &[50.0 * depth, -50.0 * depth],
        )?
        .scalar(element, Channel::Scale, &[0.0, 0.5, 1.0], &[edge, 1.0, edge])?
        .build()
}

/// Layer inside a pinned scene sharing its parent's progress.
pub fn scene_layer(element: &str, depth: f64) -> ScrollResult<Animator> {
    AnimatorBuilder::new(format!("scene_layer_{element}"))
        .scalar(element, Channel::TranslateY, &[0.0, 1.0], &[0.0, -200.0 * depth])?
        .scalar(element, Channel::Scale, &[0.0, 1.0], &[1.0, 1.0 + 0.1 * depth])?
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/sections/parallax.rs"]
mod tests;
