//! Pointer-driven state: hover/focus flags, magnetic buttons, hero tilt, the custom cursor.

use crate::{
    animation::spring::{SpringConfig, SpringFollower},
    foundation::core::{Point, Rect, Vec2},
    timeline::{channel::Channel, style::ElementStyle},
};

/// Set while the pointer is over an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverFlag(bool);

impl HoverFlag {
    pub fn enter(&mut self) {
        self.0 = true;
    }

    pub fn leave(&mut self) {
        self.0 = false;
    }

    pub fn get(self) -> bool {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = false;
    }
}

/// Set while an element holds keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusFlag(bool);

impl FocusFlag {
    pub fn focus(&mut self) {
        self.0 = true;
    }

    pub fn blur(&mut self) {
        self.0 = false;
    }

    pub fn get(self) -> bool {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = false;
    }
}

pub const MAGNETIC_STRENGTH: f64 = 0.3;

/// Pull toward the pointer: `(pointer - centre) * strength`.
pub fn magnetic_offset(pointer: Point, rect: Rect, strength: f64) -> Vec2 {
    (pointer - rect.center()) * strength
}

/// A button that leans toward the pointer through a spring.
#[derive(Clone, Debug)]
pub struct MagneticButton {
    pub rect: Rect,
    pub strength: f64,
    x: SpringFollower,
    y: SpringFollower,
}

impl MagneticButton {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            strength: MAGNETIC_STRENGTH,
            x: SpringFollower::new(SpringConfig::MAGNETIC, 0.0),
            y: SpringFollower::new(SpringConfig::MAGNETIC, 0.0),
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        let target = magnetic_offset(pointer, self.rect, self.strength);
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn pointer_leave(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
    }

    /// Offset the springs are heading for.
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn step(&mut self, dt: f64) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }

    pub fn reset(&mut self) {
        self.x.jump(0.0);
        self.y.jump(0.0);
    }
}

/// Target `(rotate_x, rotate_y)` in degrees for a pointer at `(nx, ny)`,
/// measured from the hero's centre as a fraction of its size (`-0.5..=0.5`).
pub fn tilt_target(nx: f64, ny: f64) -> (f64, f64) {
    let max = HeroTilt::MAX_DEG;
    (
        (-2.0 * max * ny).clamp(-max, max),
        (2.0 * max * nx).clamp(-max, max),
    )
}

/// 3D tilt of the hero content following the pointer through springs.
#[derive(Clone, Debug)]
pub struct HeroTilt {
    rotate_x: SpringFollower,
    rotate_y: SpringFollower,
}

impl HeroTilt {
    pub const SPRING: SpringConfig = SpringConfig::new(100.0, 30.0);
    pub const MAX_DEG: f64 = 5.0;

    pub fn new() -> Self {
        Self {
            rotate_x: SpringFollower::new(Self::SPRING, 0.0),
            rotate_y: SpringFollower::new(Self::SPRING, 0.0),
        }
    }

    /// `rect` is the hero's box in the same coordinates as `pointer`.
    pub fn pointer_move(&mut self, pointer: Point, rect: Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let nx = (pointer.x - rect.x0) / rect.width() - 0.5;
        let ny = (pointer.y - rect.y0) / rect.height() - 0.5;
        let (rx, ry) = tilt_target(nx, ny);
        self.rotate_x.set_target(rx);
        self.rotate_y.set_target(ry);
    }

    pub fn target(&self) -> (f64, f64) {
        (self.rotate_x.target(), self.rotate_y.target())
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.rotate_x.value(), self.rotate_y.value())
    }

    pub fn step(&mut self, dt: f64) -> (f64, f64) {
        (self.rotate_x.step(dt), self.rotate_y.step(dt))
    }

    pub fn style(&self) -> ElementStyle {
        let (rx, ry) = self.angles();
        let mut style = ElementStyle::default();
        style.set(Channel::RotateX, Channel::RotateX.value_from(rx));
        style.set(Channel::RotateY, Channel::RotateY.value_from(ry));
        style
    }

    pub fn reset(&mut self) {
        self.rotate_x.jump(0.0);
        self.rotate_y.jump(0.0);
    }
}

impl Default for HeroTilt {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing cursor that grows over interactive elements.
#[derive(Clone, Debug)]
pub struct CustomCursor {
    x: SpringFollower,
    y: SpringFollower,
    visible: bool,
    hovering: bool,
    label: String,
}

impl CustomCursor {
    pub const SPRING: SpringConfig = SpringConfig::new(300.0, 25.0);
    /// Parked off-screen until the first pointer move.
    pub const PARKED: f64 = -100.0;

    pub fn new() -> Self {
        Self {
            x: SpringFollower::new(Self::SPRING, Self::PARKED),
            y: SpringFollower::new(Self::SPRING, Self::PARKED),
            visible: false,
            hovering: false,
            label: String::new(),
        }
    }

    /// `interactive` marks links, buttons and opted-in elements; `label` is
    /// the element's cursor caption, if any.
    pub fn pointer_move(&mut self, pointer: Point, interactive: bool, label: Option<&str>) {
        self.x.set_target(pointer.x);
        self.y.set_target(pointer.y);
        self.visible = true;
        self.hovering = interactive;
        self.label = label.unwrap_or_default().to_owned();
    }

    pub fn pointer_leave(&mut self) {
        self.visible = false;
    }

    pub fn pointer_enter(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn step(&mut self, dt: f64) -> Point {
        Point::new(self.x.step(dt), self.y.step(dt))
    }
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/pointer.rs"]
mod tests;
