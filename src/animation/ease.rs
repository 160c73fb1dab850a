use crate::foundation::error::{ScrollError, ScrollResult};

/// Easing functions used to map normalized segment progress.
#[derive(Clone, Copy, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`. `y` may leave `[0, 1]` for overshoot.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Gentle deceleration used by most reveal transitions.
    pub const SMOOTH: Self = Self::bezier(0.25, 0.46, 0.45, 0.94);
    /// Back-in/back-out with overshoot on both ends.
    pub const BOUNCY: Self = Self::bezier(0.68, -0.55, 0.265, 1.55);
    /// Fast start, long settle.
    pub const SNAPPY: Self = Self::bezier(0.19, 1.0, 0.22, 1.0);
    pub const EASE_IN: Self = Self::bezier(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: Self = Self::bezier(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Self = Self::bezier(0.42, 0.0, 0.58, 1.0);

    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Resolve a named curve (`linear`, `easeIn`, `easeOut`, `easeInOut`, `smooth`, `bouncy`, `snappy`).
    pub fn named(name: &str) -> ScrollResult<Self> {
        Ok(match name {
            "linear" => Self::Linear,
            "easeIn" | "ease_in" => Self::EASE_IN,
            "easeOut" | "ease_out" => Self::EASE_OUT,
            "easeInOut" | "ease_in_out" => Self::EASE_IN_OUT,
            "smooth" => Self::SMOOTH,
            "bouncy" => Self::BOUNCY,
            "snappy" => Self::SNAPPY,
            other => {
                return Err(ScrollError::validation(format!("unknown ease '{other}'")));
            }
        })
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3, in polynomial form.
    let coeffs = |p1: f64, p2: f64| {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    };
    let (ax, bx, cx) = coeffs(x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
    let (ay, by, cy) = coeffs(y1, y2);
    let curve_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = curve_x(s) - x;
        if err.abs() < 1e-7 {
            solved = true;
            break;
        }
        let d = slope_x(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    if !solved || !(0.0..=1.0).contains(&s) {
        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        for _ in 0..64 {
            let v = curve_x(s);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
    }

    ((ay * s + by) * s + cy) * s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
