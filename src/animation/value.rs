use std::fmt;

use crate::{
    animation::lerp::Lerp,
    foundation::core::{Rgba8, fmt_css_number},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Px,
    Percent,
    Deg,
    Vh,
    Vw,
    Em,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Deg => "deg",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Em => "em",
        }
    }
}

/// Output of one animated channel.
///
/// Numbers and same-unit lengths interpolate arithmetically, colours per
/// component. Text and mismatched kinds snap to the nearer breakpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelValue {
    Number(f64),
    Color(Rgba8),
    Length { value: f64, unit: LengthUnit },
    Text(String),
}

impl ChannelValue {
    pub fn px(value: f64) -> Self {
        Self::Length {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self::Length {
            value,
            unit: LengthUnit::Percent,
        }
    }

    pub fn deg(value: f64) -> Self {
        Self::Length {
            value,
            unit: LengthUnit::Deg,
        }
    }

    /// Numeric payload, if any (lengths report their magnitude).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::Length { value: v, .. } => Some(*v),
            Self::Color(_) | Self::Text(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => f.write_str(&fmt_css_number(*v)),
            Self::Color(c) => f.write_str(&c.to_css()),
            Self::Length { value, unit } => {
                write!(f, "{}{}", fmt_css_number(*value), unit.suffix())
            }
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ChannelValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Rgba8> for ChannelValue {
    fn from(c: Rgba8) -> Self {
        Self::Color(c)
    }
}

impl From<&str> for ChannelValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl Lerp for ChannelValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(<f64 as Lerp>::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(Rgba8::lerp(x, y, t)),
            (
                Self::Length {
                    value: x,
                    unit: ux,
                },
                Self::Length {
                    value: y,
                    unit: uy,
                },
            ) if ux == uy => Self::Length {
                value: <f64 as Lerp>::lerp(x, y, t),
                unit: *ux,
            },
            _ => {
                if t < 0.5 {
                    a.clone()
                } else {
                    b.clone()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
