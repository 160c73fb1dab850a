use std::{fmt, str::FromStr};

use crate::foundation::error::{ScrollError, ScrollResult};

/// A position along one axis of a box: a fraction of its length or a pixel distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Fraction(f64),
    Px(f64),
}

impl Edge {
    pub const START: Self = Self::Fraction(0.0);
    pub const CENTER: Self = Self::Fraction(0.5);
    pub const END: Self = Self::Fraction(1.0);

    /// Offset from the box start for a box of `len` pixels.
    pub fn resolve(self, len: f64) -> f64 {
        match self {
            Self::Fraction(f) => f * len,
            Self::Px(px) => px,
        }
    }

    fn parse_token(tok: &str) -> ScrollResult<Self> {
        let bad = || ScrollError::validation(format!("invalid scroll offset token '{tok}'"));
        let edge = match tok {
            "start" => Self::START,
            "center" => Self::CENTER,
            "end" => Self::END,
            _ => {
                if let Some(pct) = tok.strip_suffix('%') {
                    Self::Fraction(pct.parse::<f64>().map_err(|_| bad())? / 100.0)
                } else if let Some(px) = tok.strip_suffix("px") {
                    Self::Px(px.parse().map_err(|_| bad())?)
                } else {
                    Self::Fraction(tok.parse().map_err(|_| bad())?)
                }
            }
        };
        match edge {
            Self::Fraction(v) | Self::Px(v) if !v.is_finite() => Err(bad()),
            _ => Ok(edge),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fraction(v) if v == 0.0 => f.write_str("start"),
            Self::Fraction(v) if v == 0.5 => f.write_str("center"),
            Self::Fraction(v) if v == 1.0 => f.write_str("end"),
            Self::Fraction(v) => write!(f, "{v}"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Alignment of a tracked region against the viewport, e.g. `"start end"`:
/// the region's start meets the viewport's end.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    pub target: Edge,
    pub container: Edge,
}

impl ScrollOffset {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }
}

impl FromStr for ScrollOffset {
    type Err = ScrollError;

    fn from_str(s: &str) -> ScrollResult<Self> {
        let toks: Vec<&str> = s.split_whitespace().collect();
        match toks.as_slice() {
            [one] => {
                let e = Edge::parse_token(one)?;
                Ok(Self::new(e, e))
            }
            [t, c] => Ok(Self::new(Edge::parse_token(t)?, Edge::parse_token(c)?)),
            _ => Err(ScrollError::validation(format!(
                "scroll offset '{s}' must have one or two tokens"
            ))),
        }
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = ScrollError;

    fn try_from(s: String) -> ScrollResult<Self> {
        s.parse()
    }
}

impl From<ScrollOffset> for String {
    fn from(o: ScrollOffset) -> Self {
        o.to_string()
    }
}

impl fmt::Display for ScrollOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.container)
    }
}

/// The scroll span over which progress runs from 0 (`start`) to 1 (`end`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollWindow {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollWindow {
    /// From the region entering at the viewport bottom to leaving at the top.
    pub const THROUGH: Self = Self::new(
        ScrollOffset::new(Edge::START, Edge::END),
        ScrollOffset::new(Edge::END, Edge::START),
    );
    /// While a tall region is pinned: its top at viewport top until its bottom at viewport bottom.
    pub const PINNED: Self = Self::new(
        ScrollOffset::new(Edge::START, Edge::START),
        ScrollOffset::new(Edge::END, Edge::END),
    );
    /// From first appearance until the region's top reaches the viewport top.
    pub const ENTER: Self = Self::new(
        ScrollOffset::new(Edge::START, Edge::END),
        ScrollOffset::new(Edge::START, Edge::START),
    );
    /// From the region's top at viewport top until it has fully left.
    pub const EXIT: Self = Self::new(
        ScrollOffset::new(Edge::START, Edge::START),
        ScrollOffset::new(Edge::END, Edge::START),
    );

    pub const fn new(start: ScrollOffset, end: ScrollOffset) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> ScrollResult<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::THROUGH
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/offset.rs"]
mod tests;
