use crate::animation::{interp::BreakpointTable, value::ChannelValue};

/// One animatable visual property.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    RotateX,
    RotateY,
    Blur,
    BackdropBlur,
    /// Fraction of an SVG stroke drawn, `0..=1`.
    PathLength,
    Width,
    Height,
    BackgroundColor,
    /// Position of a gradient colour stop.
    ColorStop,
}

impl Channel {
    pub const ALL: [Self; 16] = [
        Self::Opacity,
        Self::TranslateX,
        Self::TranslateY,
        Self::Scale,
        Self::ScaleX,
        Self::ScaleY,
        Self::Rotate,
        Self::RotateX,
        Self::RotateY,
        Self::Blur,
        Self::BackdropBlur,
        Self::PathLength,
        Self::Width,
        Self::Height,
        Self::BackgroundColor,
        Self::ColorStop,
    ];

    /// Wrap a bare number in this channel's natural unit.
    pub fn value_from(self, v: f64) -> ChannelValue {
        match self {
            Self::Opacity | Self::Scale | Self::ScaleX | Self::ScaleY | Self::PathLength => {
                ChannelValue::Number(v)
            }
            Self::TranslateX | Self::TranslateY | Self::Blur | Self::BackdropBlur => {
                ChannelValue::px(v)
            }
            Self::Rotate | Self::RotateX | Self::RotateY => ChannelValue::deg(v),
            Self::Width | Self::Height | Self::ColorStop => ChannelValue::percent(v),
            // Numbers read as the alpha of black.
            Self::BackgroundColor => {
                ChannelValue::Color(crate::foundation::core::Rgba8::BLACK.with_alpha(v))
            }
        }
    }

    pub fn is_transform(self) -> bool {
        matches!(
            self,
            Self::TranslateX
                | Self::TranslateY
                | Self::Scale
                | Self::ScaleX
                | Self::ScaleY
                | Self::Rotate
                | Self::RotateX
                | Self::RotateY
        )
    }
}

/// A breakpoint table driving one channel of one element.
///
/// With `remap` set, the animator input passes through it first, so a group
/// of bindings can share a derived signal such as "illustration progress".
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelBinding {
    pub element: String,
    pub channel: Channel,
    pub table: BreakpointTable<ChannelValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remap: Option<BreakpointTable<f64>>,
}

impl ChannelBinding {
    pub fn new(
        element: impl Into<String>,
        channel: Channel,
        table: BreakpointTable<ChannelValue>,
    ) -> Self {
        Self {
            element: element.into(),
            channel,
            table,
            remap: None,
        }
    }

    pub fn remapped(mut self, remap: BreakpointTable<f64>) -> Self {
        self.remap = Some(remap);
        self
    }

    /// Input range over which this binding changes.
    pub fn domain(&self) -> (f64, f64) {
        match &self.remap {
            Some(r) => r.domain(),
            None => self.table.domain(),
        }
    }

    pub fn sample(&self, input: f64) -> ChannelValue {
        let v = match &self.remap {
            Some(r) => r.sample(input),
            None => input,
        };
        self.table.sample(v)
    }
}
