use std::collections::BTreeMap;

use crate::{
    animation::value::{ChannelValue, LengthUnit},
    foundation::core::fmt_css_number,
    timeline::channel::Channel,
};

/// Sampled channel values for one element, renderable as inline CSS.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementStyle {
    pub channels: BTreeMap<Channel, ChannelValue>,
}

impl ElementStyle {
    pub fn get(&self, channel: Channel) -> Option<&ChannelValue> {
        self.channels.get(&channel)
    }

    pub fn set(&mut self, channel: Channel, value: ChannelValue) {
        self.channels.insert(channel, value);
    }

    /// Numeric value of `channel`, if present and numeric.
    pub fn number(&self, channel: Channel) -> Option<f64> {
        self.get(channel).and_then(ChannelValue::as_f64)
    }

    /// Inline CSS declarations, transforms composed in a fixed order.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();

        if let Some(v) = self.get(Channel::Opacity) {
            decls.push(format!("opacity: {v}"));
        }

        let transform: Vec<String> = self
            .channels
            .iter()
            .filter(|(c, _)| c.is_transform())
            .map(|(c, v)| transform_fn(*c, v))
            .collect();
        if !transform.is_empty() {
            decls.push(format!("transform: {}", transform.join(" ")));
        }

        if let Some(v) = self.get(Channel::Blur) {
            decls.push(format!("filter: blur({})", as_unit(v, LengthUnit::Px)));
        }
        if let Some(v) = self.get(Channel::BackdropBlur) {
            decls.push(format!("backdrop-filter: blur({})", as_unit(v, LengthUnit::Px)));
        }
        if let Some(v) = self.get(Channel::PathLength) {
            let drawn = v.as_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            decls.push("stroke-dasharray: 1".to_owned());
            decls.push(format!("stroke-dashoffset: {}", fmt_css_number(1.0 - drawn)));
        }
        if let Some(v) = self.get(Channel::Width) {
            decls.push(format!("width: {}", as_unit(v, LengthUnit::Percent)));
        }
        if let Some(v) = self.get(Channel::Height) {
            decls.push(format!("height: {}", as_unit(v, LengthUnit::Percent)));
        }
        if let Some(v) = self.get(Channel::BackgroundColor) {
            decls.push(format!("background-color: {v}"));
        }
        if let Some(v) = self.get(Channel::ColorStop) {
            decls.push(format!("--color-stop: {}", as_unit(v, LengthUnit::Percent)));
        }

        decls.join("; ")
    }
}

/// Bare numbers take `unit`; everything else renders as-is.
fn as_unit(v: &ChannelValue, unit: LengthUnit) -> String {
    match v {
        ChannelValue::Number(n) => format!("{}{}", fmt_css_number(*n), unit.suffix()),
        other => other.to_string(),
    }
}

fn transform_fn(channel: Channel, v: &ChannelValue) -> String {
    match channel {
        Channel::TranslateX => format!("translateX({})", as_unit(v, LengthUnit::Px)),
        Channel::TranslateY => format!("translateY({})", as_unit(v, LengthUnit::Px)),
        Channel::Scale => format!("scale({v})"),
        Channel::ScaleX => format!("scaleX({v})"),
        Channel::ScaleY => format!("scaleY({v})"),
        Channel::Rotate => format!("rotate({})", as_unit(v, LengthUnit::Deg)),
        Channel::RotateX => format!("rotateX({})", as_unit(v, LengthUnit::Deg)),
        Channel::RotateY => format!("rotateY({})", as_unit(v, LengthUnit::Deg)),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/style.rs"]
mod tests;
