use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{ease::Ease, interp::BreakpointTable, value::ChannelValue},
    foundation::error::{ScrollError, ScrollResult},
    timeline::{
        channel::{Channel, ChannelBinding},
        style::ElementStyle,
    },
};

/// What an animator's breakpoint inputs are measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    /// Normalized `[0, 1]` progress of a tracked region.
    #[default]
    Progress,
    /// Absolute page scroll offset in pixels.
    ScrollPx,
}

/// A named set of channel bindings sharing one input signal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animator {
    pub name: String,
    #[serde(default)]
    pub driver: Driver,
    pub bindings: Vec<ChannelBinding>,
}

impl Animator {
    pub fn validate(&self) -> ScrollResult<()> {
        let mut seen = BTreeSet::new();
        for b in &self.bindings {
            if b.element.is_empty() {
                return Err(ScrollError::timeline(format!(
                    "animator '{}' has a binding with an empty element id",
                    self.name
                )));
            }
            if !seen.insert((b.element.as_str(), b.channel)) {
                return Err(ScrollError::timeline(format!(
                    "animator '{}' binds {:?} of '{}' twice",
                    self.name, b.channel, b.element
                )));
            }
        }
        Ok(())
    }

    /// Element ids in binding order, without repeats.
    pub fn elements(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.bindings
            .iter()
            .map(|b| b.element.as_str())
            .filter(|e| seen.insert(*e))
            .collect()
    }

    pub fn binding(&self, element: &str, channel: Channel) -> Option<&ChannelBinding> {
        self.bindings
            .iter()
            .find(|b| b.element == element && b.channel == channel)
    }

    /// Smallest and largest breakpoint input over all bindings.
    pub fn domain(&self) -> (f64, f64) {
        self.bindings
            .iter()
            .map(ChannelBinding::domain)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
            .unwrap_or((0.0, 1.0))
    }

    /// Sample every binding at `input`.
    #[tracing::instrument(level = "trace", skip(self), fields(animator = %self.name))]
    pub fn sample(&self, input: f64) -> TimelineFrame {
        let mut elements: BTreeMap<String, ElementStyle> = BTreeMap::new();
        for b in &self.bindings {
            elements
                .entry(b.element.clone())
                .or_default()
                .set(b.channel, b.sample(input));
        }
        TimelineFrame {
            animator: self.name.clone(),
            input,
            elements,
        }
    }
}

/// All channel values of one animator at one input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineFrame {
    pub animator: String,
    pub input: f64,
    pub elements: BTreeMap<String, ElementStyle>,
}

impl TimelineFrame {
    pub fn style(&self, element: &str) -> Option<&ElementStyle> {
        self.elements.get(element)
    }

    pub fn value(&self, element: &str, channel: Channel) -> Option<&ChannelValue> {
        self.style(element)?.get(channel)
    }

    pub fn number(&self, element: &str, channel: Channel) -> Option<f64> {
        self.style(element)?.number(channel)
    }

    /// `element -> inline CSS`.
    pub fn css(&self) -> BTreeMap<String, String> {
        self.elements
            .iter()
            .map(|(k, s)| (k.clone(), s.to_css()))
            .collect()
    }
}

pub struct AnimatorBuilder {
    name: String,
    driver: Driver,
    bindings: Vec<ChannelBinding>,
}

impl AnimatorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: Driver::Progress,
            bindings: Vec::new(),
        }
    }

    pub fn driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    pub fn bind(
        self,
        element: impl Into<String>,
        channel: Channel,
        table: BreakpointTable<ChannelValue>,
    ) -> ScrollResult<Self> {
        self.push(ChannelBinding::new(element, channel, table))
    }

    fn push(mut self, binding: ChannelBinding) -> ScrollResult<Self> {
        if self
            .bindings
            .iter()
            .any(|b| b.element == binding.element && b.channel == binding.channel)
        {
            return Err(ScrollError::timeline(format!(
                "duplicate binding {:?} for element '{}'",
                binding.channel, binding.element
            )));
        }
        self.bindings.push(binding);
        Ok(self)
    }

    /// Bind a numeric curve, wrapping outputs in the channel's natural unit.
    pub fn scalar(
        self,
        element: impl Into<String>,
        channel: Channel,
        inputs: &[f64],
        outputs: &[f64],
    ) -> ScrollResult<Self> {
        self.scalar_eased(element, channel, inputs, outputs, Ease::Linear)
    }

    pub fn scalar_eased(
        self,
        element: impl Into<String>,
        channel: Channel,
        inputs: &[f64],
        outputs: &[f64],
        ease: Ease,
    ) -> ScrollResult<Self> {
        let table = BreakpointTable::new(inputs.to_vec(), outputs.to_vec())?
            .with_ease(ease)
            .map_outputs(|v| channel.value_from(v));
        self.bind(element, channel, table)
    }

    /// Bind a numeric curve whose inputs are measured on `remap(input)`
    /// rather than on the animator input itself.
    pub fn scalar_via(
        self,
        remap: &BreakpointTable<f64>,
        element: impl Into<String>,
        channel: Channel,
        inputs: &[f64],
        outputs: &[f64],
    ) -> ScrollResult<Self> {
        let table = BreakpointTable::new(inputs.to_vec(), outputs.to_vec())?
            .map_outputs(|v| channel.value_from(v));
        self.push(ChannelBinding::new(element, channel, table).remapped(remap.clone()))
    }

    /// Bind arbitrary values (colours, lengths, text).
    pub fn values<V: Into<ChannelValue>>(
        self,
        element: impl Into<String>,
        channel: Channel,
        inputs: &[f64],
        outputs: Vec<V>,
    ) -> ScrollResult<Self> {
        let outputs = outputs.into_iter().map(Into::into).collect();
        let table = BreakpointTable::new(inputs.to_vec(), outputs)?;
        self.bind(element, channel, table)
    }

    pub fn build(self) -> ScrollResult<Animator> {
        let animator = Animator {
            name: self.name,
            driver: self.driver,
            bindings: self.bindings,
        };
        animator.validate()?;
        Ok(animator)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/animator.rs"]
mod tests;
