use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::error::{ScrollError, ScrollResult},
};

/// Piecewise interpolation curve: sorted `(input, output)` breakpoints.
///
/// Inputs are validated to be finite and non-decreasing when the table is
/// built or deserialized, so sampling never fails. When several breakpoints
/// share one input, the last of them wins for `v` at that input, except at
/// the very first input, which always returns the first output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawTable<T>")]
pub struct BreakpointTable<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
    eases: Vec<Ease>, // one per segment
    clamp: bool,
}

#[derive(serde::Deserialize)]
struct RawTable<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
    #[serde(default)]
    eases: Vec<Ease>,
    #[serde(default = "default_clamp")]
    clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl<T> TryFrom<RawTable<T>> for BreakpointTable<T> {
    type Error = ScrollError;

    fn try_from(raw: RawTable<T>) -> ScrollResult<Self> {
        let table = Self::new(raw.inputs, raw.outputs)?.with_eases(raw.eases)?;
        Ok(if raw.clamp { table } else { table.unclamped() })
    }
}

impl<T> BreakpointTable<T> {
    pub fn new(inputs: Vec<f64>, outputs: Vec<T>) -> ScrollResult<Self> {
        if inputs.is_empty() {
            return Err(ScrollError::validation(
                "BreakpointTable must have at least one breakpoint",
            ));
        }
        if inputs.len() != outputs.len() {
            return Err(ScrollError::validation(format!(
                "BreakpointTable has {} inputs but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        if let Some(bad) = inputs.iter().find(|v| !v.is_finite()) {
            return Err(ScrollError::validation(format!(
                "BreakpointTable input {bad} is not finite"
            )));
        }
        if let Some(i) = inputs.windows(2).position(|w| w[0] > w[1]) {
            return Err(ScrollError::validation(format!(
                "BreakpointTable inputs must be non-decreasing ({} > {} at index {})",
                inputs[i],
                inputs[i + 1],
                i + 1
            )));
        }

        let segments = inputs.len() - 1;
        Ok(Self {
            inputs,
            outputs,
            eases: vec![Ease::Linear; segments],
            clamp: true,
        })
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, T)>) -> ScrollResult<Self> {
        let (inputs, outputs) = pairs.into_iter().unzip();
        Self::new(inputs, outputs)
    }

    /// Apply one ease to every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.eases.iter_mut().for_each(|e| *e = ease);
        self
    }

    /// Per-segment eases. An empty list keeps linear segments and a single
    /// entry applies to every segment.
    pub fn with_eases(mut self, eases: Vec<Ease>) -> ScrollResult<Self> {
        match eases.len() {
            0 => Ok(self),
            1 => Ok(self.with_ease(eases[0])),
            n if n == self.eases.len() => {
                self.eases = eases;
                Ok(self)
            }
            n => Err(ScrollError::validation(format!(
                "BreakpointTable has {} segments but {n} eases",
                self.eases.len()
            ))),
        }
    }

    /// Extend the first and last segments past the input domain instead of clamping.
    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.inputs[0], self.inputs[self.inputs.len() - 1])
    }

    pub fn map_outputs<U>(self, f: impl FnMut(T) -> U) -> BreakpointTable<U> {
        BreakpointTable {
            inputs: self.inputs,
            outputs: self.outputs.into_iter().map(f).collect(),
            eases: self.eases,
            clamp: self.clamp,
        }
    }
}

impl<T> BreakpointTable<T>
where
    T: Lerp + Clone,
{
    /// Interpolated output at `v`. NaN samples as the start of the domain.
    pub fn sample(&self, v: f64) -> T {
        let n = self.inputs.len();
        let (first, last) = self.domain();

        if v.is_nan() || v == first || (v < first && (self.clamp || n == 1)) {
            return self.outputs[0].clone();
        }
        if v >= last && (self.clamp || n == 1) {
            return self.outputs[n - 1].clone();
        }

        if v < first {
            return self.extrapolate(0, v);
        }
        if v >= last {
            return self.extrapolate(n - 2, v);
        }

        // first <= v < last, so 1 <= idx <= n - 1 and the bracket is non-degenerate.
        let idx = self.inputs.partition_point(|i| *i <= v);
        let (i0, i1) = (self.inputs[idx - 1], self.inputs[idx]);
        let t = (v - i0) / (i1 - i0);
        let te = self.eases[idx - 1].apply(t);
        T::lerp(&self.outputs[idx - 1], &self.outputs[idx], te)
    }

    fn extrapolate(&self, seg: usize, v: f64) -> T {
        let (i0, i1) = (self.inputs[seg], self.inputs[seg + 1]);
        let denom = i1 - i0;
        if denom == 0.0 {
            let k = if v < i0 { seg } else { seg + 1 };
            return self.outputs[k].clone();
        }
        T::lerp(&self.outputs[seg], &self.outputs[seg + 1], (v - i0) / denom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
