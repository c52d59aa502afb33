// File: crates/align-core/src/config.rs
// Summary: Typed alignment options with defaults, validated into an AlignConfig.
// Notes:
// - All per-series arrays are resolved to the series count at construction,
//   so the aligner itself never has to re-check shapes.

use crate::error::{AlignError, Result};
use crate::series::Extent;

/// Default blank margin on each side of an axis.
pub const DEFAULT_BUFFER: f64 = 0.05;
/// Default combined (top + bottom) margin in two-series mode.
pub const DEFAULT_PAIR_BUFFER: f64 = 0.1;

/// Buffer fraction given once for every series or once per series.
#[derive(Clone, Debug, PartialEq)]
pub enum Buffer {
    Uniform(f64),
    PerSeries(Vec<f64>),
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::Uniform(DEFAULT_BUFFER)
    }
}

impl From<f64> for Buffer {
    fn from(v: f64) -> Self {
        Buffer::Uniform(v)
    }
}

impl From<Vec<f64>> for Buffer {
    fn from(v: Vec<f64>) -> Self {
        Buffer::PerSeries(v)
    }
}

impl From<&[f64]> for Buffer {
    fn from(v: &[f64]) -> Self {
        Buffer::PerSeries(v.to_vec())
    }
}

impl Buffer {
    fn resolve(&self, n: usize, side: &str) -> Result<Vec<f64>> {
        let out = match self {
            Buffer::Uniform(v) => vec![*v; n],
            Buffer::PerSeries(v) => {
                if v.len() != n {
                    return Err(AlignError::invalid(format!(
                        "{side} buffer has {} entries for {n} series",
                        v.len()
                    )));
                }
                v.clone()
            }
        };
        if let Some((i, b)) = out.iter().enumerate().find(|(_, b)| !(0.0..=1.0).contains(*b)) {
            return Err(AlignError::invalid(format!(
                "{side} buffer for series {i} is {b}; expected a fraction in [0, 1]"
            )));
        }
        Ok(out)
    }
}

/// Caller-facing knobs. Anything left unset falls back to its default:
/// align value 0, uniform weights, 5% buffer on each side.
#[derive(Clone, Debug, Default)]
pub struct AlignOptions {
    pub values: Option<Vec<f64>>,
    pub weights: Option<Vec<f64>>,
    pub upper_buffer: Buffer,
    pub lower_buffer: Buffer,
}

impl AlignOptions {
    pub fn with_values(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.values = Some(values.into());
        self
    }

    pub fn with_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = Some(weights.into());
        self
    }

    pub fn with_upper_buffer(mut self, buffer: impl Into<Buffer>) -> Self {
        self.upper_buffer = buffer.into();
        self
    }

    pub fn with_lower_buffer(mut self, buffer: impl Into<Buffer>) -> Self {
        self.lower_buffer = buffer.into();
        self
    }
}

/// Validated alignment request: one entry per series in every array.
#[derive(Clone, Debug)]
pub struct AlignConfig {
    extents: Vec<Extent>,
    values: Vec<f64>,
    weights: Vec<f64>,
    upper: Vec<f64>,
    lower: Vec<f64>,
}

impl AlignConfig {
    pub fn new<S: AsRef<[f64]>>(series: &[S], options: AlignOptions) -> Result<Self> {
        let n = series.len();
        if n < 2 {
            return Err(AlignError::invalid(format!("need at least 2 series to align, got {n}")));
        }

        let values = match options.values {
            Some(v) if v.len() != n => {
                return Err(AlignError::invalid(format!(
                    "{} alignment values for {n} series",
                    v.len()
                )))
            }
            Some(v) => v,
            None => vec![0.0; n],
        };
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(AlignError::invalid(format!("alignment value for series {i} is {v}")));
        }

        let weights = match options.weights {
            Some(w) if w.len() != n => {
                return Err(AlignError::invalid(format!("{} weights for {n} series", w.len())))
            }
            Some(w) => w,
            None => vec![1.0; n],
        };
        if let Some((i, w)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(AlignError::invalid(format!(
                "weight for series {i} is {w}; weights must be finite and non-negative"
            )));
        }
        if weights.iter().all(|w| *w == 0.0) {
            return Err(AlignError::invalid("weights are all zero"));
        }

        let upper = options.upper_buffer.resolve(n, "upper")?;
        let lower = options.lower_buffer.resolve(n, "lower")?;

        let extents = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Extent::of(s.as_ref()).ok_or_else(|| {
                    AlignError::invalid(format!("series {i} has no finite samples"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { extents, values, weights, upper, lower })
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Raw (un-normalized) weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn upper_buffers(&self) -> &[f64] {
        &self.upper
    }

    pub fn lower_buffers(&self) -> &[f64] {
        &self.lower
    }
}
