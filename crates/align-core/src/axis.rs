// File: crates/align-core/src/axis.rs
// Summary: Axis range output type and labeled axis model handed to plotting front-ends.

use std::fmt;

/// (min, max) bounds for one vertical axis. Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Fractional height of `value` on this axis (0 at the bottom, 1 at the top).
    #[inline]
    pub fn ratio_of(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Add blank margins as fractions of the current span.
    pub fn padded(&self, upper: f64, lower: f64) -> Self {
        let span = self.span();
        Self { min: self.min - span * lower, max: self.max + span * upper }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl From<AxisRange> for (f64, f64) {
    fn from(r: AxisRange) -> Self {
        r.as_tuple()
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.min, self.max)
    }
}

/// Labeled axis ready for a plotting front-end.
#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn from_range(label: impl Into<String>, range: AxisRange) -> Self {
        Self::new(label, range.min, range.max)
    }

    pub fn range(&self) -> AxisRange {
        AxisRange::new(self.min, self.max)
    }
}
