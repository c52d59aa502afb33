// File: crates/align-core/src/series.rs
// Summary: Finite data extent of a series and the ratio of a value inside it.

/// Inclusive [lo, hi] envelope of the finite samples of one series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub lo: f64,
    pub hi: f64,
}

impl Extent {
    /// Min/max over finite samples; `None` when the series has none.
    pub fn of(data: &[f64]) -> Option<Self> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &y in data.iter().filter(|y| y.is_finite()) {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        if lo.is_finite() && hi.is_finite() { Some(Self { lo, hi }) } else { None }
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Grow the envelope just enough to contain `value`.
    pub fn including(self, value: f64) -> Self {
        Self { lo: self.lo.min(value), hi: self.hi.max(value) }
    }

    /// Position of `value` as a fraction of the span. Not finite for a zero span.
    #[inline]
    pub fn ratio(&self, value: f64) -> f64 {
        (value - self.lo) / self.span()
    }
}
