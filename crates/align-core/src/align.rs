// File: crates/align-core/src/align.rs
// Summary: N-series range alignment: weighted target ratio, outward-only stretch, buffers.

use tracing::debug;

use crate::axis::AxisRange;
use crate::config::{AlignConfig, AlignOptions, Buffer};
use crate::error::{Advisory, AlignError, Bound, Result};
use crate::series::Extent;

/// Result of a successful alignment, one entry per input series in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    /// Common fractional height of every aligned value.
    pub target_ratio: f64,
    /// Stretched ranges before buffers. The ratio invariant holds exactly here.
    pub aligned: Vec<AxisRange>,
    /// Final ranges with blank margins applied.
    pub padded: Vec<AxisRange>,
    pub advisories: Vec<Advisory>,
}

impl Alignment {
    pub fn ranges(&self) -> Vec<(f64, f64)> {
        self.padded.iter().map(AxisRange::as_tuple).collect()
    }
}

/// Align every series of `config` on a weighted-mean target ratio.
pub fn align(config: &AlignConfig) -> Result<Alignment> {
    let extents = extended_extents(config);
    let target = weighted_target(&extents, config.values(), config.weights())?;
    debug!(target_ratio = target, series = config.len(), "computed weighted target ratio");
    fit_all(&extents, config, target)
}

/// Align every series of `config` on a caller-chosen target ratio in [0, 1].
/// Weights are ignored.
pub fn align_to_ratio(config: &AlignConfig, target_ratio: f64) -> Result<Alignment> {
    if !(0.0..=1.0).contains(&target_ratio) {
        return Err(AlignError::invalid(format!(
            "explicit target ratio {target_ratio} is outside [0, 1]"
        )));
    }
    let extents = extended_extents(config);
    debug!(target_ratio, series = config.len(), "aligning on explicit target ratio");
    fit_all(&extents, config, target_ratio)
}

/// Flat form: plain sequences in, (min, max) pairs out.
pub fn align_ranges<S: AsRef<[f64]>>(
    series: &[S],
    values: &[f64],
    weights: Option<&[f64]>,
    upper_buffer: impl Into<Buffer>,
    lower_buffer: impl Into<Buffer>,
) -> Result<Vec<(f64, f64)>> {
    let mut options = AlignOptions::default()
        .with_values(values)
        .with_upper_buffer(upper_buffer)
        .with_lower_buffer(lower_buffer);
    if let Some(w) = weights {
        options = options.with_weights(w);
    }
    let config = AlignConfig::new(series, options)?;
    Ok(align(&config)?.ranges())
}

fn extended_extents(config: &AlignConfig) -> Vec<Extent> {
    config
        .extents()
        .iter()
        .zip(config.values())
        .map(|(e, &v)| e.including(v))
        .collect()
}

/// Weighted mean of per-series ratios. Degenerate (zero-span) series have no
/// ratio and are left out of the mean. Weights are scaled by the largest one
/// first so the running sums stay finite for any finite input.
fn weighted_target(extents: &[Extent], values: &[f64], weights: &[f64]) -> Result<f64> {
    let max_w = extents
        .iter()
        .zip(weights)
        .filter(|(e, _)| !e.is_degenerate())
        .fold(0.0_f64, |m, (_, &w)| m.max(w));
    if max_w <= 0.0 {
        let series = weights.iter().position(|w| *w > 0.0).unwrap_or(0);
        return Err(AlignError::degenerate(
            series,
            "every weighted series is constant at its alignment value; no target ratio can be derived",
        ));
    }

    let mut acc = 0.0;
    let mut total = 0.0;
    for ((e, &v), &w) in extents.iter().zip(values).zip(weights) {
        if e.is_degenerate() || w == 0.0 {
            continue;
        }
        let w = w / max_w;
        acc += w * e.ratio(v);
        total += w;
    }
    let target = acc / total;
    if !target.is_finite() {
        return Err(AlignError::invalid(format!("weighted target ratio is {target}")));
    }
    Ok(target)
}

fn fit_all(extents: &[Extent], config: &AlignConfig, target: f64) -> Result<Alignment> {
    let aligned = extents
        .iter()
        .zip(config.values())
        .enumerate()
        .map(|(i, (e, &v))| stretch_to(i, *e, v, target))
        .collect::<Result<Vec<_>>>()?;
    let padded = aligned
        .iter()
        .zip(config.upper_buffers().iter().zip(config.lower_buffers()))
        .map(|(r, (&up, &lo))| r.padded(up, lo))
        .collect();
    Ok(Alignment {
        target_ratio: target,
        aligned,
        padded,
        advisories: Advisory::check(target).into_iter().collect(),
    })
}

/// Extend one bound of `extent` outward so that `value` sits at `target` of
/// the span. The result always contains `extent`; a stretch that would need to
/// pull a bound inside the data is reported as `Infeasible`.
pub(crate) fn stretch_to(series: usize, extent: Extent, value: f64, target: f64) -> Result<AxisRange> {
    let Extent { lo, hi } = extent;
    let candidate = if extent.is_degenerate() {
        // Constant series sitting on its own alignment value: a single point,
        // which buffers leave unchanged.
        AxisRange::new(value, value)
    } else {
        let ratio = extent.ratio(value);
        if ratio > target {
            if target == 0.0 {
                return Err(AlignError::degenerate(
                    series,
                    "target ratio 0 would stretch the upper bound to infinity",
                ));
            }
            AxisRange::new(lo, lo + (value - lo) / target)
        } else if ratio < target {
            if target == 1.0 {
                return Err(AlignError::degenerate(
                    series,
                    "target ratio 1 would stretch the lower bound to infinity",
                ));
            }
            AxisRange::new(hi - (hi - value) / (1.0 - target), hi)
        } else {
            AxisRange::new(lo, hi)
        }
    };

    if !candidate.min.is_finite() || !candidate.max.is_finite() {
        return Err(AlignError::degenerate(series, "stretched bound is not finite"));
    }

    // Allow for rounding in the stretch formula; anything beyond is a real
    // inward move.
    let tol = 1e-9 * extent.span();
    if candidate.min > lo + tol {
        return Err(AlignError::Infeasible { series, bound: Bound::Lower, target_ratio: target });
    }
    if candidate.max < hi - tol {
        return Err(AlignError::Infeasible { series, bound: Bound::Upper, target_ratio: target });
    }
    Ok(AxisRange::new(candidate.min.min(lo), candidate.max.max(hi)))
}
