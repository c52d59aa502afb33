// File: crates/align-core/src/pair.rs
// Summary: Two-series alignment with an optional preserved axis or explicit target ratio.
// Notes:
// - With `Preserve::Neither` this is the N-series aligner fixed at two series
//   with equal weights; the preserve modes only change where the target ratio
//   comes from and which axis is allowed to move.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::align::{align, align_to_ratio, stretch_to, Alignment};
use crate::axis::AxisRange;
use crate::config::{AlignConfig, AlignOptions, DEFAULT_PAIR_BUFFER};
use crate::error::{Advisory, AlignError, Result};

/// Which axis keeps its natural data range untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preserve {
    #[default]
    Neither,
    Primary,
    Secondary,
}

impl Preserve {
    /// (preserved, free) series indices.
    fn indices(self) -> Option<(usize, usize)> {
        match self {
            Preserve::Neither => None,
            Preserve::Primary => Some((0, 1)),
            Preserve::Secondary => Some((1, 0)),
        }
    }
}

impl FromStr for Preserve {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "neither" | "none" => Ok(Preserve::Neither),
            "primary" | "a" | "left" => Ok(Preserve::Primary),
            "secondary" | "b" | "right" => Ok(Preserve::Secondary),
            other => Err(AlignError::invalid(format!(
                "unknown preserve mode '{other}'; expected primary, secondary or neither"
            ))),
        }
    }
}

impl fmt::Display for Preserve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Preserve::Neither => "neither",
            Preserve::Primary => "primary",
            Preserve::Secondary => "secondary",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairOptions {
    pub preserve: Preserve,
    pub target_ratio: Option<f64>,
    /// Combined blank margin, split evenly between top and bottom.
    pub buffer: f64,
}

impl Default for PairOptions {
    fn default() -> Self {
        Self { preserve: Preserve::Neither, target_ratio: None, buffer: DEFAULT_PAIR_BUFFER }
    }
}

impl PairOptions {
    pub fn with_preserve(mut self, preserve: Preserve) -> Self {
        self.preserve = preserve;
        self
    }

    pub fn with_target_ratio(mut self, ratio: f64) -> Self {
        self.target_ratio = Some(ratio);
        self
    }

    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PairAlignment {
    pub target_ratio: f64,
    /// [primary, secondary] before buffers.
    pub aligned: [AxisRange; 2],
    /// [primary, secondary] with buffers.
    pub padded: [AxisRange; 2],
    pub advisories: Vec<Advisory>,
}

impl PairAlignment {
    pub fn primary(&self) -> AxisRange {
        self.padded[0]
    }

    pub fn secondary(&self) -> AxisRange {
        self.padded[1]
    }

    pub fn ranges(&self) -> ((f64, f64), (f64, f64)) {
        (self.padded[0].as_tuple(), self.padded[1].as_tuple())
    }
}

impl From<Alignment> for PairAlignment {
    fn from(a: Alignment) -> Self {
        Self {
            target_ratio: a.target_ratio,
            aligned: [a.aligned[0], a.aligned[1]],
            padded: [a.padded[0], a.padded[1]],
            advisories: a.advisories,
        }
    }
}

/// Align a primary series `a` and a secondary series `b`.
pub fn align_pair(a: &[f64], b: &[f64], value_a: f64, value_b: f64, options: PairOptions) -> Result<PairAlignment> {
    if !(0.0..=1.0).contains(&options.buffer) {
        return Err(AlignError::invalid(format!(
            "buffer is {}; expected a fraction in [0, 1]",
            options.buffer
        )));
    }
    if let Some(t) = options.target_ratio {
        if !t.is_finite() {
            return Err(AlignError::invalid(format!("explicit target ratio {t} is not finite")));
        }
    }

    let half = options.buffer / 2.0;
    let config = AlignConfig::new(
        &[a, b],
        AlignOptions::default()
            .with_values(vec![value_a, value_b])
            .with_upper_buffer(half)
            .with_lower_buffer(half),
    )?;

    match options.preserve.indices() {
        None => match options.target_ratio {
            Some(t) => Ok(align_to_ratio(&config, t)?.into()),
            None => {
                let alignment = align(&config)?;
                let t = alignment.target_ratio;
                if t <= 0.0 || t >= 1.0 {
                    return Err(AlignError::invalid(format!(
                        "mean ratio {t} is not strictly inside (0, 1); supply an explicit target ratio or a preserve mode"
                    )));
                }
                Ok(alignment.into())
            }
        },
        Some((kept, free)) => preserve_one(&config, kept, free, options.target_ratio, half),
    }
}

fn preserve_one(
    config: &AlignConfig,
    kept: usize,
    free: usize,
    explicit: Option<f64>,
    half: f64,
) -> Result<PairAlignment> {
    let values = config.values();
    let kept_extent = config.extents()[kept];
    if kept_extent.is_degenerate() {
        return Err(AlignError::degenerate(kept, "preserved series is constant; its scale has no span"));
    }

    // Ratio on the unextended data: the preserved axis is shown as-is, so its
    // alignment value may legitimately fall outside it.
    let target = kept_extent.ratio(values[kept]);
    if let Some(t) = explicit {
        if t != target {
            return Err(AlignError::invalid(format!(
                "explicit target ratio {t} conflicts with the preserved series' own ratio {target}"
            )));
        }
    }
    debug!(target_ratio = target, preserved = kept, "aligning on preserved axis ratio");
    let advisories: Vec<Advisory> = Advisory::check(target).into_iter().collect();

    let free_extent = config.extents()[free];
    let free_extent = if free_extent.is_degenerate() {
        free_extent.including(values[free])
    } else {
        free_extent
    };
    let stretched = stretch_to(free, free_extent, values[free], target)?;

    let mut aligned = [AxisRange::new(0.0, 0.0); 2];
    aligned[kept] = AxisRange::new(kept_extent.lo, kept_extent.hi);
    aligned[free] = stretched;
    let padded = aligned.map(|r| r.padded(half, half));

    Ok(PairAlignment { target_ratio: target, aligned, padded, advisories })
}
