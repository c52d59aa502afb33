// File: crates/align-demo/src/run.rs
// Summary: Turn loaded columns plus command-line knobs into aligned, labeled axes.

use align_core::{
    align, align_pair, align_to_ratio, Advisory, AlignConfig, AlignOptions, Axis, Buffer, PairOptions, Preserve,
};
use anyhow::{bail, Result};

use crate::columns::Column;

/// Alignment knobs as given on the command line. Empty vectors mean "use the
/// default"; a single entry applies to every column.
#[derive(Clone, Debug, Default)]
pub struct Request {
    pub values: Vec<f64>,
    pub weights: Vec<f64>,
    pub upper_buffer: Vec<f64>,
    pub lower_buffer: Vec<f64>,
    pub preserve: Preserve,
    pub ratio: Option<f64>,
    /// Combined margin for two-column mode.
    pub buffer: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Report {
    pub axes: Vec<Axis>,
    pub target_ratio: f64,
    pub advisories: Vec<Advisory>,
}

impl Request {
    fn uses_pair_mode(&self) -> bool {
        self.preserve != Preserve::Neither || self.buffer.is_some()
    }

    fn values_for(&self, n: usize) -> Option<Vec<f64>> {
        match self.values.as_slice() {
            [] => None,
            [v] => Some(vec![*v; n]),
            many => Some(many.to_vec()),
        }
    }

    fn buffer_from(side: &[f64]) -> Buffer {
        match side {
            [] => Buffer::default(),
            [v] => Buffer::Uniform(*v),
            many => Buffer::PerSeries(many.to_vec()),
        }
    }
}

pub fn run(columns: &[Column], req: &Request) -> Result<Report> {
    let labels = columns.iter().map(|c| c.name.clone());

    if req.uses_pair_mode() {
        let [a, b] = columns else {
            bail!("--preserve and --buffer need exactly two columns, got {}", columns.len());
        };
        if !req.weights.is_empty() || !req.upper_buffer.is_empty() || !req.lower_buffer.is_empty() {
            bail!("--weight, --upper-buffer and --lower-buffer do not apply in two-column mode; use --buffer");
        }
        let values = req.values_for(2).unwrap_or_else(|| vec![0.0, 0.0]);
        let mut opts = PairOptions::default().with_preserve(req.preserve);
        if let Some(t) = req.ratio {
            opts = opts.with_target_ratio(t);
        }
        if let Some(b) = req.buffer {
            opts = opts.with_buffer(b);
        }
        let out = align_pair(&a.values, &b.values, values[0], values[1], opts)?;
        return Ok(Report {
            axes: labels.zip(out.padded).map(|(l, r)| Axis::from_range(l, r)).collect(),
            target_ratio: out.target_ratio,
            advisories: out.advisories,
        });
    }

    let mut options = AlignOptions::default()
        .with_upper_buffer(Request::buffer_from(&req.upper_buffer))
        .with_lower_buffer(Request::buffer_from(&req.lower_buffer));
    if let Some(v) = req.values_for(columns.len()) {
        options = options.with_values(v);
    }
    if !req.weights.is_empty() {
        options = options.with_weights(req.weights.clone());
    }
    let series: Vec<&[f64]> = columns.iter().map(|c| c.values.as_slice()).collect();
    let config = AlignConfig::new(&series, options)?;
    let out = match req.ratio {
        Some(t) => align_to_ratio(&config, t)?,
        None => align(&config)?,
    };
    Ok(Report {
        axes: labels.zip(out.padded).map(|(l, r)| Axis::from_range(l, r)).collect(),
        target_ratio: out.target_ratio,
        advisories: out.advisories,
    })
}
