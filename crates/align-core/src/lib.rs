// File: crates/align-core/src/lib.rs
// Summary: Core library entry point; exports range alignment for overlaid vertical axes.

pub mod align;
pub mod axis;
pub mod config;
pub mod error;
pub mod pair;
pub mod series;

pub use align::{align, align_ranges, align_to_ratio, Alignment};
pub use axis::{Axis, AxisRange};
pub use config::{AlignConfig, AlignOptions, Buffer, DEFAULT_BUFFER, DEFAULT_PAIR_BUFFER};
pub use error::{Advisory, AlignError, Bound, Result};
pub use pair::{align_pair, PairAlignment, PairOptions, Preserve};
pub use series::Extent;
