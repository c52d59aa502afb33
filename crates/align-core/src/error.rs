// File: crates/align-core/src/error.rs
// Summary: Error taxonomy for range alignment and the non-fatal advisories.

use std::fmt;

use thiserror::Error;

/// Which end of an axis range a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Lower => f.write_str("lower"),
            Bound::Upper => f.write_str("upper"),
        }
    }
}

/// Errors surfaced by [`crate::align`] and [`crate::align_pair`].
///
/// Every failure is deterministic given the inputs; there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// Malformed shape or range of the inputs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A span of zero where one is needed, or a target ratio of exactly 0 or 1
    /// that would stretch a bound to infinity.
    #[error("degenerate range for series {series}: {reason}")]
    DegenerateRange { series: usize, reason: String },

    /// The free axis of a preserved pair cannot reach the target ratio without
    /// pulling `bound` inside its own data.
    #[error(
        "series {series} cannot reach target ratio {target_ratio} without moving its {bound} bound inside the data"
    )]
    Infeasible { series: usize, bound: Bound, target_ratio: f64 },
}

impl AlignError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn degenerate(series: usize, reason: impl Into<String>) -> Self {
        Self::DegenerateRange { series, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, AlignError>;

/// Non-fatal conditions attached to a successful alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advisory {
    /// The target ratio lies outside [0, 1]: the values are aligned but sit
    /// above the top or below the bottom of every axis.
    OutOfVisibleRange { target_ratio: f64 },
}

impl Advisory {
    pub(crate) fn check(target_ratio: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&target_ratio) {
            None
        } else {
            tracing::warn!(target_ratio, "aligned value falls outside the visible axis range");
            Some(Advisory::OutOfVisibleRange { target_ratio })
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutOfVisibleRange { target_ratio } => {
                write!(f, "target ratio {target_ratio:.4} is outside [0, 1]; aligned values are not visible")
            }
        }
    }
}
