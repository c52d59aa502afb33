// File: crates/align-core/tests/validation.rs
// Purpose: Input validation fails fast with InvalidArgument and a message naming the problem.

use align_core::{AlignConfig, AlignError, AlignOptions};

fn invalid(series: &[Vec<f64>], opts: AlignOptions) -> String {
    match AlignConfig::new(series, opts) {
        Err(AlignError::InvalidArgument(msg)) => msg,
        Err(other) => panic!("expected InvalidArgument, got {other:?}"),
        Ok(_) => panic!("expected InvalidArgument, got a config"),
    }
}

fn two() -> Vec<Vec<f64>> {
    vec![vec![0.0, 1.0], vec![5.0, 9.0]]
}

#[test]
fn fewer_than_two_series() {
    let msg = invalid(&[vec![0.0, 1.0]], AlignOptions::default());
    assert!(msg.contains("at least 2"), "{msg}");
}

#[test]
fn mismatched_value_count() {
    let msg = invalid(&two(), AlignOptions::default().with_values(vec![0.0]));
    assert!(msg.contains("alignment values"), "{msg}");
}

#[test]
fn mismatched_weight_count() {
    let msg = invalid(&two(), AlignOptions::default().with_weights(vec![1.0, 1.0, 1.0]));
    assert!(msg.contains("weights"), "{msg}");
}

#[test]
fn negative_or_non_finite_weight() {
    let msg = invalid(&two(), AlignOptions::default().with_weights(vec![1.0, -0.5]));
    assert!(msg.contains("non-negative"), "{msg}");
    let msg = invalid(&two(), AlignOptions::default().with_weights(vec![f64::INFINITY, 1.0]));
    assert!(msg.contains("finite"), "{msg}");
}

#[test]
fn all_zero_weights() {
    let msg = invalid(&two(), AlignOptions::default().with_weights(vec![0.0, 0.0]));
    assert!(msg.contains("all zero"), "{msg}");
}

#[test]
fn buffer_outside_unit_interval() {
    let msg = invalid(&two(), AlignOptions::default().with_upper_buffer(1.5));
    assert!(msg.contains("upper buffer"), "{msg}");
    let msg = invalid(&two(), AlignOptions::default().with_lower_buffer(vec![0.1, -0.1]));
    assert!(msg.contains("lower buffer for series 1"), "{msg}");
    let msg = invalid(&two(), AlignOptions::default().with_lower_buffer(f64::NAN));
    assert!(msg.contains("lower buffer"), "{msg}");
}

#[test]
fn series_without_finite_samples() {
    let series = vec![vec![0.0, 1.0], vec![f64::NAN, f64::INFINITY]];
    let msg = invalid(&series, AlignOptions::default());
    assert!(msg.contains("series 1 has no finite samples"), "{msg}");
    let series = vec![vec![], vec![1.0]];
    let msg = invalid(&series, AlignOptions::default());
    assert!(msg.contains("series 0"), "{msg}");
}

#[test]
fn errors_render_readably() {
    let err = AlignConfig::new(&two(), AlignOptions::default().with_weights(vec![0.0, 0.0])).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: weights are all zero");
}
