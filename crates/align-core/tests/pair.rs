// File: crates/align-core/tests/pair.rs
// Purpose: Validate the two-series aligner: equivalence, preserve modes, explicit ratio, infeasibility.

use align_core::{
    align, align_pair, Advisory, AlignConfig, AlignError, AlignOptions, Bound, PairOptions, Preserve,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn neither_matches_general_aligner_with_equal_weights() {
    let a = [1.0, 4.0, 9.0, 3.0];
    let b = [-50.0, 20.0, 80.0];
    let pair = align_pair(&a, &b, 3.0, 0.0, PairOptions::default()).unwrap();

    let cfg = AlignConfig::new(
        &[&a[..], &b[..]],
        AlignOptions::default()
            .with_values(vec![3.0, 0.0])
            .with_weights(vec![1.0, 1.0])
            .with_upper_buffer(0.05)
            .with_lower_buffer(0.05),
    )
    .unwrap();
    let general = align(&cfg).unwrap();

    assert_eq!(pair.target_ratio, general.target_ratio);
    assert_eq!(pair.padded.to_vec(), general.padded);
    assert_eq!(pair.aligned.to_vec(), general.aligned);
}

#[test]
fn neither_rejects_mean_ratio_on_the_boundary() {
    // Both values sit on their series' minimum: mean ratio 0.
    let err = align_pair(&[0.0, 10.0], &[5.0, 6.0], 0.0, 5.0, PairOptions::default()).unwrap_err();
    assert!(matches!(err, AlignError::InvalidArgument(_)), "{err}");
}

#[test]
fn explicit_ratio_stretches_both_axes() {
    let opts = PairOptions::default().with_target_ratio(0.5).with_buffer(0.0);
    let out = align_pair(&[0.0, 10.0], &[0.0, 10.0], 5.0, 2.0, opts).unwrap();
    assert_eq!(out.target_ratio, 0.5);
    let (pa, pb) = out.ranges();
    assert!(close(pa.0, 0.0) && close(pa.1, 10.0));
    assert!(close(pb.0, -6.0) && close(pb.1, 10.0));
}

#[test]
fn explicit_ratio_outside_unit_interval_is_rejected() {
    let opts = PairOptions::default().with_target_ratio(1.2);
    let err = align_pair(&[0.0, 10.0], &[0.0, 10.0], 5.0, 2.0, opts).unwrap_err();
    assert!(matches!(err, AlignError::InvalidArgument(_)));
}

#[test]
fn preserve_primary_moves_only_secondary() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary);
    let out = align_pair(&[0.0, 10.0], &[0.0, 100.0], 2.0, 50.0, opts).unwrap();

    assert!(close(out.target_ratio, 0.2));
    assert_eq!(out.aligned[0].as_tuple(), (0.0, 10.0));
    assert!(close(out.aligned[1].min, 0.0));
    assert!(close(out.aligned[1].max, 250.0));

    // 10% combined buffer, 5% per side.
    assert!(close(out.primary().min, -0.5) && close(out.primary().max, 10.5));
    assert!(close(out.secondary().min, -12.5) && close(out.secondary().max, 262.5));
}

#[test]
fn preserve_secondary_moves_only_primary() {
    let opts = PairOptions::default().with_preserve(Preserve::Secondary).with_buffer(0.0);
    let out = align_pair(&[0.0, 100.0], &[0.0, 10.0], 50.0, 2.0, opts).unwrap();
    assert!(close(out.target_ratio, 0.2));
    assert_eq!(out.secondary().as_tuple(), (0.0, 10.0));
    assert!(close(out.primary().max, 250.0));
}

#[test]
fn preserve_with_matching_explicit_ratio_is_accepted() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary).with_target_ratio(0.25);
    let out = align_pair(&[0.0, 8.0], &[0.0, 1.0], 2.0, 0.5, opts).unwrap();
    assert_eq!(out.target_ratio, 0.25);
}

#[test]
fn preserve_with_conflicting_explicit_ratio_is_rejected() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary).with_target_ratio(0.3);
    let err = align_pair(&[0.0, 8.0], &[0.0, 1.0], 2.0, 0.5, opts).unwrap_err();
    assert!(matches!(err, AlignError::InvalidArgument(_)));
}

#[test]
fn preserve_reports_infeasible_when_data_sits_on_the_wrong_side() {
    let a: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let b: Vec<f64> = (20..=30).map(|i| i as f64).collect();
    let opts = PairOptions::default().with_preserve(Preserve::Primary);
    let err = align_pair(&a, &b, 15.0, 15.0, opts).unwrap_err();
    match err {
        AlignError::Infeasible { series, bound, target_ratio } => {
            assert_eq!(series, 1);
            assert_eq!(bound, Bound::Lower);
            assert!(close(target_ratio, 1.5));
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
}

#[test]
fn preserve_out_of_visible_range_is_advisory() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary).with_buffer(0.0);
    let out = align_pair(&[0.0, 10.0], &[0.0, 10.0], 15.0, 20.0, opts).unwrap();
    assert!(close(out.target_ratio, 1.5));
    assert_eq!(out.advisories, vec![Advisory::OutOfVisibleRange { target_ratio: out.target_ratio }]);
    let b = out.secondary();
    assert!(close(b.min, 0.0));
    assert!(close(b.max, 20.0 / 1.5));
    assert!(close(b.ratio_of(20.0), 1.5));
}

#[test]
fn preserve_negative_ratio_stretches_free_lower_bound() {
    // Primary value sits below its data: ratio -0.5.
    let opts = PairOptions::default().with_preserve(Preserve::Primary).with_buffer(0.0);
    let out = align_pair(&[10.0, 20.0], &[10.0, 20.0], 5.0, 0.0, opts).unwrap();
    assert!(close(out.target_ratio, -0.5));
    assert_eq!(out.advisories, vec![Advisory::OutOfVisibleRange { target_ratio: out.target_ratio }]);
    assert_eq!(out.primary().as_tuple(), (10.0, 20.0));

    // Secondary ratio -1.0 is below the target: its lower bound moves down to 20 - 20 / 1.5.
    let b = out.secondary();
    assert!(close(b.min, 20.0 - 20.0 / 1.5));
    assert_eq!(b.max, 20.0);
    assert!(close(b.ratio_of(0.0), -0.5));
}

#[test]
fn preserve_negative_ratio_cannot_pull_free_upper_bound_inward() {
    // Secondary ratio -0.2 sits above the target -0.5; reaching it would need a smaller top.
    let opts = PairOptions::default().with_preserve(Preserve::Primary);
    let err = align_pair(&[10.0, 20.0], &[10.0, 20.0], 5.0, 8.0, opts).unwrap_err();
    assert!(
        matches!(err, AlignError::Infeasible { series: 1, bound: Bound::Upper, .. }),
        "{err}"
    );
}

#[test]
fn preserved_constant_series_is_degenerate() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary);
    let err = align_pair(&[3.0, 3.0], &[0.0, 1.0], 3.0, 0.5, opts).unwrap_err();
    assert!(matches!(err, AlignError::DegenerateRange { series: 0, .. }));
}

#[test]
fn constant_free_series_is_extended_to_its_value() {
    let opts = PairOptions::default().with_preserve(Preserve::Primary).with_buffer(0.0);
    let out = align_pair(&[0.0, 10.0], &[7.0, 7.0], 5.0, 2.0, opts).unwrap();
    let b = out.secondary();
    assert!(b.min <= 2.0 && b.max >= 7.0);
    assert!(close(b.ratio_of(2.0), 0.5));
}
