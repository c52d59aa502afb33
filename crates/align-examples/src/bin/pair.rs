// File: crates/align-examples/src/bin/pair.rs
// Summary: Minimal example that aligns zero on a temperature and a rainfall-anomaly axis.

use align_core::{align, align_pair, AlignConfig, AlignOptions, PairOptions, Preserve};

fn main() {
    let temperature = vec![-3.0, 1.5, 4.0, 9.5, 14.0, 18.5];
    let anomaly = vec![-12.0, -4.0, 2.0, 30.0, 41.0, 25.0];

    // Equal weights: both axes move toward the mean position of zero.
    let cfg = AlignConfig::new(&[&temperature[..], &anomaly[..]], AlignOptions::default())
        .expect("valid inputs");
    let out = align(&cfg).expect("align");
    println!("weighted target ratio {:.4}", out.target_ratio);
    for (name, r) in ["temperature", "anomaly"].iter().zip(&out.padded) {
        println!("  {name}: {r}");
    }

    // Keep the temperature axis as measured; only the anomaly axis moves.
    let opts = PairOptions::default().with_preserve(Preserve::Primary);
    let pair = align_pair(&temperature, &anomaly, 0.0, 0.0, opts).expect("align pair");
    println!("preserved target ratio {:.4}", pair.target_ratio);
    println!("  temperature: {}", pair.primary());
    println!("  anomaly: {}", pair.secondary());
}
