// File: crates/align-demo/src/main.rs
// Summary: Demo loads named CSV columns, aligns their axes and prints the ranges.

use std::path::PathBuf;

use align_core::Preserve;
use align_demo::{load_columns, run, Request};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Compute overlaid axis ranges that line up chosen values across columns.
#[derive(Parser, Debug)]
#[command(name = "align-demo")]
#[command(about = "Align chosen values of several CSV columns at the same plot height")]
struct Args {
    /// CSV file with a header row.
    #[arg(short, long)]
    input: PathBuf,

    /// Column to align (repeat for each axis, in axis order).
    #[arg(short, long = "column", required = true)]
    columns: Vec<String>,

    /// Value to align per column (one value applies to all).
    #[arg(long = "value", allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Relative importance per column.
    #[arg(short, long = "weight")]
    weights: Vec<f64>,

    /// Blank margin above each axis as a fraction of its span.
    #[arg(long)]
    upper_buffer: Vec<f64>,

    /// Blank margin below each axis as a fraction of its span.
    #[arg(long)]
    lower_buffer: Vec<f64>,

    /// Keep one axis's natural scale (two columns only).
    #[arg(short, long, default_value = "neither")]
    preserve: Preserve,

    /// Explicit target ratio instead of the weighted mean.
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Combined top+bottom margin (two columns only).
    #[arg(short, long)]
    buffer: Option<f64>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let columns = load_columns(&args.input, &args.columns)?;
    println!("Loaded {} columns from {}", columns.len(), args.input.display());

    let req = Request {
        values: args.values,
        weights: args.weights,
        upper_buffer: args.upper_buffer,
        lower_buffer: args.lower_buffer,
        preserve: args.preserve,
        ratio: args.ratio,
        buffer: args.buffer,
    };
    let report = run(&columns, &req).context("aligning columns")?;

    println!("Target ratio: {:.6}", report.target_ratio);
    for axis in &report.axes {
        println!("  {}: {}", axis.label, axis.range());
    }
    for advisory in &report.advisories {
        println!("Note: {advisory}");
    }
    Ok(())
}
