// File: crates/align-demo/src/columns.rs
// Summary: Resolve named CSV columns to plain numeric sequences for the aligner.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// One named numeric column. Empty or unparsable cells are NaN so the core
/// drops them from min/max.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

pub fn load_columns(path: &Path, names: &[String]) -> Result<Vec<Column>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_columns(file, names).with_context(|| format!("reading columns from {}", path.display()))
}

/// Read `names` (matched case-insensitively against the header row) from CSV data.
pub fn read_columns<R: io::Read>(reader: R, names: &[String]) -> Result<Vec<Column>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let indices = names
        .iter()
        .map(|want| {
            let lower = want.to_lowercase();
            headers
                .iter()
                .position(|h| *h == lower)
                .with_context(|| format!("no column named '{want}' (available: {})", headers.join(", ")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut columns: Vec<Column> = names
        .iter()
        .map(|n| Column { name: n.clone(), values: Vec::new() })
        .collect();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("parsing csv row {}", row + 1))?;
        for (col, &ix) in columns.iter_mut().zip(&indices) {
            let v = rec.get(ix).and_then(|s| s.parse::<f64>().ok()).unwrap_or(f64::NAN);
            col.values.push(v);
        }
    }
    debug!(columns = columns.len(), rows = columns.first().map_or(0, |c| c.values.len()), "loaded columns");
    Ok(columns)
}
