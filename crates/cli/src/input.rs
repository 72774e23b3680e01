//! Point-set loaders for the CLI.
//!
//! - `.csv`: header row, one numeric column per coordinate, one point per row.
//! - `.json`: array of coordinate arrays, e.g. `[[0.0, 1.0], [2.0, 3.5]]`.

use anyhow::{bail, Context, Result};
use hausdorff::points::{from_rows, Point};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Load a point set, dispatching on the file extension.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        _ => bail!(
            "unsupported input {} (expected .csv or .json)",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Vec<f64>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as an array of coordinate rows", path.display()))?;
    Ok(from_rows(&rows))
}

fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    frame_to_rows(&df).map(|rows| from_rows(&rows))
}

/// Row-major coordinates from a frame whose columns are the axes.
fn frame_to_rows(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    let mut rows = vec![Vec::with_capacity(df.width()); df.height()];
    for series in df.get_columns() {
        let as_f64 = series
            .cast(&DataType::Float64)
            .with_context(|| format!("column {} is not numeric", series.name()))?;
        for (row, value) in as_f64.f64()?.into_iter().enumerate() {
            let value = value
                .with_context(|| format!("missing value in column {} row {row}", series.name()))?;
            rows[row].push(value);
        }
    }
    Ok(rows)
}
