//! Directed Hausdorff distance between finite point sets.
//!
//! Purpose
//! - Compute `h(A, B) = max_{p in A} min_{q in B} d(p, q)` exactly without
//!   filling the full `|A|·|B|` distance matrix.
//! - Keep the metric and the random source injectable so results can be
//!   replayed and instrumented.
//!
//! Model
//! - Random visitation order plus early break in the inner scan
//!   (Taha and Hanbury, IEEE TPAMI 37, 2015).
//! - `h` is asymmetric; `h(A, B) != h(B, A)` in general.
//!
//! Code cross-refs: `HausdorffEngine`, `SearchCfg`, `directed_hausdorff_brute_force`

mod brute;
mod search;
mod types;

pub use brute::{brute_force_with, directed_hausdorff_brute_force};
pub use search::HausdorffEngine;
pub use types::{DirectedHausdorff, SearchCfg, SearchTrace};

use crate::error::Result;
use crate::points::PointSet;

/// Directed Hausdorff distance with Euclidean metric and an entropy-seeded order.
pub fn directed_hausdorff(a: &PointSet, b: &PointSet) -> Result<DirectedHausdorff> {
    HausdorffEngine::with_cfg(SearchCfg::default()).directed(a, b)
}

/// Same as [`directed_hausdorff`] with a reproducible visitation order.
pub fn directed_hausdorff_seeded(
    a: &PointSet,
    b: &PointSet,
    seed: u64,
) -> Result<DirectedHausdorff> {
    HausdorffEngine::with_cfg(SearchCfg::seeded(seed)).directed(a, b)
}
