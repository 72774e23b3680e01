//! Exhaustive max-of-min over all pairs, used as an oracle.

use crate::error::{HausdorffError, Result};
use crate::metric::{Euclidean, Metric};
use crate::points::{validate_pair, PointSet};

use super::types::DirectedHausdorff;

/// Directed Hausdorff distance by evaluating every pair (Euclidean).
pub fn directed_hausdorff_brute_force(a: &PointSet, b: &PointSet) -> Result<DirectedHausdorff> {
    brute_force_with(&Euclidean, a, b)
}

/// Directed Hausdorff distance by evaluating every pair under `metric`.
///
/// Ties resolve to the lowest outer index, then the lowest inner index.
pub fn brute_force_with<M: Metric>(
    metric: &M,
    a: &PointSet,
    b: &PointSet,
) -> Result<DirectedHausdorff> {
    validate_pair(a, b)?;
    let mut best = DirectedHausdorff {
        distance: f64::NEG_INFINITY,
        outer_index: 0,
        inner_index: 0,
    };
    for (i, p) in a.iter().enumerate() {
        let (mut j, mut d) = (0, f64::INFINITY);
        for (k, q) in b.iter().enumerate() {
            let dk = metric.distance(p, q);
            if !dk.is_finite() {
                return Err(HausdorffError::DistanceOverflow { outer: i, inner: k });
            }
            if dk < d {
                (j, d) = (k, dk);
            }
        }
        if d > best.distance {
            best = DirectedHausdorff {
                distance: d,
                outer_index: i,
                inner_index: j,
            };
        }
    }
    Ok(best)
}
