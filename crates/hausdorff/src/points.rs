//! Point and point-set representation plus precondition checks.
//!
//! A `Point` is a run-time sized column vector; a `PointSet` is any borrowed
//! slice of them. Order carries no meaning for the distance, only for which
//! indices get reported as the realizing pair.

use nalgebra::DVector;

use crate::error::{HausdorffError, Result, SetRole};

/// A point in R^D.
pub type Point = DVector<f64>;

/// A finite ordered collection of points, borrowed for one query.
pub type PointSet = [Point];

/// Build points from coordinate rows (`Vec<f64>`, arrays, slices).
pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Vec<Point> {
    rows.iter()
        .map(|r| DVector::from_column_slice(r.as_ref()))
        .collect()
}

/// Dimension shared by every point of `set`.
///
/// Fails on an empty set, a zero-dimensional point, a point whose dimension
/// differs from the first one, or a non-finite coordinate.
pub fn dim_of(set: &PointSet, role: SetRole) -> Result<usize> {
    let first = set.first().ok_or(HausdorffError::EmptySet { set: role })?;
    let dim = first.len();
    if dim == 0 {
        return Err(HausdorffError::ZeroDimension {
            set: role,
            index: 0,
        });
    }
    check_points(set, role, dim)?;
    Ok(dim)
}

/// Validate the preconditions of a directed query `h(a, b)` and return D.
///
/// Emptiness is reported before any dimension problem, so an empty `b`
/// paired with a malformed `a` still reads as "empty".
pub fn validate_pair(a: &PointSet, b: &PointSet) -> Result<usize> {
    if a.is_empty() {
        return Err(HausdorffError::EmptySet { set: SetRole::Outer });
    }
    if b.is_empty() {
        return Err(HausdorffError::EmptySet { set: SetRole::Inner });
    }
    let dim = dim_of(a, SetRole::Outer)?;
    check_points(b, SetRole::Inner, dim)?;
    Ok(dim)
}

fn check_points(set: &PointSet, role: SetRole, dim: usize) -> Result<()> {
    for (index, p) in set.iter().enumerate() {
        if p.len() != dim {
            return Err(if p.len() == 0 {
                HausdorffError::ZeroDimension { set: role, index }
            } else {
                HausdorffError::DimensionMismatch {
                    set: role,
                    index,
                    expected: dim,
                    found: p.len(),
                }
            });
        }
        if let Some((axis, &value)) = p.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(HausdorffError::NonFinite {
                set: role,
                index,
                axis,
                value,
            });
        }
    }
    Ok(())
}
