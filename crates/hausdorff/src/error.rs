//! Error taxonomy for point-set validation.
//!
//! Every variant is a precondition violation. They are detected before the
//! search touches a single distance, so callers never see a partial result.

use std::fmt;
use thiserror::Error;

/// Which argument of a directed query a point set was passed as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetRole {
    /// First argument (`A`), the set whose worst-represented point is sought.
    Outer,
    /// Second argument (`B`), the set searched for nearest neighbours.
    Inner,
}

impl fmt::Display for SetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => f.write_str("outer set A"),
            Self::Inner => f.write_str("inner set B"),
        }
    }
}

/// Errors raised by point-set construction and directed Hausdorff queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HausdorffError {
    /// A point set has no points; max/min over it is undefined.
    #[error("{set} is empty")]
    EmptySet { set: SetRole },

    /// A point has no coordinates.
    #[error("point {index} of {set} has dimension 0")]
    ZeroDimension { set: SetRole, index: usize },

    /// Points within a set, or across the two sets, disagree on dimension.
    #[error("point {index} of {set} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        set: SetRole,
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} of {set} has non-finite coordinate {value} on axis {axis}")]
    NonFinite {
        set: SetRole,
        index: usize,
        axis: usize,
        value: f64,
    },

    /// The metric returned NaN or infinity for a pair of valid points.
    #[error("distance between point {outer} of outer set A and point {inner} of inner set B is not finite")]
    DistanceOverflow { outer: usize, inner: usize },
}

impl HausdorffError {
    /// The set the offending input belongs to, if a single one is to blame.
    pub fn set(&self) -> Option<SetRole> {
        match *self {
            Self::EmptySet { set }
            | Self::ZeroDimension { set, .. }
            | Self::DimensionMismatch { set, .. }
            | Self::NonFinite { set, .. } => Some(set),
            Self::DistanceOverflow { .. } => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HausdorffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_empty_from_mismatch() {
        let empty = HausdorffError::EmptySet { set: SetRole::Inner };
        let mismatch = HausdorffError::DimensionMismatch {
            set: SetRole::Outer,
            index: 3,
            expected: 2,
            found: 3,
        };
        assert_eq!(empty.to_string(), "inner set B is empty");
        assert_eq!(
            mismatch.to_string(),
            "point 3 of outer set A has dimension 3, expected 2"
        );
        assert_eq!(empty.set(), Some(SetRole::Inner));
        assert_eq!(mismatch.set(), Some(SetRole::Outer));
        let overflow = HausdorffError::DistanceOverflow { outer: 1, inner: 0 };
        assert_eq!(overflow.set(), None);
        assert!(overflow.to_string().contains("is not finite"));
    }
}
