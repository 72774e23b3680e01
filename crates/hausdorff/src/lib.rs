//! Directed Hausdorff distance between finite point sets.
//!
//! Layout
//! - `points`: run-time sized points, borrowed point sets, precondition checks.
//! - `metric`: the two-point distance seam (`Euclidean` by default).
//! - `directed`: the early-break search and its brute-force oracle.
//! - `error`: `HausdorffError`, one variant per violated precondition.

pub mod directed;
pub mod error;
pub mod metric;
pub mod points;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use directed::{
    directed_hausdorff, directed_hausdorff_brute_force, directed_hausdorff_seeded,
    DirectedHausdorff, HausdorffEngine, SearchCfg, SearchTrace,
};
pub use error::{HausdorffError, Result, SetRole};
pub use metric::{Euclidean, Metric};
pub use points::{Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::directed::{
        brute_force_with, directed_hausdorff, directed_hausdorff_brute_force,
        directed_hausdorff_seeded, DirectedHausdorff, HausdorffEngine, SearchCfg, SearchTrace,
    };
    pub use crate::error::{HausdorffError, SetRole};
    pub use crate::metric::{Euclidean, Metric};
    pub use crate::points::{from_rows, Point, PointSet};
    pub use nalgebra::DVector;
}
