//! Two-point distance seam used by the search.
//!
//! The engine only ever asks for `distance(p, q)`; anything that satisfies
//! the metric axioms (non-negative, symmetric, zero only on identical points)
//! keeps the pruning exact.

use nalgebra::DVector;

/// A distance between two points of equal dimension.
pub trait Metric {
    fn distance(&self, p: &DVector<f64>, q: &DVector<f64>) -> f64;
}

/// Euclidean (L2) distance.
///
/// The difference is scaled by its largest component before squaring, so
/// any pair whose difference is finite gets a finite distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    #[inline]
    fn distance(&self, p: &DVector<f64>, q: &DVector<f64>) -> f64 {
        let diff = p - q;
        let scale = diff.amax();
        if scale == 0.0 {
            return 0.0;
        }
        (diff / scale).norm() * scale
    }
}

impl<F> Metric for F
where
    F: Fn(&DVector<f64>, &DVector<f64>) -> f64,
{
    #[inline]
    fn distance(&self, p: &DVector<f64>, q: &DVector<f64>) -> f64 {
        self(p, q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;
    use std::cell::Cell;

    #[test]
    fn euclidean_matches_pythagoras() {
        let p = dvector![0.0, 0.0, 0.0];
        let q = dvector![1.0, 2.0, 2.0];
        assert!((Euclidean.distance(&p, &q) - 3.0).abs() < 1e-12);
        assert!((Euclidean.distance(&q, &p) - 3.0).abs() < 1e-12);
        assert_eq!(Euclidean.distance(&p, &p), 0.0);
    }

    #[test]
    fn euclidean_does_not_overflow_on_huge_coordinates() {
        let p = dvector![1e200, 0.0];
        let q = dvector![-1e200, 0.0];
        let d = Euclidean.distance(&p, &q);
        assert!(((d - 2e200) / 2e200).abs() < 1e-12);
        let far = Euclidean.distance(&dvector![3e160, 4e160], &dvector![0.0, 0.0]);
        assert!(((far - 5e160) / 5e160).abs() < 1e-12);
        // The difference itself overflows here.
        let d = Euclidean.distance(&dvector![f64::MAX], &dvector![-f64::MAX]);
        assert!(!d.is_finite());
    }

    #[test]
    fn closures_are_metrics() {
        let calls = Cell::new(0usize);
        let counting = |p: &DVector<f64>, q: &DVector<f64>| {
            calls.set(calls.get() + 1);
            Euclidean.distance(p, q)
        };
        let d = counting.distance(&dvector![0.0, 0.0], &dvector![3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(calls.get(), 1);
    }
}
