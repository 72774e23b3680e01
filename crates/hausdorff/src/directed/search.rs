//! Early-break search over randomly ordered point sets.
//!
//! For each outer point the inner set is scanned for its nearest neighbour,
//! but the scan stops as soon as some inner point is closer than the running
//! bound `cmax`: that outer point can no longer raise the answer. A minimum
//! from an interrupted scan is never accepted into the bound.
//!
//! A distance that comes out NaN or infinite aborts the query with
//! `DistanceOverflow` rather than being skipped.
//!
//! Visiting both sets in random order makes such early breaks likely, which
//! brings the expected cost close to linear; the worst case stays `|A|·|B|`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{HausdorffError, Result, SetRole};
use crate::metric::{Euclidean, Metric};
use crate::points::{validate_pair, PointSet};

use super::types::{DirectedHausdorff, SearchCfg, SearchTrace};

/// Directed Hausdorff engine over a pluggable metric.
///
/// Inputs are only borrowed; shuffling permutes private index arrays, so the
/// caller's point order is left untouched.
#[derive(Clone, Debug, Default)]
pub struct HausdorffEngine<M = Euclidean> {
    metric: M,
    cfg: SearchCfg,
}

impl HausdorffEngine<Euclidean> {
    /// Euclidean engine with the given configuration.
    pub fn with_cfg(cfg: SearchCfg) -> Self {
        Self::new(Euclidean, cfg)
    }
}

impl<M: Metric> HausdorffEngine<M> {
    pub fn new(metric: M, cfg: SearchCfg) -> Self {
        Self { metric, cfg }
    }

    pub fn cfg(&self) -> SearchCfg {
        self.cfg
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// `h(a, b) = max_{p in a} min_{q in b} d(p, q)`.
    pub fn directed(&self, a: &PointSet, b: &PointSet) -> Result<DirectedHausdorff> {
        let mut rng = self.cfg.rng();
        self.directed_with_rng(a, b, &mut rng)
    }

    /// Like [`directed`](Self::directed) but drawing the visitation order
    /// from `rng` instead of the configured seed.
    pub fn directed_with_rng<R: Rng + ?Sized>(
        &self,
        a: &PointSet,
        b: &PointSet,
        rng: &mut R,
    ) -> Result<DirectedHausdorff> {
        self.run(a, b, rng, false).map(|(res, _)| res)
    }

    /// Like [`directed`](Self::directed), also returning the bound after every
    /// outer point and the evaluation counters.
    pub fn directed_traced(
        &self,
        a: &PointSet,
        b: &PointSet,
    ) -> Result<(DirectedHausdorff, SearchTrace)> {
        let mut rng = self.cfg.rng();
        self.run(a, b, &mut rng, true)
    }

    fn run<R: Rng + ?Sized>(
        &self,
        a: &PointSet,
        b: &PointSet,
        rng: &mut R,
        record: bool,
    ) -> Result<(DirectedHausdorff, SearchTrace)> {
        let dim = validate_pair(a, b)?;
        let mut order_a: Vec<usize> = (0..a.len()).collect();
        let mut order_b: Vec<usize> = (0..b.len()).collect();
        if self.cfg.shuffle {
            order_a.shuffle(rng);
            order_b.shuffle(rng);
        }
        let search = Search {
            metric: &self.metric,
            a,
            b,
            order_a,
            order_b,
            trace: SearchTrace {
                cmax_history: Vec::with_capacity(if record { a.len() } else { 0 }),
                ..SearchTrace::default()
            },
            record,
        };
        let (res, trace) = search.run()?;
        tracing::debug!(
            n_a = a.len(),
            n_b = b.len(),
            dim,
            distance = res.distance,
            distance_evals = trace.distance_evals,
            early_exits = trace.early_exits,
            "directed_hausdorff"
        );
        Ok((res, trace))
    }
}

/// One query's worth of state: the borrowed sets, their visitation order and
/// the counters.
struct Search<'a, M> {
    metric: &'a M,
    a: &'a PointSet,
    b: &'a PointSet,
    order_a: Vec<usize>,
    order_b: Vec<usize>,
    trace: SearchTrace,
    record: bool,
}

impl<'a, M: Metric> Search<'a, M> {
    fn run(mut self) -> Result<(DirectedHausdorff, SearchTrace)> {
        let mut best: Option<DirectedHausdorff> = None;
        for &i in &self.order_a {
            let cmax = best.map_or(0.0, |b| b.distance);
            let p = &self.a[i];
            let mut cmin = f64::INFINITY;
            let mut nearest = None;
            let mut broke_early = false;
            for &j in &self.order_b {
                let d = self.metric.distance(p, &self.b[j]);
                self.trace.distance_evals += 1;
                if !d.is_finite() {
                    return Err(HausdorffError::DistanceOverflow { outer: i, inner: j });
                }
                if d < cmax {
                    broke_early = true;
                    break;
                }
                if d < cmin {
                    cmin = d;
                    nearest = Some(j);
                }
            }
            if broke_early {
                self.trace.early_exits += 1;
            } else if let Some(j) = nearest {
                // The first full scan seeds the realizing pair even when it
                // leaves the bound at zero.
                if cmin > cmax || best.is_none() {
                    tracing::trace!(outer = i, from = cmax, to = cmin, "bound raised");
                    best = Some(DirectedHausdorff {
                        distance: cmin,
                        outer_index: i,
                        inner_index: j,
                    });
                }
            }
            if self.record {
                self.trace.cmax_history.push(best.map_or(0.0, |b| b.distance));
            }
        }
        let res = best.ok_or(HausdorffError::EmptySet { set: SetRole::Outer })?;
        Ok((res, self.trace))
    }
}
