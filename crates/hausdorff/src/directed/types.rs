//! Configuration, results and search statistics for directed queries.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Visit both sets in a random order. Turning this off never changes the
    /// returned distance, only how often the early exit fires.
    pub shuffle: bool,
    /// Seed for the visitation order. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: None,
        }
    }
}

impl SearchCfg {
    /// Shuffled search with a reproducible order.
    pub fn seeded(seed: u64) -> Self {
        Self {
            shuffle: true,
            seed: Some(seed),
        }
    }

    /// Visit points in the caller's order.
    pub fn unshuffled() -> Self {
        Self {
            shuffle: false,
            seed: None,
        }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

/// Directed Hausdorff distance `h(A, B)` together with a pair realizing it.
///
/// Indices refer to the caller's original order. `outer_index` is a point of
/// A whose nearest neighbour in B is as far as any; `inner_index` is that
/// nearest neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectedHausdorff {
    pub distance: f64,
    pub outer_index: usize,
    pub inner_index: usize,
}

/// Counters and the running bound recorded during one search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTrace {
    /// Running bound `cmax` after each outer point, in visitation order.
    /// Only filled by traced queries.
    pub cmax_history: Vec<f64>,
    /// Number of metric evaluations.
    pub distance_evals: usize,
    /// Outer points whose inner scan stopped early.
    pub early_exits: usize,
}

impl SearchTrace {
    /// True when the recorded bound never decreased.
    pub fn is_monotone(&self) -> bool {
        self.cmax_history.windows(2).all(|w| w[0] <= w[1])
    }
}
