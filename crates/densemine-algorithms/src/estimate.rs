//! Per-edge density (lambda) bound estimation
//!
//! For every edge seen in at least one triangle, the estimator maintains a
//! closed interval of candidate density values and narrows it through
//! repeated rounds of support counting. An edge supports one of its
//! triangles when its own representative value is the minimum (or tied
//! minimum) among the three edges of the triangle.

use crate::model::{AugmentedRange, Edge, Range, Triangle};
use rustc_hash::{FxHashMap, FxHashSet};

/// Outcome of an estimation run.
///
/// When the iteration cap is hit before a fixed point, `converged` is
/// false and the bounds are a valid but possibly non-tight estimate;
/// callers must inspect the flag rather than assume tightness.
#[derive(Debug, Clone)]
pub struct DensityEstimate {
    /// Final per-edge bound intervals; lower is kappa, upper is lambda.
    pub edges: FxHashMap<Edge, Range>,
    /// Whether a round finished with every edge settled.
    pub converged: bool,
    /// Number of rounds actually run.
    pub rounds: u32,
}

/// An estimator of per-edge density bounds over a triangle set.
pub trait DensityEstimator {
    fn estimate(&self, triangles: &FxHashSet<Triangle>) -> DensityEstimate;
}

/// Narrowing policy applied after each support-counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Narrowing {
    /// Decrement the upper bound while support falls short of it.
    /// Converges in O(max upper) rounds.
    Sequential,
    /// Halve the interval around the medium. Converges in
    /// O(log(max upper)) rounds at the cost of tracking both bounds.
    Binary,
}

/// Seed every edge of the triangle set with lower=1 and upper equal to
/// the number of triangles it participates in.
fn initial_bounds(triangles: &FxHashSet<Triangle>) -> FxHashMap<Edge, AugmentedRange> {
    let mut edges: FxHashMap<Edge, AugmentedRange> = FxHashMap::default();
    for t in triangles {
        for e in t.edges() {
            edges
                .entry(e)
                .and_modify(|r| r.bounds.upper += 1)
                .or_insert_with(|| AugmentedRange::new(1, 1));
        }
    }
    edges
}

fn converge(
    triangles: &FxHashSet<Triangle>,
    iterations: u32,
    narrowing: Narrowing,
) -> DensityEstimate {
    let mut edges = initial_bounds(triangles);
    let mut rounds = 0;
    let mut converged = false;

    while rounds < iterations {
        // Support phase: each triangle votes for its minimum-valued edges
        for t in triangles {
            let e = t.edges();
            let reps = e.map(|edge| {
                let bounds = edges[&edge].bounds;
                match narrowing {
                    Narrowing::Sequential => bounds.upper,
                    Narrowing::Binary => bounds.medium(),
                }
            });

            for i in 0..3 {
                if reps[i] <= reps[(i + 1) % 3].min(reps[(i + 2) % 3]) {
                    if let Some(r) = edges.get_mut(&e[i]) {
                        r.support += 1;
                    }
                }
            }
        }

        // Narrowing phase; support never carries across rounds
        let mut settled = true;
        for r in edges.values_mut() {
            match narrowing {
                Narrowing::Sequential => {
                    if r.support < r.bounds.upper {
                        r.bounds.upper -= 1;
                        settled = false;
                    }
                }
                Narrowing::Binary => {
                    if r.bounds.lower < r.bounds.upper {
                        let medium = r.bounds.medium();
                        if r.support < medium {
                            r.bounds.upper = medium - 1;
                        } else {
                            r.bounds.lower = medium;
                        }
                        settled = false;
                    }
                }
            }
            r.support = 0;
        }

        rounds += 1;
        if settled {
            converged = true;
            break;
        }
    }

    DensityEstimate {
        edges: edges.into_iter().map(|(e, r)| (e, r.bounds)).collect(),
        converged,
        rounds,
    }
}

/// Sequential estimator, decrementing upper bounds one unit per round.
pub struct SequentialEstimator {
    iterations: u32,
}

impl SequentialEstimator {
    pub fn new(iterations: u32) -> Self {
        SequentialEstimator { iterations }
    }
}

impl Default for SequentialEstimator {
    fn default() -> Self {
        SequentialEstimator::new(10)
    }
}

impl DensityEstimator for SequentialEstimator {
    fn estimate(&self, triangles: &FxHashSet<Triangle>) -> DensityEstimate {
        converge(triangles, self.iterations, Narrowing::Sequential)
    }
}

/// Binary-search estimator, halving bound intervals each round.
pub struct BinaryEstimator {
    iterations: u32,
}

impl BinaryEstimator {
    pub fn new(iterations: u32) -> Self {
        BinaryEstimator { iterations }
    }
}

impl Default for BinaryEstimator {
    fn default() -> Self {
        BinaryEstimator::new(10)
    }
}

impl DensityEstimator for BinaryEstimator {
    fn estimate(&self, triangles: &FxHashSet<Triangle>) -> DensityEstimate {
        converge(triangles, self.iterations, Narrowing::Binary)
    }
}
