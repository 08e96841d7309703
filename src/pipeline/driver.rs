//! Convergence driver
//!
//! Sequences the distributed stages: partitioned triangulation, bound
//! seeding, repeated support/search rounds until a global fixed point or
//! the iteration cap, then subgraph enumeration. A round is atomic; the
//! driver never retries and only decides whether to issue the next one.

use crate::config::MinerConfig;
use crate::pipeline::enumeration::{enumerate_dense_subgraphs, DenseSubgraph};
use crate::pipeline::{estimation, triangulation, PipelineError};
use densemine_algorithms::{DisjointSetEnumerator, Edge, Range};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{info, warn};

/// Final observable artifact of a mining run.
#[derive(Debug, Clone)]
pub struct MiningResult {
    /// Converged (kappa, lambda) interval per edge; only edges seen in at
    /// least one triangle appear.
    pub edges: FxHashMap<Edge, Range>,

    /// Maximal connected subgraphs per lambda group, densest first.
    pub subgraphs: Vec<DenseSubgraph>,

    /// Convergence rounds actually run.
    pub rounds: u32,

    /// Edges still narrowing when the run stopped; zero when converged.
    pub unconverged: usize,

    /// False when the iteration cap cut the run short, in which case the
    /// intervals are valid but possibly non-tight.
    pub converged: bool,
}

/// The mining pipeline, configured once and reusable across edge sets.
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Miner { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Run the full pipeline over a normalized edge set.
    pub fn mine(&self, edges: &FxHashSet<Edge>) -> Result<MiningResult, PipelineError> {
        let rho = self.config.effective_partitions();

        let triangles = triangulation::triangulate(edges, rho);
        info!(
            edges = edges.len(),
            triangles = triangles.len(),
            rho,
            "triangulation finished"
        );

        let mut records = estimation::initial_bounds(&triangles);
        let mut rounds = 0;
        let mut unconverged = 0;

        while rounds < self.config.max_iterations {
            let outcome = estimation::round(records, self.config.search_mode)?;
            records = outcome.records;
            unconverged = outcome.unconverged;
            rounds += 1;
            info!(round = rounds, unconverged, "search round finished");

            if unconverged == 0 {
                break;
            }
        }

        let converged = unconverged == 0;
        if !converged {
            warn!(
                rounds,
                unconverged, "iteration cap reached before convergence; bounds are not tight"
            );
        }

        let bounds = estimation::edge_bounds(&records);
        let subgraphs = enumerate_dense_subgraphs(&bounds, &DisjointSetEnumerator);

        Ok(MiningResult {
            edges: bounds,
            subgraphs,
            rounds,
            unconverged,
            converged,
        })
    }
}
