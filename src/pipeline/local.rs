//! Partition-scoped one-shot lambda estimation
//!
//! Runs the binary-search estimator against each partition's triangle set
//! only, never across partitions. Cheap to compute and useful as a seed or
//! approximate answer; an edge replicated into several shards may receive
//! different estimates, reported as the union interval of the observed
//! values.

use crate::partition::VertexPartitioner;
use crate::shuffle::{group_by_key, reduce_groups};
use densemine_algorithms::{BinaryEstimator, DensityEstimator, Edge, Forward, Range, Triangulator};
use rustc_hash::{FxHashMap, FxHashSet};

/// Iteration budget of the shard-local estimator.
pub const DEFAULT_LOCAL_ITERATIONS: u32 = 50;

/// Estimate per-edge lambda within each partition independently.
pub fn estimate_local(
    edges: &FxHashSet<Edge>,
    rho: u32,
    iterations: u32,
) -> FxHashMap<Edge, Range> {
    let partitioner = VertexPartitioner::new(rho);
    let shards = group_by_key(edges.iter().flat_map(|&e| partitioner.replicate(e)));

    let estimates = reduce_groups(shards, |_key, shard_edges| {
        let shard: FxHashSet<Edge> = shard_edges.into_iter().collect();
        let triangles = Forward.list(&shard);
        let estimate = BinaryEstimator::new(iterations).estimate(&triangles);
        estimate
            .edges
            .into_iter()
            .map(|(edge, range)| (edge, range.upper))
            .collect()
    });

    let mut merged: FxHashMap<Edge, Range> = FxHashMap::default();
    for (edge, lambda) in estimates {
        merged
            .entry(edge)
            .and_modify(|r| {
                r.lower = r.lower.min(lambda);
                r.upper = r.upper.max(lambda);
            })
            .or_insert_with(|| Range::new(lambda, lambda));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_estimate_matches_global_on_one_partition_graph() {
        // With rho=3 the only partition key is (0,1,2), so every shard-local
        // estimate is exact and the union interval collapses
        let edges: FxHashSet<Edge> = [(0, 1), (0, 2), (1, 2), (0, 4), (1, 4)]
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect();
        let estimates = estimate_local(&edges, 3, DEFAULT_LOCAL_ITERATIONS);
        for range in estimates.values() {
            assert!(range.is_settled());
        }
    }

    #[test]
    fn test_zero_triangle_edges_have_no_estimate() {
        let edges: FxHashSet<Edge> = [(1, 2), (2, 3), (3, 4), (1, 4)]
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect();
        assert!(estimate_local(&edges, 3, DEFAULT_LOCAL_ITERATIONS).is_empty());
    }
}
