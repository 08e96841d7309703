//! Partitioned triangle listing
//!
//! Replicates edges across vertex partitions, lists triangles per shard
//! with a shard-local triangulator, and dedupes the triangles rediscovered
//! by overlapping shards into one canonical set.

use crate::partition::VertexPartitioner;
use crate::shuffle::{group_by_key, reduce_groups};
use densemine_algorithms::{Edge, Forward, Triangle, Triangulator};
use rustc_hash::FxHashSet;

/// List every triangle of the graph using the forward algorithm per shard.
pub fn triangulate(edges: &FxHashSet<Edge>, rho: u32) -> FxHashSet<Triangle> {
    triangulate_with(edges, rho, &Forward)
}

/// List every triangle of the graph with a caller-chosen triangulator.
pub fn triangulate_with<T>(edges: &FxHashSet<Edge>, rho: u32, triangulator: &T) -> FxHashSet<Triangle>
where
    T: Triangulator + Sync,
{
    let partitioner = VertexPartitioner::new(rho);
    let shards = group_by_key(edges.iter().flat_map(|&e| partitioner.replicate(e)));

    // Set semantics on the shard absorb replica duplicates; the final
    // collect dedupes triangles found by more than one shard
    reduce_groups(shards, |_key, shard_edges| {
        let shard: FxHashSet<Edge> = shard_edges.into_iter().collect();
        triangulator.list(&shard).into_iter().collect()
    })
    .into_iter()
    .collect()
}
