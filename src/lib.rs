//! Densemine
//!
//! Distributed dense subgraph mining over triangle connectivity. For every
//! edge of a large undirected graph the pipeline discovers lambda, the
//! density of the densest triangle-connected subgraph the edge can anchor,
//! then groups edges of equal lambda into maximal connected dense subgraphs.
//!
//! # Architecture
//!
//! Input graphs are assumed too large for one process's memory to hold as a
//! whole, so the work is decomposed into partitions exchanged through a
//! group-by-key shuffle:
//!
//! - [`partition`] replicates each edge into every 3-subset of vertex
//!   buckets covering both endpoints, so every triangle lands fully inside
//!   at least one partition.
//! - [`pipeline::triangulation`] lists triangles per shard with the forward
//!   algorithm and dedupes the replicas.
//! - [`pipeline::estimation`] runs repeated support-counting and
//!   bound-narrowing rounds, regrouping by triangle and by edge, until every
//!   edge's density interval settles or the iteration cap is reached.
//! - [`pipeline::enumeration`] merges edges sharing a final lambda into
//!   maximal connected subgraphs.
//!
//! Each shard's round is a pure function over its input set; shards run in
//! parallel and the shuffle boundary is the only synchronization point.

pub mod config;
pub mod ingest;
pub mod partition;
pub mod pipeline;
pub mod shuffle;

pub use config::{MinerConfig, SearchMode};
pub use densemine_algorithms as algorithms;
pub use densemine_algorithms::{Edge, Range, Triangle, VertexId};
pub use pipeline::{DenseSubgraph, Miner, MiningResult, PipelineError};

/// Deduplicated edge set, the unit the pipeline ingests and shards.
pub type EdgeSet = rustc_hash::FxHashSet<Edge>;

/// Library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
