//! The distributed mining pipeline
//!
//! Stages are pure functions over record sets, wired together through the
//! shuffle: partitioned triangulation, bounding, repeated support/search
//! rounds, and final subgraph enumeration. The [`driver::Miner`] sequences
//! them and owns the convergence loop.

pub mod driver;
pub mod enumeration;
pub mod estimation;
pub mod local;
pub mod triangulation;

use densemine_algorithms::Triangle;
use thiserror::Error;

/// Failures of the pipeline.
///
/// Malformed input records and non-convergence are not errors: the former
/// are dropped at ingestion, the latter is reported through
/// [`MiningResult`]. An incomplete triangle group means the grouping
/// primitive violated its contract and is fatal.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed reading edge records: {0}")]
    Io(#[from] std::io::Error),

    #[error("triangle {0} regrouped with bounds for {1} edges instead of 3")]
    IncompleteTriangleGroup(Triangle, usize),
}

pub use driver::{Miner, MiningResult};
pub use enumeration::DenseSubgraph;
