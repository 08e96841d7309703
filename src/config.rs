//! Configuration surface of the mining pipeline

use serde::{Deserialize, Serialize};

/// Bound narrowing policy applied in every search round.
///
/// Both policies converge to the same final lambda; binary search takes
/// O(log(max upper)) rounds against O(max upper) for sequential, at the
/// cost of maintaining both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Sequential,
    Binary,
}

/// Options consumed by the mining pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Number of disjoint vertex buckets (rho). Values below 3 are
    /// clamped up to 3, the minimum that covers a triangle.
    pub partitions: u32,

    /// Narrowing policy for the convergence rounds.
    pub search_mode: SearchMode,

    /// Maximum number of convergence rounds before giving up with a
    /// valid but possibly non-tight estimate.
    pub max_iterations: u32,
}

impl Default for MinerConfig {
    fn default() -> Self {
        MinerConfig {
            partitions: 3,
            search_mode: SearchMode::default(),
            max_iterations: 10,
        }
    }
}

impl MinerConfig {
    /// The bucket count actually used, after clamping.
    pub fn effective_partitions(&self) -> u32 {
        self.partitions.max(3)
    }
}
