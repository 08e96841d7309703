//! Dense subgraph enumeration over converged edges
//!
//! Edges are grouped by their final lambda value; within each group the
//! enumerator partitions them into maximal vertex-connected subgraphs,
//! each carrying a (lambda, id) key.

use crate::shuffle::group_by_key;
use densemine_algorithms::{Edge, Enumerator, Range};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// A maximal connected subgraph of edges sharing one lambda value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenseSubgraph {
    /// The density value all member edges converged to
    pub lambda: u32,

    /// Synthetic subgraph id, unique within the lambda group
    pub id: usize,

    /// Member edges, sorted canonically
    pub edges: Vec<Edge>,
}

/// Group converged edges by lambda and split each group into maximal
/// connected subgraphs, ordered by descending density.
pub fn enumerate_dense_subgraphs<E>(
    bounds: &FxHashMap<Edge, Range>,
    enumerator: &E,
) -> Vec<DenseSubgraph>
where
    E: Enumerator + Sync,
{
    let by_lambda = group_by_key(bounds.iter().map(|(&edge, range)| (range.upper, edge)));

    let mut subgraphs: Vec<DenseSubgraph> = by_lambda
        .into_par_iter()
        .flat_map_iter(|(lambda, edges)| {
            let group: FxHashSet<Edge> = edges.into_iter().collect();
            enumerator
                .enumerate(&group)
                .into_iter()
                .map(move |(id, members)| {
                    let mut edges: Vec<Edge> = members.into_iter().collect();
                    edges.sort_unstable();
                    DenseSubgraph { lambda, id, edges }
                })
        })
        .collect();

    subgraphs.sort_by(|a, b| b.lambda.cmp(&a.lambda).then(a.id.cmp(&b.id)));
    subgraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use densemine_algorithms::DisjointSetEnumerator;

    fn bounds(entries: &[(u32, u32, u32)]) -> FxHashMap<Edge, Range> {
        entries
            .iter()
            .map(|&(a, b, lambda)| (Edge::new(a, b), Range::new(lambda, lambda)))
            .collect()
    }

    #[test]
    fn test_groups_split_by_lambda_before_connectivity() {
        // Edges (1,2) and (2,3) touch but carry different lambdas
        let bounds = bounds(&[(1, 2, 2), (2, 3, 1), (3, 4, 1)]);
        let subgraphs = enumerate_dense_subgraphs(&bounds, &DisjointSetEnumerator);

        assert_eq!(subgraphs.len(), 2);
        assert_eq!(subgraphs[0].lambda, 2);
        assert_eq!(subgraphs[0].edges, vec![Edge::new(1, 2)]);
        assert_eq!(subgraphs[1].lambda, 1);
        assert_eq!(subgraphs[1].edges, vec![Edge::new(2, 3), Edge::new(3, 4)]);
    }

    #[test]
    fn test_partition_covers_input_exactly() {
        let bounds = bounds(&[
            (1, 2, 1), (2, 3, 1), (5, 6, 1), (7, 8, 2), (8, 9, 2), (10, 11, 2),
        ]);
        let subgraphs = enumerate_dense_subgraphs(&bounds, &DisjointSetEnumerator);

        let mut covered = FxHashSet::default();
        for s in &subgraphs {
            for e in &s.edges {
                assert!(covered.insert(*e));
            }
        }
        assert_eq!(covered.len(), bounds.len());
        // Two components per lambda group
        assert_eq!(subgraphs.len(), 4);
        // Ordered by descending lambda
        assert!(subgraphs.windows(2).all(|w| w[0].lambda >= w[1].lambda));
    }
}
