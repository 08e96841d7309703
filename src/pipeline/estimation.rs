//! Distributed lambda estimation rounds
//!
//! The unit of exchange is a bound record: a triangle paired with the
//! current density interval of one of its edges. The support phase groups
//! records by triangle and votes for minimum-valued edges; the search
//! phase regroups by edge, narrows the interval under the configured
//! policy, and re-emits records for the next round. Support never carries
//! across rounds; it is recomputed from scratch each support phase.

use crate::config::SearchMode;
use crate::pipeline::PipelineError;
use crate::shuffle::{group_by_key, reduce_groups, try_reduce_groups};
use densemine_algorithms::{Edge, Range, Triangle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// A triangle paired with the bound interval of one of its edges.
pub type BoundRecord = (Triangle, (Edge, Range));

/// One edge's contribution leaving the support phase.
struct SupportRecord {
    bounds: Range,
    triangle: Triangle,
    vote: u32,
}

/// Result of one support-count plus bound-narrow round.
#[derive(Debug)]
pub struct RoundOutcome {
    /// Records for the next round, carrying the narrowed bounds.
    pub records: Vec<BoundRecord>,
    /// Edges narrowed this round; zero means a global fixed point.
    pub unconverged: usize,
}

/// Seed bound records from the deduplicated triangle set: each edge gets
/// lower=1 and upper equal to the number of triangles containing it.
pub fn initial_bounds(triangles: &FxHashSet<Triangle>) -> Vec<BoundRecord> {
    let by_edge = group_by_key(
        triangles
            .iter()
            .flat_map(|&t| t.edges().map(move |e| (e, t))),
    );

    reduce_groups(by_edge, |&edge, members| {
        let lambda = members.len() as u32;
        members
            .into_iter()
            .map(|t| (t, (edge, Range::new(1, lambda))))
            .collect()
    })
}

/// Union-reconcile two observations of the same edge's bounds.
fn reconcile(into: &mut Range, observed: Range) {
    into.lower = into.lower.min(observed.lower);
    into.upper = into.upper.max(observed.upper);
}

/// Support phase: every triangle votes for each of its edges whose
/// representative value (upper bound, or the medium in binary mode) is at
/// most the minimum of the other two edges' representative values.
fn count_support(
    records: Vec<BoundRecord>,
    mode: SearchMode,
) -> Result<Vec<(Edge, SupportRecord)>, PipelineError> {
    let by_triangle = group_by_key(records);

    try_reduce_groups(by_triangle, |&triangle, bounds| {
        // Replicas of the same edge reconcile to the union of intervals
        let mut edges: FxHashMap<Edge, Range> = FxHashMap::default();
        for (edge, range) in bounds {
            edges
                .entry(edge)
                .and_modify(|r| reconcile(r, range))
                .or_insert(range);
        }
        if edges.len() != 3 {
            return Err(PipelineError::IncompleteTriangleGroup(triangle, edges.len()));
        }

        let e = triangle.edges();
        let reps = e.map(|edge| match mode {
            SearchMode::Sequential => edges[&edge].upper,
            SearchMode::Binary => edges[&edge].medium(),
        });

        Ok((0..3)
            .map(|i| {
                let vote = u32::from(reps[i] <= reps[(i + 1) % 3].min(reps[(i + 2) % 3]));
                (
                    e[i],
                    SupportRecord {
                        bounds: edges[&e[i]],
                        triangle,
                        vote,
                    },
                )
            })
            .collect())
    })
}

/// One full round: support counting, then per-edge bound narrowing.
pub fn round(records: Vec<BoundRecord>, mode: SearchMode) -> Result<RoundOutcome, PipelineError> {
    let supports = count_support(records, mode)?;
    let by_edge = group_by_key(supports);

    let narrowed: Vec<(Vec<BoundRecord>, bool)> = by_edge
        .into_par_iter()
        .map(|(edge, contributions)| {
            let mut kappa = 0;
            let mut lambda = 0;
            let mut total = 0;
            let mut triangles = FxHashSet::default();
            for c in contributions {
                kappa = kappa.max(c.bounds.lower);
                lambda = lambda.max(c.bounds.upper);
                total += c.vote;
                triangles.insert(c.triangle);
            }

            let mut moved = false;
            match mode {
                SearchMode::Sequential => {
                    if total < lambda {
                        lambda -= 1;
                        moved = true;
                    }
                }
                SearchMode::Binary => {
                    if kappa < lambda {
                        let medium = (kappa + lambda + 1) / 2;
                        if total < medium {
                            lambda = medium - 1;
                        } else {
                            kappa = medium;
                        }
                        moved = true;
                    }
                }
            }

            let records = triangles
                .into_iter()
                .map(|t| (t, (edge, Range::new(kappa, lambda))))
                .collect();
            (records, moved)
        })
        .collect();

    let mut records = Vec::new();
    let mut unconverged = 0;
    for (edge_records, moved) in narrowed {
        if moved {
            unconverged += 1;
        }
        records.extend(edge_records);
    }

    Ok(RoundOutcome { records, unconverged })
}

/// Collapse bound records into the final per-edge interval map.
pub fn edge_bounds(records: &[BoundRecord]) -> FxHashMap<Edge, Range> {
    let mut bounds: FxHashMap<Edge, Range> = FxHashMap::default();
    for &(_, (edge, range)) in records {
        bounds
            .entry(edge)
            .and_modify(|r| reconcile(r, range))
            .or_insert(range);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::triangulation::triangulate;

    fn k4_records() -> Vec<BoundRecord> {
        let edges = [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]
            .iter()
            .map(|&(a, b)| Edge::new(a, b))
            .collect();
        initial_bounds(&triangulate(&edges, 3))
    }

    #[test]
    fn test_initial_bounds_count_incident_triangles() {
        let records = k4_records();
        // 4 triangles times 3 edges
        assert_eq!(records.len(), 12);
        for (_, (_, range)) in records {
            assert_eq!(range, Range::new(1, 2));
        }
    }

    #[test]
    fn test_sequential_round_reaches_fixed_point_on_k4() {
        let outcome = round(k4_records(), SearchMode::Sequential).unwrap();
        assert_eq!(outcome.unconverged, 0);
        for (_, (_, range)) in outcome.records {
            assert_eq!(range.upper, 2);
        }
    }

    #[test]
    fn test_binary_rounds_settle_k4_in_two() {
        let first = round(k4_records(), SearchMode::Binary).unwrap();
        assert_eq!(first.unconverged, 6);
        let second = round(first.records, SearchMode::Binary).unwrap();
        assert_eq!(second.unconverged, 0);

        let bounds = edge_bounds(&second.records);
        assert_eq!(bounds.len(), 6);
        for range in bounds.values() {
            assert_eq!(*range, Range::new(2, 2));
        }
    }

    #[test]
    fn test_incomplete_triangle_group_is_fatal() {
        // A triangle regrouped with bounds for only one of its edges
        let t = Triangle::new(1, 2, 3);
        let records = vec![(t, (Edge::new(1, 2), Range::new(1, 1)))];
        let err = round(records, SearchMode::Sequential).unwrap_err();
        assert!(matches!(err, PipelineError::IncompleteTriangleGroup(tri, 1) if tri == t));
    }

    #[test]
    fn test_replica_bounds_union_reconcile() {
        let t = Triangle::new(1, 2, 3);
        let mut records = Vec::new();
        for e in t.edges() {
            records.push((t, (e, Range::new(1, 1))));
        }
        // A stale replica of edge (1,2) with a wider interval
        records.push((t, (Edge::new(1, 2), Range::new(1, 3))));

        let outcome = round(records, SearchMode::Binary).unwrap();
        let bounds = edge_bounds(&outcome.records);
        // Reconciled upper is 3, so the first narrowing works on [1,3]
        assert_eq!(bounds[&Edge::new(1, 2)], Range::new(1, 1));
    }
}
