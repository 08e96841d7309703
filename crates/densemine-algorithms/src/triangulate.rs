//! Triangle listing over a shard-local edge set

use crate::model::{Edge, Triangle, VertexId};
use rustc_hash::{FxHashMap, FxHashSet};

/// A triangle lister over a deduplicated, loop-free edge set.
///
/// Implementations must enumerate every triangle of the induced graph
/// exactly once, in canonical form. `Forward` is the default; `NodeIterator`
/// is an interchangeable alternative with the same contract that favors
/// graphs with many large-degree hubs.
pub trait Triangulator {
    /// List all triangles within the graph induced by the given edge set.
    fn list(&self, edges: &FxHashSet<Edge>) -> FxHashSet<Triangle>;
}

/// Build the vertex neighborhood map of the induced graph.
fn neighborhoods(edges: &FxHashSet<Edge>) -> FxHashMap<VertexId, FxHashSet<VertexId>> {
    let mut n: FxHashMap<VertexId, FxHashSet<VertexId>> = FxHashMap::default();
    for e in edges {
        n.entry(e.v).or_default().insert(e.u);
        n.entry(e.u).or_default().insert(e.v);
    }
    n
}

/// The forward algorithm.
///
/// Ranks vertices in descending-degree order (ties broken by ascending id)
/// and grows, for each vertex, the set of already-processed neighbors that
/// ranked before it. A triangle is reported for every vertex found in the
/// intersection of the accumulated sets of an edge's endpoints. Runtime is
/// bounded by the sum over edges of the smaller endpoint degree, not by
/// all-pairs checking.
pub struct Forward;

impl Triangulator for Forward {
    fn list(&self, edges: &FxHashSet<Edge>) -> FxHashSet<Triangle> {
        let mut triangles = FxHashSet::default();
        let n = neighborhoods(edges);

        // Total order: highest degree first, ascending id among equals
        let mut order: Vec<VertexId> = n.keys().copied().collect();
        order.sort_unstable_by(|a, b| n[b].len().cmp(&n[a].len()).then(a.cmp(b)));

        // Accumulated earlier-ranked neighbor sets
        let mut acc: FxHashMap<VertexId, FxHashSet<VertexId>> = FxHashMap::default();

        for &v in &order {
            let dv = n[&v].len();
            for &u in &n[&v] {
                let du = n[&u].len();

                // Only cross edges toward later-ranked endpoints
                if du < dv || (du == dv && v < u) {
                    if let (Some(av), Some(au)) = (acc.get(&v), acc.get(&u)) {
                        for &w in au.intersection(av) {
                            triangles.insert(Triangle::new(v, u, w));
                        }
                    }
                    acc.entry(u).or_default().insert(v);
                }
            }
        }

        triangles
    }
}

/// The node-iterator algorithm.
///
/// For every vertex, checks each ordered pair of its neighbors for a
/// closing edge. The degree-based ordering rule charges every triangle
/// to exactly one of its vertices, so each is reported once.
pub struct NodeIterator;

impl Triangulator for NodeIterator {
    fn list(&self, edges: &FxHashSet<Edge>) -> FxHashSet<Triangle> {
        let mut triangles = FxHashSet::default();
        let n = neighborhoods(edges);

        for (&v, nv) in &n {
            let dv = nv.len();
            for &u in nv {
                let du = n[&u].len();
                if du > dv || (du == dv && v < u) {
                    for &w in nv {
                        let dw = n[&w].len();
                        if (dw > du || (dw == du && u < w)) && edges.contains(&Edge::new(u, w)) {
                            triangles.insert(Triangle::new(v, u, w));
                        }
                    }
                }
            }
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn edge_set(pairs: &[(VertexId, VertexId)]) -> FxHashSet<Edge> {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    /// All-triples reference count, for cross-checking the listers.
    fn brute_force(edges: &FxHashSet<Edge>) -> FxHashSet<Triangle> {
        let mut vertices: Vec<VertexId> = edges.iter().flat_map(|e| [e.v, e.u]).collect();
        vertices.sort_unstable();
        vertices.dedup();

        let mut triangles = FxHashSet::default();
        for (i, &a) in vertices.iter().enumerate() {
            for (j, &b) in vertices.iter().enumerate().skip(i + 1) {
                for &c in vertices.iter().skip(j + 1) {
                    if edges.contains(&Edge::new(a, b))
                        && edges.contains(&Edge::new(b, c))
                        && edges.contains(&Edge::new(a, c))
                    {
                        triangles.insert(Triangle::new(a, b, c));
                    }
                }
            }
        }
        triangles
    }

    // Fixtures carried from the original miner's unit suite
    fn complete() -> FxHashSet<Edge> {
        edge_set(&[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)])
    }

    fn cycle() -> FxHashSet<Edge> {
        edge_set(&[(1, 2), (2, 3), (3, 4), (1, 4)])
    }

    fn wheel() -> FxHashSet<Edge> {
        edge_set(&[(1, 4), (2, 4), (3, 4), (1, 2), (1, 3), (2, 3)])
    }

    fn star() -> FxHashSet<Edge> {
        edge_set(&[(1, 4), (2, 4), (3, 4)])
    }

    #[test]
    fn test_forward_trivial_graph() {
        assert!(Forward.list(&FxHashSet::default()).is_empty());
    }

    #[test]
    fn test_forward_complete_graph() {
        let triangles = Forward.list(&complete());
        assert_eq!(triangles.len(), 4);
        assert!(triangles.contains(&Triangle::new(1, 2, 3)));
        assert!(triangles.contains(&Triangle::new(1, 2, 4)));
        assert!(triangles.contains(&Triangle::new(1, 3, 4)));
        assert!(triangles.contains(&Triangle::new(2, 3, 4)));
    }

    #[test]
    fn test_forward_cycle_has_no_triangles() {
        assert!(Forward.list(&cycle()).is_empty());
    }

    #[test]
    fn test_forward_wheel_graph() {
        let triangles = Forward.list(&wheel());
        assert_eq!(triangles, brute_force(&wheel()));
        assert_eq!(triangles.len(), 4);
    }

    #[test]
    fn test_forward_star_has_no_triangles() {
        assert!(Forward.list(&star()).is_empty());
    }

    #[test]
    fn test_forward_disconnected_graph() {
        assert!(Forward.list(&edge_set(&[(1, 2), (3, 4)])).is_empty());
    }

    #[test]
    fn test_node_iterator_fixtures() {
        assert_eq!(NodeIterator.list(&complete()).len(), 4);
        assert!(NodeIterator.list(&cycle()).is_empty());
        assert_eq!(NodeIterator.list(&wheel()).len(), 4);
        assert!(NodeIterator.list(&star()).is_empty());
    }

    #[test]
    fn test_listers_match_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..40 {
            let vertices = rng.gen_range(4..30u32);
            let mut edges = FxHashSet::default();
            for a in 0..vertices {
                for b in (a + 1)..vertices {
                    if rng.gen_bool(0.3) {
                        edges.insert(Edge::new(a, b));
                    }
                }
            }

            let expected = brute_force(&edges);
            assert_eq!(Forward.list(&edges), expected);
            assert_eq!(NodeIterator.list(&edges), expected);
        }
    }
}
