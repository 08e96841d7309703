//! Connected subgraph enumeration
//!
//! Partitions a set of edges sharing one final lambda value into maximal
//! vertex-connected components, each issued a synthetic id.

use crate::model::{Edge, VertexId};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

/// An enumerator of maximal connected edge sets.
///
/// The union of the returned sets equals the input set exactly, every set
/// is internally connected, and no two sets share a vertex.
pub trait Enumerator {
    fn enumerate(&self, edges: &FxHashSet<Edge>) -> IndexMap<usize, FxHashSet<Edge>>;
}

/// Union-find over vertex ids with path compression and union by rank.
struct UnionFind {
    parent: FxHashMap<VertexId, VertexId>,
    rank: FxHashMap<VertexId, u32>,
}

impl UnionFind {
    fn new() -> Self {
        UnionFind {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
        }
    }

    fn insert(&mut self, v: VertexId) {
        self.parent.entry(v).or_insert(v);
        self.rank.entry(v).or_insert(0);
    }

    fn find(&mut self, v: VertexId) -> VertexId {
        let parent = self.parent[&v];
        if parent != v {
            let root = self.find(parent);
            self.parent.insert(v, root); // Path compression
            root
        } else {
            v
        }
    }

    fn union(&mut self, a: VertexId, b: VertexId) {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a != root_b {
            if self.rank[&root_a] < self.rank[&root_b] {
                self.parent.insert(root_a, root_b);
            } else if self.rank[&root_a] > self.rank[&root_b] {
                self.parent.insert(root_b, root_a);
            } else {
                self.parent.insert(root_b, root_a);
                *self.rank.entry(root_a).or_insert(0) += 1;
            }
        }
    }
}

/// Disjoint-set-union enumerator, the default.
///
/// Unions the endpoints of every edge, then groups edges by the root of
/// their first endpoint. Near-linear in the number of edges.
pub struct DisjointSetEnumerator;

impl Enumerator for DisjointSetEnumerator {
    fn enumerate(&self, edges: &FxHashSet<Edge>) -> IndexMap<usize, FxHashSet<Edge>> {
        let mut uf = UnionFind::new();
        for e in edges {
            uf.insert(e.v);
            uf.insert(e.u);
            uf.union(e.v, e.u);
        }

        let mut ids: FxHashMap<VertexId, usize> = FxHashMap::default();
        let mut subgraphs: IndexMap<usize, FxHashSet<Edge>> = IndexMap::new();
        for e in edges {
            let root = uf.find(e.v);
            let next = ids.len();
            let id = *ids.entry(root).or_insert(next);
            subgraphs.entry(id).or_default().insert(*e);
        }

        subgraphs
    }
}

/// Naive incremental-merge enumerator, kept as a drop-in alternative.
///
/// Scans every existing subgraph for each new edge, so worst case is
/// quadratic in the edge count; merged subgraphs are reissued a fresh id.
pub struct NaiveEnumerator;

impl Enumerator for NaiveEnumerator {
    fn enumerate(&self, edges: &FxHashSet<Edge>) -> IndexMap<usize, FxHashSet<Edge>> {
        let mut subgraphs: IndexMap<usize, FxHashSet<Edge>> = IndexMap::new();
        let mut next = 0;

        for &edge in edges {
            // Subgraphs anchored at either endpoint of the edge
            let anchored: Vec<usize> = subgraphs
                .iter()
                .filter(|(_, set)| set.iter().any(|e| e.touches(edge.v) || e.touches(edge.u)))
                .map(|(&id, _)| id)
                .collect();

            match anchored.len() {
                0 => {
                    let mut set = FxHashSet::default();
                    set.insert(edge);
                    subgraphs.insert(next, set);
                    next += 1;
                }
                1 => {
                    if let Some(set) = subgraphs.get_mut(&anchored[0]) {
                        set.insert(edge);
                    }
                }
                _ => {
                    let mut merged = FxHashSet::default();
                    merged.insert(edge);
                    for id in &anchored {
                        if let Some(set) = subgraphs.swap_remove(id) {
                            merged.extend(set);
                        }
                    }
                    subgraphs.insert(next, merged);
                    next += 1;
                }
            }
        }

        subgraphs
    }
}
