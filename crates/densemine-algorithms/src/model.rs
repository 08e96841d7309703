//! Core value types for dense subgraph mining

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identifier. Vertices carry no attributes beyond identity.
pub type VertexId = u32;

/// An undirected edge between two distinct vertices.
///
/// The pair is always held in canonical ascending order (`v <= u`),
/// so equality and hashing depend only on the unordered pair.
/// Self-loops are invalid and must be rejected at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// First vertex, the smaller endpoint
    pub v: VertexId,

    /// Second vertex, the larger endpoint
    pub u: VertexId,
}

impl Edge {
    /// Create an edge, ordering the endpoints canonically.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert_ne!(a, b, "self-loops must be dropped at ingestion");
        if a <= b {
            Edge { v: a, u: b }
        } else {
            Edge { v: b, u: a }
        }
    }

    /// Whether the edge is anchored at the given vertex.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.v == vertex || self.u == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.v, self.u)
    }
}

/// An unordered triple of distinct vertices forming a triangle.
///
/// Canonicalized to ascending order (`v <= u <= w`); the three pairs
/// (v,u), (u,w), (v,w) are each valid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex, the smallest
    pub v: VertexId,

    /// Second vertex
    pub u: VertexId,

    /// Third vertex, the largest
    pub w: VertexId,
}

impl Triangle {
    /// Create a triangle, ordering the vertices canonically.
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut t = [a, b, c];
        t.sort_unstable();
        Triangle {
            v: t[0],
            u: t[1],
            w: t[2],
        }
    }

    /// The three edges the triangle is induced by, in canonical form.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.v, self.u),
            Edge::new(self.u, self.w),
            Edge::new(self.v, self.w),
        ]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.v, self.u, self.w)
    }
}

/// A closed integer interval `[lower, upper]` holding the current
/// uncertainty in an edge's density value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    /// Lower bound (kappa)
    pub lower: u32,

    /// Upper bound (lambda)
    pub upper: u32,
}

impl Range {
    pub fn new(lower: u32, upper: u32) -> Self {
        Range { lower, upper }
    }

    /// Binary-search midpoint biased toward the upper bound.
    pub fn medium(&self) -> u32 {
        (self.lower + self.upper + 1) / 2
    }

    /// Whether the interval has collapsed to a single value.
    pub fn is_settled(&self) -> bool {
        self.lower == self.upper
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lower, self.upper)
    }
}

/// A bound interval augmented by the transient per-round support counter.
///
/// Support is reset to zero at the end of every convergence round and
/// never carries across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AugmentedRange {
    pub bounds: Range,
    pub support: u32,
}

impl AugmentedRange {
    pub fn new(lower: u32, upper: u32) -> Self {
        AugmentedRange {
            bounds: Range::new(lower, upper),
            support: 0,
        }
    }
}
