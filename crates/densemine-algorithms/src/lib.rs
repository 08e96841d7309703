pub mod model;
pub mod triangulate;
pub mod estimate;
pub mod enumerate;

pub use model::{AugmentedRange, Edge, Range, Triangle, VertexId};
pub use triangulate::{Forward, NodeIterator, Triangulator};
pub use estimate::{BinaryEstimator, DensityEstimate, DensityEstimator, SequentialEstimator};
pub use enumerate::{DisjointSetEnumerator, Enumerator, NaiveEnumerator};
