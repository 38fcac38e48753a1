pub use crate::cmp::{potentially_isomorphic, PotentiallyIsomorphic};
pub use crate::error::GraphError;
pub use crate::fingerprint::{Fingerprint, GraphFingerprint, VertexFingerprint};
pub use crate::graph::GossipGraph;
