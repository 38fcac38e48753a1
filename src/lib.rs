//! Gossip fingerprints for graph isomorphism testing.
//!
//! For every vertex of a simple undirected graph, a gossip simulation
//! records how structural information spreads outward from that vertex as
//! a sorted event timeline. The sorted multiset of all per-vertex
//! timelines is a label-invariant fingerprint of the whole graph: two
//! graphs with different fingerprints are certainly non-isomorphic, while
//! equal fingerprints are strong (but unproven) evidence of isomorphism.
//! Works directly on [petgraph](https://github.com/petgraph/petgraph)
//! undirected graphs.
//!
//! # Example
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use gossip_pet::prelude::*;
//!
//! // Two vertex labellings of the tree graph with two edges
//! let g1 = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
//! let g2 = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2)]);
//!
//! assert_eq!(g1.fingerprint(), g2.fingerprint());
//! assert!(g1.potentially_isomorphic(&g2));
//!
//! // A different tree on the same vertex count is told apart
//! let g3 = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (0, 3)]);
//! let g4 = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! assert!(!g3.potentially_isomorphic(&g4));
//! ```
//!
//! # Features
//!
//! * `serde-1`: Enables serialisation of
//!              [GraphFingerprint](fingerprint::GraphFingerprint) and
//!              related types using
//!              [serde](https://crates.io/crates/serde).
pub mod cmp;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod graph;
pub mod prelude;
mod propagate;

pub use cmp::{potentially_isomorphic, PotentiallyIsomorphic};
pub use fingerprint::{Fingerprint, GraphFingerprint};
pub use graph::GossipGraph;
