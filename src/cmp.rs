use crate::fingerprint::Fingerprint;
use crate::graph::GossipGraph;

use petgraph::{
    graph::{Graph, IndexType},
    Undirected,
};

/// Isomorphism verdict from fingerprint comparison
///
/// A `false` verdict proves the graphs non-isomorphic. A `true` verdict
/// means the fingerprints coincide, which the algorithm treats as
/// isomorphic but does not prove.
pub trait PotentiallyIsomorphic {
    fn potentially_isomorphic(&self, other: &Self) -> bool;
}

impl PotentiallyIsomorphic for GossipGraph {
    fn potentially_isomorphic(&self, other: &Self) -> bool {
        // cheap short-circuit before any propagation runs
        if self.node_count() != other.node_count() {
            return false;
        }
        self.fingerprint() == other.fingerprint()
    }
}

impl<N, E, Ix: IndexType> PotentiallyIsomorphic for Graph<N, E, Undirected, Ix> {
    fn potentially_isomorphic(&self, other: &Self) -> bool {
        GossipGraph::from(self).potentially_isomorphic(&GossipGraph::from(other))
    }
}

/// Convenience wrapper around [PotentiallyIsomorphic]
pub fn potentially_isomorphic<G: PotentiallyIsomorphic>(g1: &G, g2: &G) -> bool {
    g1.potentially_isomorphic(g2)
}
