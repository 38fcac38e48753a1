use crate::event::Event;
use crate::graph::GossipGraph;
use crate::propagate::propagate;

use petgraph::{
    graph::{Graph, IndexType},
    Undirected,
};
use rayon::prelude::*;

/// Compute the gossip fingerprint of a graph
///
/// The fingerprint is a label-invariant of the graph: any relabeling of
/// the vertices produces an identical fingerprint. Unequal fingerprints
/// prove non-isomorphism; equal fingerprints are strong but unproven
/// evidence of isomorphism.
pub trait Fingerprint {
    fn fingerprint(&self) -> GraphFingerprint;
}

/// Sorted event timeline of one propagation run
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexFingerprint(Vec<Event>);

impl VertexFingerprint {
    pub(crate) fn new(mut timeline: Vec<Event>) -> Self {
        timeline.sort_unstable();
        Self(timeline)
    }

    pub fn events(&self) -> &[Event] {
        &self.0
    }
}

/// Sorted multiset of all per-vertex fingerprints of a graph
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GraphFingerprint(Vec<VertexFingerprint>);

impl GraphFingerprint {
    /// Number of vertex fingerprints, i.e. the graph's vertex count
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vertex_fingerprints(&self) -> &[VertexFingerprint] {
        &self.0
    }
}

impl Fingerprint for GossipGraph {
    fn fingerprint(&self) -> GraphFingerprint {
        // one independent run per start vertex; the final sort makes the
        // result independent of scheduling
        let mut runs: Vec<_> = (0..self.node_count())
            .into_par_iter()
            .map(|start| propagate(self, start))
            .collect();
        runs.sort_unstable();
        GraphFingerprint(runs)
    }
}

impl<N, E, Ix: IndexType> Fingerprint for Graph<N, E, Undirected, Ix> {
    fn fingerprint(&self) -> GraphFingerprint {
        GossipGraph::from(self).fingerprint()
    }
}
