use std::convert::From;

use crate::error::GraphError;

use itertools::Itertools;
use petgraph::{
    graph::{Graph, IndexType},
    visit::{EdgeRef, NodeIndexable},
    Undirected,
};

/// Normalized simple undirected graph
///
/// Vertices are the dense range `0..node_count()`. Construction drops
/// self-loops and collapses parallel edges, so every other component can
/// assume a simple graph. The structure is immutable after construction.
///
/// # Example
///
/// ```rust
/// use gossip_pet::prelude::*;
///
/// // a triangle, with a self-loop and a duplicate edge that get normalized away
/// let g = GossipGraph::from_edges(3, [(0, 1), (1, 2), (2, 0), (1, 1), (0, 1)]).unwrap();
/// assert_eq!(g.edge_count(), 3);
/// assert_eq!(g.neighbors(1), [0, 2]);
/// ```
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct GossipGraph {
    adj: Vec<Vec<usize>>,
}

impl GossipGraph {
    /// Graph with `vertices` isolated vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Build a normalized graph from an edge list
    ///
    /// Self-loops are dropped and duplicate edges collapsed. An edge
    /// endpoint outside `0..vertices` is rejected.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut pairs = Vec::new();
        for (u, v) in edges {
            let outside = u.max(v);
            if outside >= vertices {
                return Err(GraphError::UnknownVertex {
                    vertex: outside,
                    node_count: vertices,
                });
            }
            pairs.push((u, v));
        }
        Ok(Self::normalized(vertices, pairs))
    }

    fn normalized<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adj = vec![Vec::new(); vertices];
        let edges = edges
            .into_iter()
            .filter(|(u, v)| u != v)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .sorted_unstable()
            .dedup();
        for (u, v) in edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        // neighbor enumeration order must not depend on input edge order
        for a in &mut adj {
            a.sort_unstable();
        }
        Self { adj }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbors of `v`, in ascending order
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u].binary_search(&v).is_ok()
    }
}

impl<N, E, Ix: IndexType> From<&Graph<N, E, Undirected, Ix>> for GossipGraph {
    fn from(g: &Graph<N, E, Undirected, Ix>) -> Self {
        let edges = g
            .edge_references()
            .map(|e| (g.to_index(e.source()), g.to_index(e.target())));
        Self::normalized(g.node_count(), edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::UnGraph;

    #[test]
    fn self_loops_dropped() {
        let g = GossipGraph::from_edges(2, [(0, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn parallel_edges_collapsed() {
        let g = GossipGraph::from_edges(3, [(0, 1), (1, 0), (0, 1), (1, 2)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(1), [0, 2]);
    }

    #[test]
    fn unknown_vertex_rejected() {
        let err = GossipGraph::from_edges(3, [(0, 1), (1, 3)]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnknownVertex {
                vertex: 3,
                node_count: 3
            }
        ));
    }

    #[test]
    fn isolated_vertices_kept() {
        let g = GossipGraph::from_edges(4, [(0, 1)]).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.degree(2), 0);
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn from_petgraph() {
        let pg = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (1, 2), (2, 2)]);
        let g = GossipGraph::from(&pg);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.contains_edge(1, 2));
        assert!(!g.contains_edge(0, 2));
    }
}
