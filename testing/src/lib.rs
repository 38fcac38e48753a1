use petgraph::graph::UnGraph;
use rand::{distributions::Uniform, prelude::*};
use rand_distr::Normal;
use rand_xoshiro::Xoshiro256Plus;

/// Endless stream of small random undirected graphs.
///
/// Graphs may be disconnected and occasionally carry duplicate edges or
/// self-loops, which exercises the normalization path.
pub struct GraphIter {
    rng: Xoshiro256Plus,
    node_distr: Uniform<usize>,
    edge_distr: Normal<f64>,
}

impl Default for GraphIter {
    fn default() -> Self {
        Self {
            rng: Xoshiro256Plus::seed_from_u64(0),
            node_distr: Uniform::from(1..12),
            edge_distr: Normal::new(0.5, 1.0).unwrap(),
        }
    }
}

impl Iterator for GraphIter {
    type Item = UnGraph<(), ()>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rng = &mut self.rng;
        let mut g = UnGraph::default();
        let nnodes = self.node_distr.sample(&mut rng);
        for _ in 0..nnodes {
            g.add_node(());
        }
        for i in 0..nnodes {
            for j in i..nnodes {
                let nedges = self
                    .edge_distr
                    .sample(&mut rng)
                    .clamp(0.0, 2.0)
                    .round() as u64;
                for _ in 0..nedges {
                    use petgraph::visit::NodeIndexable;
                    let source = g.from_index(i);
                    let target = g.from_index(j);
                    g.add_edge(source, target, ());
                }
            }
        }
        Some(g)
    }
}

/// Rebuild `g` with its vertex labels randomly permuted.
pub fn shuffle_labels<R: Rng>(g: UnGraph<(), ()>, rng: &mut R) -> UnGraph<(), ()> {
    use petgraph::visit::{EdgeRef, NodeIndexable};

    let n = g.node_count();
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);

    let mut gg = UnGraph::with_capacity(n, g.edge_count());
    for _ in 0..n {
        gg.add_node(());
    }
    for e in g.edge_references() {
        let source = gg.from_index(perm[g.to_index(e.source())]);
        let target = gg.from_index(perm[g.to_index(e.target())]);
        gg.add_edge(source, target, ());
    }
    gg
}

fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> UnGraph<(), ()> {
    use petgraph::visit::NodeIndexable;

    let mut g = UnGraph::default();
    for _ in 0..n {
        g.add_node(());
    }
    for (u, v) in edges {
        let source = g.from_index(u);
        let target = g.from_index(v);
        g.add_edge(source, target, ());
    }
    g
}

/// Circulant graph `C_n(jumps)`: vertex `i` is adjacent to `i ± j (mod n)`
/// for every jump `j`.
pub fn circulant(n: usize, jumps: &[usize]) -> UnGraph<(), ()> {
    let mut edges = Vec::new();
    for i in 0..n {
        for &j in jumps {
            let k = (i + j) % n;
            if i < k {
                edges.push((i, k));
            } else if k < i {
                edges.push((k, i));
            }
        }
    }
    edges.sort_unstable();
    edges.dedup();
    from_edges(n, edges)
}

/// Cycle graph `C_n`.
pub fn cycle(n: usize) -> UnGraph<(), ()> {
    from_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Path graph `P_n`.
pub fn path(n: usize) -> UnGraph<(), ()> {
    from_edges(n, (1..n).map(|i| (i - 1, i)))
}

/// Complete graph `K_n`.
pub fn complete(n: usize) -> UnGraph<(), ()> {
    from_edges(n, (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
}

/// Disjoint union of two graphs, relabeling the second one's vertices.
pub fn disjoint_union(g1: &UnGraph<(), ()>, g2: &UnGraph<(), ()>) -> UnGraph<(), ()> {
    use petgraph::visit::{EdgeRef, NodeIndexable};

    let offset = g1.node_count();
    let mut edges: Vec<_> = g1
        .edge_references()
        .map(|e| (g1.to_index(e.source()), g1.to_index(e.target())))
        .collect();
    edges.extend(
        g2.edge_references()
            .map(|e| (offset + g2.to_index(e.source()), offset + g2.to_index(e.target()))),
    );
    from_edges(offset + g2.node_count(), edges)
}

/// The Petersen graph: outer 5-cycle, inner pentagram, five spokes.
pub fn petersen() -> UnGraph<(), ()> {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
        edges.push((i, i + 5));
    }
    from_edges(10, edges)
}

/// The 4×4 Rook's graph: vertices are grid cells, adjacent when they
/// share a row or a column. Strongly regular with parameters (16, 6, 2, 2).
pub fn rook_4x4() -> UnGraph<(), ()> {
    let idx = |i: usize, j: usize| 4 * i + j;
    let mut edges = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            for k in j + 1..4 {
                edges.push((idx(i, j), idx(i, k)));
                edges.push((idx(j, i), idx(k, i)));
            }
        }
    }
    from_edges(16, edges)
}

/// The Shrikhande graph: the Cayley graph of Z4 × Z4 with connection set
/// {±(1, 0), ±(0, 1), ±(1, 1)}. Shares the strongly regular parameters
/// (16, 6, 2, 2) with the 4×4 Rook's graph without being isomorphic to it.
pub fn shrikhande() -> UnGraph<(), ()> {
    let idx = |i: usize, j: usize| 4 * i + j;
    let mut edges = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            for (di, dj) in [(1, 0), (0, 1), (1, 1)] {
                let u = idx(i, j);
                let v = idx((i + di) % 4, (j + dj) % 4);
                edges.push((u.min(v), u.max(v)));
            }
        }
    }
    edges.sort_unstable();
    edges.dedup();
    from_edges(16, edges)
}
