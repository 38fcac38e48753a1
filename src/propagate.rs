use crate::event::Event;
use crate::fingerprint::VertexFingerprint;
use crate::graph::GossipGraph;

use ahash::{AHashMap, AHashSet};

/// Run one gossip propagation from `start` and freeze its timeline.
///
/// Each round spreads across every not-yet-consumed edge touching the
/// frontier, classifies those edges against the knower set as it stood at
/// the start of the round, and records one sentinel event for the
/// frontier's internal connectivity. The run owns all of its state; the
/// graph is only read, so runs for different start vertices can execute
/// concurrently.
pub(crate) fn propagate(g: &GossipGraph, start: usize) -> VertexFingerprint {
    let mut run = Propagation::start(g, start);
    while !run.frontier.is_empty() {
        run.round();
    }
    VertexFingerprint::new(run.timeline)
}

struct Propagation<'a> {
    g: &'a GossipGraph,
    knowers: Vec<bool>,
    frontier: Vec<usize>,
    consumed: AHashSet<(usize, usize)>,
    iteration: usize,
    timeline: Vec<Event>,
}

impl<'a> Propagation<'a> {
    fn start(g: &'a GossipGraph, start: usize) -> Self {
        let mut knowers = vec![false; g.node_count()];
        knowers[start] = true;
        Self {
            g,
            knowers,
            frontier: vec![start],
            consumed: AHashSet::new(),
            iteration: 0,
            timeline: Vec::new(),
        }
    }

    fn round(&mut self) {
        let batch = self.candidate_batch();

        // full tally before any classification: events reference the
        // counts of the round they belong to
        let mut hits: AHashMap<usize, usize> = AHashMap::new();
        for &(u, v) in &batch {
            *hits.entry(u).or_default() += 1;
            *hits.entry(v).or_default() += 1;
        }

        let mut receivers = Vec::new();
        for &(u, v) in &batch {
            let event = match (self.knowers[u], self.knowers[v]) {
                (true, true) => Event::neutral(self.iteration, hits[&u], hits[&v]),
                (true, false) => {
                    receivers.push(v);
                    Event::transmission(self.iteration, hits[&u], hits[&v])
                }
                (false, true) => {
                    receivers.push(u);
                    Event::transmission(self.iteration, hits[&v], hits[&u])
                }
                // at least one endpoint is in the frontier
                (false, false) => unreachable!("batch edge without a knowing endpoint"),
            };
            self.timeline.push(event);
        }

        self.timeline.push(Event::sentinel(
            self.iteration,
            self.frontier_component_sizes(),
        ));

        receivers.sort_unstable();
        receivers.dedup();
        for &r in &receivers {
            self.knowers[r] = true;
        }
        self.consumed.extend(batch);
        self.frontier = receivers;
        self.iteration += 1;
    }

    /// Edges reachable from the frontier this round, deduplicated by
    /// unordered pair and sorted so enumeration order never leaks.
    fn candidate_batch(&self) -> Vec<(usize, usize)> {
        let mut batch: Vec<_> = self
            .frontier
            .iter()
            .flat_map(|&u| {
                self.g
                    .neighbors(u)
                    .iter()
                    .map(move |&v| (u.min(v), u.max(v)))
            })
            .filter(|e| !self.consumed.contains(e))
            .collect();
        batch.sort_unstable();
        batch.dedup();
        batch
    }

    /// Sorted component sizes of the subgraph induced on the frontier,
    /// using the full graph adjacency rather than this round's batch.
    fn frontier_component_sizes(&self) -> Vec<usize> {
        let mut member = vec![false; self.g.node_count()];
        for &v in &self.frontier {
            member[v] = true;
        }
        let mut seen = vec![false; self.g.node_count()];
        let mut sizes = Vec::new();
        let mut stack = Vec::new();
        for &root in &self.frontier {
            if seen[root] {
                continue;
            }
            seen[root] = true;
            stack.push(root);
            let mut size = 0;
            while let Some(x) = stack.pop() {
                size += 1;
                for &y in self.g.neighbors(x) {
                    if member[y] && !seen[y] {
                        seen[y] = true;
                        stack.push(y);
                    }
                }
            }
            sizes.push(size);
        }
        sizes.sort_unstable();
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    fn kinds(fp: &VertexFingerprint) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for e in fp.events() {
            match e.kind {
                EventKind::Transmission { .. } => counts.0 += 1,
                EventKind::Neutral { .. } => counts.1 += 1,
                EventKind::Sentinel { .. } => counts.2 += 1,
            }
        }
        counts
    }

    #[test]
    fn isolated_vertex() {
        let g = GossipGraph::new(1);
        let fp = propagate(&g, 0);
        assert_eq!(fp.events(), [Event::sentinel(0, vec![1])]);
    }

    #[test]
    fn single_edge() {
        let g = GossipGraph::from_edges(2, [(0, 1)]).unwrap();
        let fp = propagate(&g, 0);
        // round 0: one transmission plus sentinel [1];
        // round 1: nothing left to spread, sentinel [1]
        assert_eq!(
            fp.events(),
            [
                Event::transmission(0, 1, 1),
                Event::sentinel(0, vec![1]),
                Event::sentinel(1, vec![1]),
            ]
        );
    }

    #[test]
    fn triangle() {
        let g = GossipGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let fp = propagate(&g, 0);
        // round 0: two transmissions out of the start vertex;
        // round 1: the remaining edge joins two knowers
        assert_eq!(
            fp.events(),
            [
                Event::transmission(0, 2, 1),
                Event::transmission(0, 2, 1),
                Event::sentinel(0, vec![1]),
                Event::neutral(1, 1, 1),
                Event::sentinel(1, vec![2]),
            ]
        );
    }

    #[test]
    fn run_reaches_component_only() {
        // triangle plus an isolated vertex
        let g = GossipGraph::from_edges(4, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let from_triangle = propagate(&g, 0);
        let from_isolated = propagate(&g, 3);
        assert_eq!(from_isolated.events(), [Event::sentinel(0, vec![1])]);
        let (t, _, _) = kinds(&from_triangle);
        assert_eq!(t, 2);
    }

    #[test]
    fn each_edge_consumed_once() {
        // C4: every edge shows up in exactly one event
        let g = GossipGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let fp = propagate(&g, 0);
        let (t, n, _) = kinds(&fp);
        assert_eq!(t + n, g.edge_count());
    }

    #[test]
    fn sentinel_sees_frontier_topology() {
        // start in the middle of a path: the round-1 frontier {0, 2} is
        // disconnected, so the sentinel records two singletons
        let g = GossipGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let fp = propagate(&g, 1);
        assert!(fp
            .events()
            .contains(&Event::sentinel(1, vec![1, 1])));
    }
}
