/// A single entry in a propagation timeline.
///
/// Events sort by iteration first, then by kind tag
/// (transmission < neutral < sentinel), then by payload. This order is
/// the canonical one used when a timeline is frozen into a
/// [VertexFingerprint](crate::fingerprint::VertexFingerprint), so it must
/// never depend on vertex labels.
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Event {
    pub iteration: usize,
    pub kind: EventKind,
}

/// What happened on one batch edge (or, for sentinels, in one round).
#[cfg_attr(feature = "serde-1", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EventKind {
    /// Gossip crossed an edge from a knower to a new receiver.
    ///
    /// Spreader and receiver hit counts keep their roles; they are
    /// deliberately not order-normalized.
    Transmission {
        spreader_hits: usize,
        receiver_hits: usize,
    },
    /// An edge between two vertices that both already know. Neither
    /// endpoint has a distinguished role, so the counts are normalized.
    Neutral { min_hits: usize, max_hits: usize },
    /// Sorted component sizes of the subgraph induced on the round's
    /// frontier, using the full graph adjacency.
    Sentinel { component_sizes: Vec<usize> },
}

impl Event {
    pub(crate) fn transmission(
        iteration: usize,
        spreader_hits: usize,
        receiver_hits: usize,
    ) -> Self {
        Self {
            iteration,
            kind: EventKind::Transmission {
                spreader_hits,
                receiver_hits,
            },
        }
    }

    pub(crate) fn neutral(iteration: usize, hits_a: usize, hits_b: usize) -> Self {
        Self {
            iteration,
            kind: EventKind::Neutral {
                min_hits: hits_a.min(hits_b),
                max_hits: hits_a.max(hits_b),
            },
        }
    }

    pub(crate) fn sentinel(iteration: usize, component_sizes: Vec<usize>) -> Self {
        debug_assert!(component_sizes.windows(2).all(|s| s[0] <= s[1]));
        Self {
            iteration,
            kind: EventKind::Sentinel { component_sizes },
        }
    }
}
