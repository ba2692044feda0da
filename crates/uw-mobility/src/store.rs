//! The `MobilityStore`: per-node mobility state.

use uw_core::{NodeId, NodeRng, Position};

use crate::Leg;

/// How one node moves.
#[derive(Debug, Clone)]
pub enum NodeMobility {
    /// Placed once, never moves.
    Fixed(Position),
    /// Random waypoint: the current leg plus the node's private RNG.
    Waypoint { leg: Leg, rng: NodeRng },
}

/// Mobility state for every node, indexed by `NodeId`.  Nodes without an
/// entry have not been placed.
#[derive(Debug, Clone, Default)]
pub struct MobilityStore {
    pub nodes: Vec<Option<NodeMobility>>,
}

impl MobilityStore {
    pub fn new(node_count: usize) -> Self {
        Self { nodes: vec![None; node_count] }
    }

    /// Install `mobility` for `node`, growing the store if needed.
    pub fn set(&mut self, node: NodeId, mobility: NodeMobility) {
        if node.index() >= self.nodes.len() {
            self.nodes.resize(node.index() + 1, None);
        }
        self.nodes[node.index()] = Some(mobility);
    }

    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&NodeMobility> {
        self.nodes.get(node.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeMobility> {
        self.nodes.get_mut(node.index()).and_then(Option::as_mut)
    }

    /// `true` if `node` moves.
    pub fn is_mobile(&self, node: NodeId) -> bool {
        matches!(self.get(node), Some(NodeMobility::Waypoint { .. }))
    }
}
