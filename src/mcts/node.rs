//! MCTS node and edge structures.
//!
//! Uses arena-based allocation with index references (NodeId) so the tree
//! stays flat and serializable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerMap, CELL_COUNT};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Edge for a normal move on `cell`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// Target cell of the move.
    pub cell: usize,

    /// Child node (NONE if not yet expanded).
    pub child: NodeId,

    /// Visit count for this move.
    pub visits: u32,

    /// Total reward accumulated through this move, per player.
    pub total_reward: PlayerMap<f64>,
}

impl Edge {
    /// Create an unvisited edge.
    #[must_use]
    pub fn new(cell: usize) -> Self {
        Self {
            cell,
            child: NodeId::NONE,
            visits: 0,
            total_reward: PlayerMap::with_value(0.0),
        }
    }

    /// Get the mean reward for a player.
    #[must_use]
    pub fn mean_reward(&self, player: Player) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward[player] / f64::from(self.visits)
        }
    }

    /// Check if this edge has been expanded (child exists).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Player to move at this node.
    pub to_move: Player,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    /// Decided game, or nobody can move.
    pub is_terminal: bool,

    /// Terminal rewards (if terminal).
    pub terminal_reward: Option<PlayerMap<f64>>,

    /// Outgoing edges, one per legal move.
    pub edges: SmallVec<[Edge; CELL_COUNT]>,
}

impl MCTSNode {
    /// Create a new node.
    #[must_use]
    pub fn new(to_move: Player, depth: u16) -> Self {
        Self {
            to_move,
            depth,
            visits: 0,
            is_terminal: false,
            terminal_reward: None,
            edges: SmallVec::new(),
        }
    }

    /// Create a root node.
    #[must_use]
    pub fn root(to_move: Player) -> Self {
        Self::new(to_move, 0)
    }

    /// Check if any edges are unexpanded.
    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.edges.iter().any(|e| !e.is_expanded())
    }

    /// Get indices of unexpanded edges.
    pub fn unexpanded_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_expanded())
            .map(|(i, _)| i)
    }

    /// Get the edge with the most visits.
    #[must_use]
    pub fn best_edge_by_visits(&self) -> Option<&Edge> {
        self.edges.iter().max_by_key(|e| e.visits)
    }
}
