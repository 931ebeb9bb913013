//! Core MCTS search algorithm.
//!
//! Plain two-player MCTS over normal moves: both seats expand in the tree
//! and each node is scored from the point of view of its player to move.
//! Abilities are not searched.

use std::time::Instant;

use log::trace;

use crate::core::{GameRng, GameState, Outcome, Player, PlayerMap};
use crate::rules;

use super::config::MCTSConfig;
use super::node::{Edge, MCTSNode, NodeId};
use super::policy::{outcome_rewards, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the search tree and configuration. The RNG carries over between
/// searches, so a fixed seed gives a fixed sequence of answers.
pub struct MCTSSearch {
    config: MCTSConfig,
    tree: MCTSTree,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: Box<dyn SimulationPolicy>,
    stats: SearchStats,
}

impl std::fmt::Debug for MCTSSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MCTSSearch")
            .field("config", &self.config)
            .field("nodes", &self.tree.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let capacity = config.max_nodes.min(1 << 16);

        Self {
            tree: MCTSTree::with_capacity(Player::One, capacity),
            config,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Run `config.iterations` iterations from `state`.
    ///
    /// Returns the most visited root move, or `None` if the state is
    /// decided or the player to move has no normal move.
    pub fn search(&mut self, state: &GameState) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();
        self.tree.reset(state.current_player);

        let root = self.tree.root();
        self.expand_node(root, state);

        let root_node = self.tree.get(root);
        if root_node.is_terminal {
            return None;
        }
        if root_node.edges.len() == 1 {
            return Some(root_node.edges[0].cell);
        }

        for _ in 0..self.config.iterations {
            self.iteration(state);
            self.stats.iterations += 1;

            if self.tree.len() >= self.config.max_nodes {
                break;
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            "search: {} iterations, {} nodes, {}us",
            self.stats.iterations,
            self.tree.len(),
            self.stats.time_us
        );

        self.tree.root_node().best_edge_by_visits().map(|e| e.cell)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, root_state: &GameState) {
        let mut state = *root_state;
        let mut path: Vec<(NodeId, usize)> = Vec::new();
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.is_terminal {
                let rewards = node.terminal_reward.unwrap_or_else(|| outcome_rewards(None));
                self.stats.terminal_hits += 1;
                self.backpropagate(&path, rewards);
                return;
            }

            if self.config.max_depth > 0 && u32::from(node.depth) >= self.config.max_depth {
                self.backpropagate(&path, outcome_rewards(None));
                return;
            }

            let edge_idx = if node.has_unexpanded() {
                self.select_unexpanded(current)
            } else {
                self.selection.select(node, &self.config)
            };
            path.push((current, edge_idx));

            let edge = &self.tree.get(current).edges[edge_idx];
            let (cell, child) = (edge.cell, edge.child);
            state = match rules::apply_move(&state, cell) {
                Ok(next) => next,
                Err(_) => {
                    self.backpropagate(&path, outcome_rewards(None));
                    return;
                }
            };

            if child.is_none() {
                self.expand_child(current, edge_idx, &state);
                let rewards = self.simulate(&state);
                self.stats.simulations += 1;
                self.backpropagate(&path, rewards);
                return;
            }

            current = child;
        }
    }

    /// Add one edge per legal move, or mark the node terminal.
    fn expand_node(&mut self, node_id: NodeId, state: &GameState) {
        let moves = rules::legal_moves(state);
        let node = self.tree.get_mut(node_id);

        if state.is_decided() {
            node.is_terminal = true;
            node.terminal_reward = Some(outcome_rewards(state.winner));
        } else if moves.is_empty() {
            // stalemate
            node.is_terminal = true;
            node.terminal_reward = Some(outcome_rewards(Some(Outcome::Draw)));
        } else {
            node.edges.extend(moves.into_iter().map(Edge::new));
        }

        self.stats.nodes_expanded += 1;
    }

    /// Pick an unexpanded edge at random.
    fn select_unexpanded(&mut self, node_id: NodeId) -> usize {
        let unexpanded: Vec<usize> = self.tree.get(node_id).unexpanded_edges().collect();
        self.rng.choose(&unexpanded).copied().unwrap_or(0)
    }

    /// Create and expand the child behind an edge.
    fn expand_child(&mut self, parent_id: NodeId, edge_idx: usize, state: &GameState) -> NodeId {
        let depth = self.tree.get(parent_id).depth + 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let child = MCTSNode::new(state.current_player, depth);
        let child_id = self.tree.alloc(child);
        self.tree.get_mut(parent_id).edges[edge_idx].child = child_id;

        self.expand_node(child_id, state);
        child_id
    }

    fn simulate(&mut self, state: &GameState) -> PlayerMap<f64> {
        let mut sim_rng = self.rng.fork();
        self.simulation.simulate(state, &mut sim_rng, self.config.max_depth)
    }

    /// Add `rewards` to every edge on the path.
    fn backpropagate(&mut self, path: &[(NodeId, usize)], rewards: PlayerMap<f64>) {
        for &(node_id, edge_idx) in path.iter().rev() {
            let node = self.tree.get_mut(node_id);
            node.visits += 1;

            let edge = &mut node.edges[edge_idx];
            edge.visits += 1;
            for (player, reward) in rewards.iter() {
                edge.total_reward[player] += *reward;
            }
        }
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn tree(&self) -> &MCTSTree {
        &self.tree
    }

    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// (cell, visits) for each root move of the last search.
    pub fn action_visits(&self) -> Vec<(usize, u32)> {
        self.tree
            .root_node()
            .edges
            .iter()
            .map(|e| (e.cell, e.visits))
            .collect()
    }

    /// Root visit share per move of the last search.
    pub fn action_probabilities(&self) -> Vec<(usize, f64)> {
        let root = self.tree.root_node();
        let total: u32 = root.edges.iter().map(|e| e.visits).sum();

        if total == 0 {
            let uniform = 1.0 / root.edges.len().max(1) as f64;
            return root.edges.iter().map(|e| (e.cell, uniform)).collect();
        }

        root.edges
            .iter()
            .map(|e| (e.cell, f64::from(e.visits) / f64::from(total)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Phase, Player, Symbol};

    fn config() -> MCTSConfig {
        MCTSConfig::default().with_iterations(200).with_seed(7)
    }

    /// Battle board where Player 1 wins at once on cell 2.
    fn winning_position() -> GameState {
        let board = Board::from_cells([
            Some(Symbol::Slash), Some(Symbol::Slash), Some(Symbol::Plus),
            Some(Symbol::Plus), Some(Symbol::Plus), Some(Symbol::Plus),
            Some(Symbol::Plus), Some(Symbol::Plus), Some(Symbol::Plus),
        ]);
        GameState {
            board,
            phase: Phase::Battle,
            ..GameState::new()
        }
    }

    #[test]
    fn test_search_returns_legal_move() {
        let mut search = MCTSSearch::new(config());
        let state = GameState::new();

        let cell = search.search(&state).unwrap();
        assert!(rules::is_valid_move(&state, cell, Player::One));

        let stats = search.stats();
        assert_eq!(stats.iterations, 200);
        assert!(stats.simulations > 0);
        assert!(search.tree().len() > 1);
    }

    #[test]
    fn test_search_finds_win() {
        let mut search = MCTSSearch::new(config());
        assert_eq!(search.search(&winning_position()), Some(2));
    }

    #[test]
    fn test_search_decided_state() {
        let won = rules::apply_move(&winning_position(), 2).unwrap();
        let mut search = MCTSSearch::new(config());
        assert_eq!(search.search(&won), None);
    }

    #[test]
    fn test_search_deterministic() {
        let state = rules::apply_move(&GameState::new(), 4).unwrap();
        let mut a = MCTSSearch::new(config());
        let mut b = MCTSSearch::new(config());

        assert_eq!(a.search(&state), b.search(&state));
        assert_eq!(a.action_visits(), b.action_visits());
    }

    #[test]
    fn test_node_budget() {
        let mut search = MCTSSearch::new(config().with_iterations(10_000).with_max_nodes(50));
        search.search(&GameState::new());

        assert!(search.tree().len() <= 51);
        assert!(search.stats().iterations < 10_000);
    }

    #[test]
    fn test_action_probabilities() {
        let mut search = MCTSSearch::new(config());
        search.search(&GameState::new());

        let sum: f64 = search.action_probabilities().iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 0.01);
    }
}
