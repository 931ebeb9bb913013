//! MCTS policies for selection and simulation.
//!
//! - `SelectionPolicy`: which child to descend into
//! - `SimulationPolicy`: how to score a leaf by playing it out

use crate::core::{GameRng, GameState, Outcome, PlayerMap};
use crate::rules;

use super::config::MCTSConfig;
use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Index of the edge to follow from `node`.
    ///
    /// Scores are read from the point of view of `node.to_move`.
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Formula: Q(a) + c * sqrt(ln(N) / n(a)), with unvisited edges first.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> usize {
        let ln_parent = f64::from(node.visits.max(1)).ln();

        node.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let exploitation = edge.mean_reward(node.to_move);
                let exploration = if edge.visits == 0 {
                    f64::INFINITY
                } else {
                    config.exploration_constant * (ln_parent / f64::from(edge.visits)).sqrt()
                };
                (i, exploitation + exploration)
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(0, |(i, _)| i)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf.
pub trait SimulationPolicy: Send + Sync {
    /// Play out `state` and return the reward for each player.
    fn simulate(&self, state: &GameState, rng: &mut GameRng, max_depth: u32) -> PlayerMap<f64>;
}

/// Random simulation policy.
///
/// Plays uniformly random normal moves until the game is decided, nobody
/// can move, or the depth limit is hit. The last two score as a draw.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl SimulationPolicy for RandomSimulation {
    fn simulate(&self, state: &GameState, rng: &mut GameRng, max_depth: u32) -> PlayerMap<f64> {
        let mut state = *state;
        let mut depth = 0;

        loop {
            if state.is_decided() {
                return outcome_rewards(state.winner);
            }
            if max_depth > 0 && depth >= max_depth {
                return outcome_rewards(None);
            }

            let moves = rules::legal_moves(&state);
            let Some(&cell) = rng.choose(&moves) else {
                return outcome_rewards(Some(Outcome::Draw));
            };
            match rules::apply_move(&state, cell) {
                Ok(next) => state = next,
                Err(_) => return outcome_rewards(None),
            }

            depth += 1;
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Rewards for an outcome: 1 for the winner, 0 for the loser, 0.5 each for
/// a draw or an undecided cut-off.
#[must_use]
pub fn outcome_rewards(outcome: Option<Outcome>) -> PlayerMap<f64> {
    match outcome {
        Some(Outcome::Winner(winner)) => PlayerMap::new(|p| if p == winner { 1.0 } else { 0.0 }),
        Some(Outcome::Draw) | None => PlayerMap::with_value(0.5),
    }
}
