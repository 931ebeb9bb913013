//! Uniform random bot.

use crate::core::{GameRng, GameState};
use crate::rules;

use super::MoveSelector;

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
}

impl RandomBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSelector for RandomBot {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        let moves = rules::legal_moves(state);
        self.rng.choose(&moves).copied()
    }
}
