//! Bot wrapper that never leaves a seat without a legal answer.

use log::warn;

use crate::core::GameState;
use crate::rules;

use super::{MoveSelector, RandomBot};

/// Asks `primary` first and falls back to a `RandomBot` when the answer is
/// missing while moves exist, or is not a legal move.
#[derive(Debug)]
pub struct FallbackBot<P> {
    primary: P,
    backup: RandomBot,
    fallbacks: u32,
}

impl<P: MoveSelector> FallbackBot<P> {
    #[must_use]
    pub fn new(primary: P, seed: u64) -> Self {
        Self {
            primary,
            backup: RandomBot::new(seed),
            fallbacks: 0,
        }
    }

    /// How many answers came from the backup.
    #[must_use]
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: MoveSelector> MoveSelector for FallbackBot<P> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        let legal = rules::legal_moves(state);
        if legal.is_empty() {
            return None;
        }

        match self.primary.select_move(state) {
            Some(cell) if legal.contains(&cell) => Some(cell),
            answer => {
                warn!(
                    "{} answered {answer:?} for {}, using random move",
                    self.primary.name(),
                    state.current_player
                );
                self.fallbacks += 1;
                self.backup.select_move(state)
            }
        }
    }
}
