//! Search-backed bot.

use crate::core::GameState;
use crate::mcts::{MCTSConfig, MCTSSearch};

use super::MoveSelector;

/// Answers with the most visited root move of an MCTS search.
#[derive(Debug)]
pub struct MctsBot {
    search: MCTSSearch,
}

impl MctsBot {
    #[must_use]
    pub fn new(config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(config),
        }
    }

    /// The underlying search, for stats of the last answer.
    #[must_use]
    pub fn search(&self) -> &MCTSSearch {
        &self.search
    }
}

impl MoveSelector for MctsBot {
    fn name(&self) -> &str {
        "mcts"
    }

    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        if state.is_decided() {
            return None;
        }
        self.search.search(state)
    }
}
