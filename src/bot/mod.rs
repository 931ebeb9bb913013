//! Computer opponents.
//!
//! A bot sees the same `GameState` a human does and answers with a cell
//! for a normal move. Bots never use abilities.
//!
//! ## Bots
//!
//! - `RandomBot`: uniform over the legal moves
//! - `MctsBot`: tree search with random rollouts
//! - `FallbackBot`: wraps another bot and covers for bad answers
//!
//! `BotConfig::build` turns a config into a ready bot.

pub mod fallback;
pub mod random;
pub mod search;

pub use fallback::FallbackBot;
pub use random::RandomBot;
pub use search::MctsBot;

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::mcts::MCTSConfig;

/// Something that picks a normal move for the player to move.
pub trait MoveSelector: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// A legal cell for `state.current_player`, or `None` if there is no
    /// legal move (or the game is decided).
    fn select_move(&mut self, state: &GameState) -> Option<usize>;
}

impl<T: MoveSelector + ?Sized> MoveSelector for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        (**self).select_move(state)
    }
}

/// Which bot to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotKind {
    Random,
    #[default]
    Mcts,
}

/// Bot settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Which bot answers.
    pub kind: BotKind,

    /// Seed for the random bot and the fallback.
    pub seed: u64,

    /// Search settings, used by `BotKind::Mcts`.
    pub mcts: MCTSConfig,
}

impl BotConfig {
    /// Set the bot kind.
    pub fn with_kind(mut self, kind: BotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search settings.
    pub fn with_mcts(mut self, mcts: MCTSConfig) -> Self {
        self.mcts = mcts;
        self
    }

    /// Build the configured bot.
    ///
    /// Search bots come wrapped in a `FallbackBot`, so the result always
    /// answers with a legal move when one exists.
    #[must_use]
    pub fn build(&self) -> Box<dyn MoveSelector> {
        match self.kind {
            BotKind::Random => Box::new(RandomBot::new(self.seed)),
            BotKind::Mcts => Box::new(FallbackBot::new(MctsBot::new(self.mcts.clone()), self.seed)),
        }
    }
}
