//! Game state: the single unit of truth passed through the engine.
//!
//! ## GameState
//!
//! - Board contents
//! - Player to move and current phase
//! - Ko cell (`last_move_index`)
//! - Outcome and its reason, once decided
//! - Per-player one-shot ability flags
//!
//! `GameState` is a small `Copy` value. Engine operations take a state and
//! return a new one; nothing is mutated in place, so any older value can be
//! kept around as a history snapshot.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Player, PlayerMap};

/// Game phase. Only ever advances `Expansion` → `Battle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fill empty cells, upgrade opposing raw marks to `Plus`.
    #[default]
    Expansion,
    /// Upgrade `Plus` to `Slash`; race to three `Slash` in a line.
    Battle,
}

/// Result of a decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

/// Why the game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A line of three `Slash`.
    ThreeSlashes,
    /// The opponent's clock ran out.
    TimeOut,
    /// The player to move had nothing legal to do.
    Stalemate,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::ThreeSlashes => write!(f, "Three Slashes"),
            WinReason::TimeOut => write!(f, "Time Out"),
            WinReason::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// One-shot special abilities a player has consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abilities {
    /// Block (place or neutralize) has been used.
    pub block_used: bool,
    /// Remove has been used.
    pub remove_used: bool,
}

/// Complete game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Board contents.
    pub board: Board,

    /// Player whose turn it is.
    pub current_player: Player,

    /// Current phase.
    pub phase: Phase,

    /// Cell touched by the last turn-ending action (Ko cell).
    pub last_move_index: Option<usize>,

    /// Outcome, once decided. Write-once.
    pub winner: Option<Outcome>,

    /// Why the game was decided.
    pub win_reason: Option<WinReason>,

    /// Ability flags per player.
    pub abilities: PlayerMap<Abilities>,
}

impl GameState {
    /// Create the start-of-game state.
    ///
    /// Empty board, Expansion phase, Player One to move, no abilities used.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the game has been decided.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> Player {
        self.current_player.opponent()
    }

    /// Ability flags of the player to move.
    #[must_use]
    pub fn current_abilities(&self) -> Abilities {
        self.abilities[self.current_player]
    }

    #[must_use]
    pub fn player1_block_used(&self) -> bool {
        self.abilities[Player::One].block_used
    }

    #[must_use]
    pub fn player2_block_used(&self) -> bool {
        self.abilities[Player::Two].block_used
    }

    #[must_use]
    pub fn player1_remove_used(&self) -> bool {
        self.abilities[Player::One].remove_used
    }

    #[must_use]
    pub fn player2_remove_used(&self) -> bool {
        self.abilities[Player::Two].remove_used
    }

    /// Return this state decided with the given outcome.
    ///
    /// Callers check `is_decided` first; the engine never overwrites an
    /// existing outcome.
    #[must_use]
    pub fn decided(self, outcome: Outcome, reason: WinReason) -> Self {
        Self {
            winner: Some(outcome),
            win_reason: Some(reason),
            ..self
        }
    }
}
