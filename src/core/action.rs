//! Action representation.
//!
//! Every player input the engine accepts is one of three verbs aimed at a
//! cell:
//! - `Move`: a normal placement/upgrade, ends the turn
//! - `Block`: place or neutralize a Block, ends the turn
//! - `Remove`: downgrade a cell, does not end the turn

use serde::{Deserialize, Serialize};

use super::player::Player;

/// What a Block action does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockAction {
    /// Freeze an empty or raw-symbol cell.
    Place,
    /// Clear an existing Block.
    Neutralize,
}

/// Which raw mark survives when a `Plus` is split by Remove.
///
/// `KeepVertical` leaves `Vertical` on the cell (the horizontal stroke is
/// removed); `KeepHorizontal` leaves `Horizontal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeepSymbol {
    KeepVertical,
    KeepHorizontal,
}

/// A complete player action.
///
/// ## Example
///
/// ```
/// use plus_slash::core::{Action, BlockAction};
///
/// let play = Action::Move { index: 4 };
/// let block = Action::Block { index: 0, kind: BlockAction::Place };
///
/// assert!(play.ends_turn());
/// assert_eq!(block.index(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Normal move on a cell.
    Move { index: usize },
    /// Block ability.
    Block { index: usize, kind: BlockAction },
    /// Remove ability. `keep` is required for `Plus` targets only.
    Remove { index: usize, keep: Option<KeepSymbol> },
}

impl Action {
    /// Target cell of this action.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            Action::Move { index }
            | Action::Block { index, .. }
            | Action::Remove { index, .. } => index,
        }
    }

    /// Check if applying this action passes the turn.
    #[must_use]
    pub const fn ends_turn(&self) -> bool {
        !matches!(self, Action::Remove { .. })
    }

    /// Check if this action consumes a one-shot ability.
    #[must_use]
    pub const fn is_ability(&self) -> bool {
        !matches!(self, Action::Move { .. })
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Move lists next to the undo/redo log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// History position the action was taken from (0 = start of game).
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}
