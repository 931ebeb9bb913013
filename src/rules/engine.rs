//! The Plus-Slash rule engine.
//!
//! Pure functions over `GameState`:
//! - `check_winner`: three `Slash` in a line
//! - `is_valid_move`: legality of a normal move
//! - `apply_move`, `apply_block_action`, `apply_remove_action`: transitions
//! - `legal_moves`, `legal_actions`: enumeration for hints and bots
//!
//! Transitions never mutate their input. They validate first and return
//! an error instead of a corrupted state.

use smallvec::SmallVec;

use crate::core::{
    Action, BlockAction, Board, GameState, KeepSymbol, Outcome, Phase, Player, Symbol, WinReason,
    CELL_COUNT, WINNING_LINES,
};
use crate::error::{Ability, GameError, Result};

/// Cell indices of legal normal moves.
pub type MoveList = SmallVec<[usize; CELL_COUNT]>;

/// Check if any row, column or diagonal holds three `Slash`.
#[must_use]
pub fn check_winner(board: &Board) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Symbol::Slash)))
}

/// Check if `player` may make a normal move on `index`.
///
/// Checked in order: game undecided, index on the board, cell not blocked,
/// cell is not the Ko cell, then the phase-dependent symbol rules.
#[must_use]
pub fn is_valid_move(state: &GameState, index: usize, player: Player) -> bool {
    if state.is_decided() || !Board::contains(index) {
        return false;
    }

    let cell = state.board.get(index);
    if cell == Some(Symbol::Block) || state.last_move_index == Some(index) {
        return false;
    }

    let opponent_symbol = player.opponent().raw_symbol();
    match (state.phase, cell) {
        // Empty cells reopen in Battle through Remove and Neutralize
        (_, None) => true,
        (_, Some(symbol)) if symbol == opponent_symbol => true,
        (Phase::Battle, Some(Symbol::Plus)) => true,
        _ => false,
    }
}

/// Every legal normal move for the player to move, ascending.
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    (0..CELL_COUNT)
        .filter(|&i| is_valid_move(state, i, state.current_player))
        .collect()
}

/// Apply a normal move for the player to move.
///
/// The cell upgrades (empty → own raw, opposing raw → `Plus`,
/// `Plus` → `Slash`). A completed Slash line decides the game and keeps the
/// turn with the winner; otherwise a full board in Expansion starts Battle
/// and the turn passes.
pub fn apply_move(state: &GameState, index: usize) -> Result<GameState> {
    if state.is_decided() {
        return Err(GameError::GameAlreadyDecided);
    }

    let mover = state.current_player;
    if !is_valid_move(state, index, mover) {
        return Err(GameError::InvalidMoveTarget { index });
    }

    let symbol = match state.board.get(index) {
        None => mover.raw_symbol(),
        Some(Symbol::Plus) => Symbol::Slash,
        Some(s) if s == mover.opponent().raw_symbol() => Symbol::Plus,
        Some(_) => return Err(GameError::InvalidMoveTarget { index }),
    };
    let board = state.board.with(index, Some(symbol));

    if check_winner(&board) {
        let won = GameState {
            board,
            last_move_index: Some(index),
            ..*state
        };
        return Ok(won.decided(Outcome::Winner(mover), WinReason::ThreeSlashes));
    }

    let phase = if state.phase == Phase::Expansion && board.is_full() {
        Phase::Battle
    } else {
        state.phase
    };

    Ok(GameState {
        board,
        phase,
        current_player: mover.opponent(),
        last_move_index: Some(index),
        ..*state
    })
}

/// Apply the Block ability for the player to move.
///
/// `Place` freezes an empty or raw-symbol cell; `Neutralize` clears an
/// existing Block. Either way the acting player's block flag is spent and
/// the turn passes with `index` as the new Ko cell.
pub fn apply_block_action(state: &GameState, index: usize, kind: BlockAction) -> Result<GameState> {
    let player = ensure_ability(state, index, Ability::Block)?;

    let cell = match (kind, state.board.get(index)) {
        (BlockAction::Place, None) => Some(Symbol::Block),
        (BlockAction::Place, Some(s)) if s.is_raw() => Some(Symbol::Block),
        (BlockAction::Place, Some(Symbol::Block)) => {
            return Err(GameError::IllegalActionForPhase {
                index,
                reason: "cell is already blocked",
            });
        }
        (BlockAction::Place, Some(_)) => return Err(GameError::InvalidMoveTarget { index }),
        (BlockAction::Neutralize, Some(Symbol::Block)) => None,
        (BlockAction::Neutralize, _) => {
            return Err(GameError::IllegalActionForPhase {
                index,
                reason: "only a Block can be neutralized",
            });
        }
    };

    let mut abilities = state.abilities;
    abilities[player].block_used = true;

    Ok(GameState {
        board: state.board.with(index, cell),
        current_player: player.opponent(),
        last_move_index: Some(index),
        abilities,
        ..*state
    })
}

/// Apply the Remove ability for the player to move.
///
/// Downgrades the target: `Slash` → `Plus`, `Plus` → the kept raw symbol,
/// raw symbol → empty. `keep` is required for a `Plus` and rejected for
/// anything else. The turn does not pass and the Ko cell is untouched.
pub fn apply_remove_action(
    state: &GameState,
    index: usize,
    keep: Option<KeepSymbol>,
) -> Result<GameState> {
    let player = ensure_ability(state, index, Ability::Remove)?;

    let cell = match (state.board.get(index), keep) {
        (None | Some(Symbol::Block), _) => return Err(GameError::InvalidMoveTarget { index }),
        (Some(Symbol::Plus), Some(KeepSymbol::KeepVertical)) => Some(Symbol::Vertical),
        (Some(Symbol::Plus), Some(KeepSymbol::KeepHorizontal)) => Some(Symbol::Horizontal),
        (Some(Symbol::Plus), None) => {
            return Err(GameError::IllegalActionForPhase {
                index,
                reason: "splitting a Plus needs a symbol to keep",
            });
        }
        (Some(_), Some(_)) => {
            return Err(GameError::IllegalActionForPhase {
                index,
                reason: "only a Plus can be split",
            });
        }
        (Some(Symbol::Slash), None) => Some(Symbol::Plus),
        (Some(_), None) => None,
    };

    let mut abilities = state.abilities;
    abilities[player].remove_used = true;

    Ok(GameState {
        board: state.board.with(index, cell),
        abilities,
        ..*state
    })
}

/// Apply any action for the player to move.
pub fn apply_action(state: &GameState, action: &Action) -> Result<GameState> {
    match *action {
        Action::Move { index } => apply_move(state, index),
        Action::Block { index, kind } => apply_block_action(state, index, kind),
        Action::Remove { index, keep } => apply_remove_action(state, index, keep),
    }
}

/// Every action the player to move could legally take, abilities included.
///
/// Empty once the game is decided.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    const KEEPS: [Option<KeepSymbol>; 3] = [
        None,
        Some(KeepSymbol::KeepVertical),
        Some(KeepSymbol::KeepHorizontal),
    ];

    let mut actions = Vec::new();
    for index in 0..CELL_COUNT {
        let candidates = [
            Action::Move { index },
            Action::Block { index, kind: BlockAction::Place },
            Action::Block { index, kind: BlockAction::Neutralize },
        ]
        .into_iter()
        .chain(KEEPS.into_iter().map(|keep| Action::Remove { index, keep }));

        actions.extend(candidates.filter(|a| apply_action(state, a).is_ok()));
    }
    actions
}

/// Shared precondition checks for the one-shot abilities.
fn ensure_ability(state: &GameState, index: usize, ability: Ability) -> Result<Player> {
    if state.is_decided() {
        return Err(GameError::GameAlreadyDecided);
    }
    if !Board::contains(index) {
        return Err(GameError::InvalidMoveTarget { index });
    }

    let player = state.current_player;
    let abilities = state.abilities[player];
    let used = match ability {
        Ability::Block => abilities.block_used,
        Ability::Remove => abilities.remove_used,
    };
    if used {
        return Err(GameError::AbilityAlreadyUsed { player, ability });
    }

    Ok(player)
}
