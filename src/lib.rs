//! # plus-slash
//!
//! Rule engine for Plus-Slash, a two-phase game on a 3×3 board.
//!
//! ## Rules in Brief
//!
//! 1. **Expansion**: players take turns marking cells. An empty cell takes
//!    the mover's stroke (`|` or `-`); an opponent's stroke is upgraded to
//!    a `+`. When the board fills, the game enters Battle.
//!
//! 2. **Battle**: moves also upgrade `+` to `/`. Three `/` in a line wins
//!    for whoever completed it.
//!
//! 3. **Ko**: no normal move may target the cell the previous turn touched.
//!
//! The block/remove variant gives each player one Block (freeze or unfreeze
//! a cell) and one Remove (downgrade a cell without ending the turn).
//!
//! ## Architecture
//!
//! - **Pure Engine**: `rules` functions take a `GameState` and return a new
//!   one or an error. No I/O, no hidden state.
//!
//! - **Persistent History**: `session::History` keeps every snapshot in an
//!   `im` vector, so undo/redo is a cursor move.
//!
//! - **Re-validated Peers**: online moves are checked against local state
//!   and dropped when they do not fit.
//!
//! ## Modules
//!
//! - `core`: players, symbols, board, state, actions, RNG, configuration
//! - `rules`: the transition functions
//! - `error`: rejected actions and codec failures
//! - `session`: local play with history, undo/redo, time-out
//! - `net`: online events, wire codec, peer session
//! - `mcts`: Monte Carlo Tree Search over normal moves
//! - `bot`: computer opponents

pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod net;
pub mod mcts;
pub mod bot;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap, Symbol, Board, CELL_COUNT, WINNING_LINES,
    Phase, Outcome, WinReason, Abilities, GameState,
    Action, ActionRecord, BlockAction, KeepSymbol,
    GameConfig, Variant, GameRng,
};

pub use crate::error::{Ability, CodecError, GameError, Result};

pub use crate::rules::{
    apply_action, apply_block_action, apply_move, apply_remove_action,
    check_winner, is_valid_move, legal_actions, legal_moves, MoveList,
};

pub use crate::session::{History, Session};

pub use crate::net::{DropReason, Envelope, OnlineSession, PeerEvent, RemoteOutcome, Role};

pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::bot::{BotConfig, BotKind, FallbackBot, MctsBot, MoveSelector, RandomBot};
