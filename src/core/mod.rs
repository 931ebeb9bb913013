//! Core types: players, symbols, board, state, actions, RNG, configuration.
//!
//! Everything here is a plain value. The rules engine reads and returns
//! these types but never keeps any of them.

pub mod player;
pub mod symbol;
pub mod board;
pub mod state;
pub mod action;
pub mod config;
pub mod rng;

pub use player::{Player, PlayerMap};
pub use symbol::Symbol;
pub use board::{Board, CELL_COUNT, WINNING_LINES};
pub use state::{Abilities, GameState, Outcome, Phase, WinReason};
pub use action::{Action, ActionRecord, BlockAction, KeepSymbol};
pub use config::{GameConfig, Variant};
pub use rng::GameRng;
