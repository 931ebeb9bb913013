//! Rules engine for Plus-Slash.
//!
//! Stateless: every function takes a full `GameState` and returns a new
//! one (or a verdict). The same input always yields the same output, so
//! callers can replay, undo and re-validate freely.

pub mod engine;

pub use engine::{
    apply_action, apply_block_action, apply_move, apply_remove_action, check_winner,
    is_valid_move, legal_actions, legal_moves, MoveList,
};
