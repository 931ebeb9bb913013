//! Append-only snapshot log with an undo/redo cursor.
//!
//! Uses `im` persistent vectors so keeping every snapshot is cheap and a
//! clone of the whole history is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GameState};

/// Ordered log of game states.
///
/// `states[0]` is the start of the game; `records[i]` is the action that
/// turned `states[i]` into `states[i + 1]`. The cursor selects the state
/// currently shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    states: Vector<GameState>,
    records: Vector<ActionRecord>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl History {
    /// Create a history starting at `initial`.
    #[must_use]
    pub fn new(initial: GameState) -> Self {
        Self {
            states: Vector::unit(initial),
            records: Vector::new(),
            cursor: 0,
        }
    }

    /// State under the cursor.
    #[must_use]
    pub fn current(&self) -> &GameState {
        // cursor < states.len() always holds
        &self.states[self.cursor]
    }

    /// Cursor position (0 = start of game).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a history holds at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Actions leading up to the cursor.
    pub fn records(&self) -> impl Iterator<Item = &ActionRecord> {
        self.records.iter().take(self.cursor)
    }

    /// All snapshots, including any redo tail.
    pub fn states(&self) -> impl Iterator<Item = &GameState> {
        self.states.iter()
    }

    /// Append a new state after the cursor.
    ///
    /// Anything past the cursor (the redo tail) is discarded first.
    pub fn push(&mut self, record: ActionRecord, state: GameState) {
        self.states.truncate(self.cursor + 1);
        self.records.truncate(self.cursor);
        self.states.push_back(state);
        self.records.push_back(record);
        self.cursor += 1;
    }

    /// Overwrite the state under the cursor, dropping any redo tail.
    ///
    /// Used for outcomes that are not actions (time-out, stalemate).
    pub fn amend(&mut self, state: GameState) {
        self.states.truncate(self.cursor + 1);
        self.records.truncate(self.cursor);
        self.states.set(self.cursor, state);
    }

    /// Step the cursor back. Returns true if it moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step the cursor forward. Returns true if it moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.states.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Check if a redo tail exists.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Drop everything and start again from `initial`.
    pub fn reset(&mut self, initial: GameState) {
        *self = Self::new(initial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Player};
    use crate::rules::apply_move;

    fn play(history: &mut History, index: usize) {
        let state = *history.current();
        let next = apply_move(&state, index).unwrap();
        let record = ActionRecord::new(state.current_player, Action::Move { index }, history.cursor() as u32);
        history.push(record, next);
    }

    #[test]
    fn test_new_history() {
        let history = History::default();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(*history.current(), GameState::new());
        assert!(!history.is_empty());
    }

    #[test]
    fn test_undo_redo() {
        let mut history = History::default();
        play(&mut history, 4);
        play(&mut history, 0);

        assert_eq!(history.cursor(), 2);
        assert!(history.undo());
        assert_eq!(history.current().board.get(0), None);
        assert_eq!(history.current().board.get(4), Some(crate::core::Symbol::Vertical));

        assert!(history.redo());
        assert_eq!(history.cursor(), 2);
        assert!(!history.redo());
    }

    #[test]
    fn test_undo_at_start() {
        let mut history = History::default();
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_push_discards_redo_tail() {
        let mut history = History::default();
        play(&mut history, 4);
        play(&mut history, 0);
        history.undo();
        history.undo();
        assert!(history.can_redo());

        play(&mut history, 8);

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.current().board.get(8), Some(crate::core::Symbol::Vertical));

        let records: Vec<_> = history.records().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].action, Action::Move { index: 8 });
        assert_eq!(records[0].player, Player::One);
    }

    #[test]
    fn test_records_follow_cursor() {
        let mut history = History::default();
        play(&mut history, 4);
        play(&mut history, 0);
        history.undo();

        assert_eq!(history.records().count(), 1);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut history = History::default();
        play(&mut history, 4);
        let snapshot = history.clone();
        play(&mut history, 0);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_amend_replaces_current() {
        let mut history = History::default();
        play(&mut history, 4);
        play(&mut history, 0);
        history.undo();

        let mut amended = *history.current();
        amended.last_move_index = None;
        history.amend(amended);

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().last_move_index, None);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_reset() {
        let mut history = History::default();
        play(&mut history, 4);
        history.reset(GameState::new());

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
    }
}
