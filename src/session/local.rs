//! Local play: one board, both seats on the same machine.

use log::{debug, info};

use crate::bot::MoveSelector;
use crate::core::{
    Action, ActionRecord, BlockAction, GameConfig, GameState, KeepSymbol, Outcome, Player,
    Symbol, WinReason,
};
use crate::error::{GameError, Result};
use crate::rules::{self, MoveList};

use super::history::History;

/// A local game session.
///
/// Wraps the pure engine with the things a table needs: variant gating of
/// abilities, an undo/redo history, time-out and stalemate outcomes.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    history: History,
}

impl Session {
    /// Start a new game with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            history: History::default(),
        }
    }

    /// Resume from a saved position. Undo stops at `state`.
    #[must_use]
    pub fn with_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            history: History::new(state),
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// State under the history cursor.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.history.current()
    }

    /// The full history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check if the game is decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state().is_decided()
    }

    /// Legal normal moves for the player to move (move hints).
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(self.state())
    }

    /// Every action the variant allows the player to move to take.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let variant = self.config.variant;
        rules::legal_actions(self.state())
            .into_iter()
            .filter(|a| variant.allows(a))
            .collect()
    }

    /// Apply an action for the player to move.
    ///
    /// On success the new state is appended to the history (dropping any
    /// redo tail). If the next player then has nothing legal to do, the
    /// game is recorded as a stalemate draw.
    pub fn play(&mut self, action: Action) -> Result<&GameState> {
        if !self.config.variant.allows(&action) {
            return Err(GameError::AbilitiesDisabled);
        }

        let state = *self.state();
        let next = rules::apply_action(&state, &action)?;
        debug!("{} played {:?}", state.current_player, action);

        if next.phase != state.phase {
            info!("board full, entering {:?}", next.phase);
        }

        let record = ActionRecord::new(state.current_player, action, self.history.cursor() as u32);
        self.history.push(record, next);
        self.settle_stalemate();

        if let (Some(outcome), Some(reason)) = (self.state().winner, self.state().win_reason) {
            info!("game decided: {outcome:?} ({reason})");
        }

        Ok(self.state())
    }

    /// Play a normal move.
    pub fn play_move(&mut self, index: usize) -> Result<&GameState> {
        self.play(Action::Move { index })
    }

    /// Use the Block ability on a cell.
    ///
    /// Neutralizes the cell if it already holds a Block, places one
    /// otherwise.
    pub fn toggle_block(&mut self, index: usize) -> Result<&GameState> {
        let kind = if self.state().board.get(index) == Some(Symbol::Block) {
            BlockAction::Neutralize
        } else {
            BlockAction::Place
        };
        self.play(Action::Block { index, kind })
    }

    /// Use the Remove ability on a cell.
    pub fn remove(&mut self, index: usize, keep: Option<KeepSymbol>) -> Result<&GameState> {
        self.play(Action::Remove { index, keep })
    }

    /// Ask a bot for the player to move and apply its answer.
    ///
    /// Returns the chosen cell, or `None` if the bot found no move. The
    /// game is then a stalemate draw only if the variant leaves no other
    /// action; otherwise the turn stays open for an ability.
    pub fn play_bot(&mut self, bot: &mut dyn MoveSelector) -> Result<Option<usize>> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyDecided);
        }

        match bot.select_move(self.state()) {
            Some(index) => {
                debug!("{} chose cell {index}", bot.name());
                self.play_move(index)?;
                Ok(Some(index))
            }
            None => {
                if self.legal_actions().is_empty() {
                    self.decide(Outcome::Draw, WinReason::Stalemate);
                }
                Ok(None)
            }
        }
    }

    /// Record that `loser` ran out of time; the other player wins.
    pub fn time_out(&mut self, loser: Player) -> Result<&GameState> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyDecided);
        }
        info!("{loser} ran out of time");
        self.decide(Outcome::Winner(loser.opponent()), WinReason::TimeOut);
        Ok(self.state())
    }

    /// Step back one action. Refused once the game is decided.
    pub fn undo(&mut self) -> bool {
        !self.is_finished() && self.history.undo()
    }

    /// Step forward one action. Refused once the game is decided.
    pub fn redo(&mut self) -> bool {
        !self.is_finished() && self.history.redo()
    }

    /// Start a fresh game with the same configuration.
    pub fn reset(&mut self) {
        info!("starting a new game");
        self.history.reset(GameState::new());
    }

    /// Record a draw if the player to move has nothing legal left.
    fn settle_stalemate(&mut self) {
        if !self.is_finished() && self.legal_actions().is_empty() {
            info!("{} has no legal action", self.state().current_player);
            self.decide(Outcome::Draw, WinReason::Stalemate);
        }
    }

    /// Mark the state under the cursor as decided.
    fn decide(&mut self, outcome: Outcome, reason: WinReason) {
        let decided = self.state().decided(outcome, reason);
        self.history.amend(decided);
    }
}
