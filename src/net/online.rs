//! Peer-synchronized online play.
//!
//! Each peer keeps its own `History` and applies its own moves locally
//! before sending them. Incoming moves are re-validated against the local
//! state; anything that does not fit (stale, reordered, out of turn or
//! illegal) is dropped without touching state.
//!
//! ## Roles
//!
//! The host plays `Player::One`, the joiner `Player::Two`. Online games
//! use the classic rules only and have no undo.

use log::{debug, info, warn};

use crate::core::{Action, ActionRecord, GameState, Player};
use crate::error::{CodecError, GameError, Result};
use crate::rules;
use crate::session::History;

use super::event::{Envelope, PeerEvent};

/// Which side of the connection this peer is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Host,
    Joiner,
}

impl Role {
    /// Seat this role plays.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Role::Host => Player::One,
            Role::Joiner => Player::Two,
        }
    }
}

/// Why an incoming event was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The event's ply is behind ours (already applied).
    Duplicate,
    /// The event's ply is ahead of ours (something was missed).
    OutOfOrder,
    /// It is not the remote player's turn.
    NotRemoteTurn,
    /// The move fails validation against our state.
    IllegalMove,
    /// The channel is already closed.
    Disconnected,
}

/// What `receive` did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// A remote move was applied; carries the new state.
    Applied(GameState),
    /// The game was restarted.
    Reset,
    /// The peer left.
    Disconnected,
    /// The event was ignored.
    Dropped(DropReason),
}

/// One peer's view of an online game.
#[derive(Clone, Debug)]
pub struct OnlineSession {
    role: Role,
    history: History,
    connected: bool,
}

impl OnlineSession {
    /// Create a session for the given role.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            history: History::default(),
            connected: true,
        }
    }

    /// Session for the peer that opened the room.
    #[must_use]
    pub fn host() -> Self {
        Self::new(Role::Host)
    }

    /// Session for the peer that joined the room.
    #[must_use]
    pub fn join() -> Self {
        Self::new(Role::Joiner)
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Seat played on this machine.
    #[must_use]
    pub fn local_player(&self) -> Player {
        self.role.player()
    }

    /// Seat played by the peer.
    #[must_use]
    pub fn remote_player(&self) -> Player {
        self.role.player().opponent()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Check if the local player is to move.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.connected && !self.state().is_decided() && self.state().current_player == self.local_player()
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.cursor() as u32
    }

    /// Play a move for the local player and return the envelope to send.
    pub fn play_local(&mut self, index: usize) -> Result<Envelope> {
        if !self.connected {
            return Err(GameError::Disconnected);
        }

        let state = *self.state();
        if state.is_decided() {
            return Err(GameError::GameAlreadyDecided);
        }
        let local = self.local_player();
        if state.current_player != local {
            return Err(GameError::NotYourTurn { player: local });
        }

        let next = rules::apply_move(&state, index)?;
        let ply = self.ply();
        self.history.push(ActionRecord::new(local, Action::Move { index }, ply), next);
        debug!("{local} played cell {index} at ply {ply}");

        Ok(Envelope::new(ply, PeerEvent::Move { index }))
    }

    /// Restart locally and return the envelope that tells the peer.
    pub fn request_reset(&mut self) -> Envelope {
        info!("{:?} reset the game", self.role);
        self.history.reset(GameState::new());
        Envelope::new(0, PeerEvent::Reset)
    }

    /// Mark the channel closed from this side.
    pub fn close(&mut self) {
        if self.connected {
            info!("closing connection");
        }
        self.connected = false;
    }

    /// Handle an event from the peer.
    pub fn receive(&mut self, envelope: Envelope) -> RemoteOutcome {
        if !self.connected {
            return self.drop_event(envelope, DropReason::Disconnected);
        }

        match envelope.event {
            PeerEvent::PeerDisconnect => {
                info!("peer disconnected");
                self.connected = false;
                RemoteOutcome::Disconnected
            }
            PeerEvent::Reset => {
                info!("peer reset the game");
                self.history.reset(GameState::new());
                RemoteOutcome::Reset
            }
            PeerEvent::Move { index } => self.receive_move(envelope, index),
        }
    }

    /// Decode a JSON envelope and handle it.
    pub fn receive_json(&mut self, text: &str) -> Result<RemoteOutcome, CodecError> {
        Ok(self.receive(Envelope::from_json(text)?))
    }

    /// Decode a binary envelope and handle it.
    pub fn receive_bytes(&mut self, bytes: &[u8]) -> Result<RemoteOutcome, CodecError> {
        Ok(self.receive(Envelope::from_bytes(bytes)?))
    }

    fn receive_move(&mut self, envelope: Envelope, index: usize) -> RemoteOutcome {
        let ply = self.ply();
        if envelope.ply < ply {
            return self.drop_event(envelope, DropReason::Duplicate);
        }
        if envelope.ply > ply {
            return self.drop_event(envelope, DropReason::OutOfOrder);
        }

        let state = *self.state();
        let remote = self.remote_player();
        if state.current_player != remote {
            return self.drop_event(envelope, DropReason::NotRemoteTurn);
        }
        if !rules::is_valid_move(&state, index, remote) {
            return self.drop_event(envelope, DropReason::IllegalMove);
        }

        match rules::apply_move(&state, index) {
            Ok(next) => {
                self.history.push(ActionRecord::new(remote, Action::Move { index }, ply), next);
                debug!("{remote} played cell {index} at ply {ply}");
                RemoteOutcome::Applied(next)
            }
            Err(_) => self.drop_event(envelope, DropReason::IllegalMove),
        }
    }

    fn drop_event(&self, envelope: Envelope, reason: DropReason) -> RemoteOutcome {
        warn!(
            "dropped {:?} at ply {} (local ply {}): {reason:?}",
            envelope.event,
            envelope.ply,
            self.ply()
        );
        RemoteOutcome::Dropped(reason)
    }
}
