//! Transport events and their wire codec.
//!
//! The peer channel carries three events. Each is wrapped in an
//! `Envelope` stamped with the sender's ply, so a receiver can spot
//! duplicated or reordered deliveries.
//!
//! Two encodings are provided: JSON for text channels and `bincode` for
//! binary ones.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Event sent between peers.
///
/// JSON form: `{"MOVE":{"index":4}}`, `"RESET"`, `"PLAYER_DISCONNECT"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerEvent {
    /// The remote peer played a normal move.
    Move { index: usize },
    /// The remote peer started a fresh game.
    Reset,
    /// The channel closed.
    #[serde(rename = "PLAYER_DISCONNECT")]
    PeerDisconnect,
}

/// An event stamped with the sender's turn counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Envelope {
    /// Number of moves in the sender's history when the event was made.
    pub ply: u32,

    /// The event itself.
    pub event: PeerEvent,
}

impl Envelope {
    /// Create a new envelope.
    #[must_use]
    pub const fn new(ply: u32, event: PeerEvent) -> Self {
        Self { ply, event }
    }

    /// Encode as JSON text.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
