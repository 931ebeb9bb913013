//! Online mode: wire events and the peer-synchronized session.

pub mod event;
pub mod online;

pub use event::{Envelope, PeerEvent};
pub use online::{DropReason, OnlineSession, RemoteOutcome, Role};
