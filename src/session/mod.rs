//! Session layer: history and local play around the pure engine.
//!
//! - `History`: immutable snapshots with an undo/redo cursor
//! - `Session`: variant gating, time-out and stalemate outcomes

pub mod history;
pub mod local;

pub use history::History;
pub use local::Session;
