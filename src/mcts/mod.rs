//! Monte Carlo Tree Search over normal moves.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes live in a flat vector, referenced by `NodeId`
//! - **Two-player**: each node is scored for its own player to move
//! - **Configurable policies**: selection (UCB1) and simulation (random)
//! - **Deterministic**: same seed, same answers
//!
//! ## Usage
//!
//! ```rust
//! use plus_slash::core::GameState;
//! use plus_slash::mcts::{MCTSConfig, MCTSSearch};
//!
//! let config = MCTSConfig::default().with_iterations(200);
//! let mut search = MCTSSearch::new(config);
//!
//! if let Some(cell) = search.search(&GameState::new()) {
//!     println!("best cell: {cell}");
//! }
//! for (cell, prob) in search.action_probabilities() {
//!     println!("{cell}: {:.2}%", prob * 100.0);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use node::{Edge, MCTSNode, NodeId};
pub use policy::{outcome_rewards, RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
