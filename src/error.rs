//! Error types.
//!
//! Every error is recoverable: the rejected action leaves state unchanged.

use crate::core::Player;

/// Ability named in `GameError::AbilityAlreadyUsed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ability {
    Block,
    Remove,
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ability::Block => write!(f, "Block"),
            Ability::Remove => write!(f, "Remove"),
        }
    }
}

/// Rejected game action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {index} is not a legal target")]
    InvalidMoveTarget { index: usize },

    #[error("the game is already decided")]
    GameAlreadyDecided,

    #[error("action not allowed on cell {index}: {reason}")]
    IllegalActionForPhase { index: usize, reason: &'static str },

    #[error("{player} has already used {ability}")]
    AbilityAlreadyUsed { player: Player, ability: Ability },

    #[error("abilities are disabled in this variant")]
    AbilitiesDisabled,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("the peer has disconnected")]
    Disconnected,
}

/// Failure to encode or decode a config or wire event.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),
}

/// Result type alias for convenience
pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidMoveTarget { index: 4 }.to_string(),
            "cell 4 is not a legal target"
        );
        assert_eq!(
            GameError::AbilityAlreadyUsed { player: Player::Two, ability: Ability::Remove }.to_string(),
            "Player 2 has already used Remove"
        );
    }

    #[test]
    fn test_codec_error_from_json() {
        let err: CodecError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CodecError::Json(_)));
    }
}
