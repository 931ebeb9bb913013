//! Game configuration types.
//!
//! A session is configured at startup by providing:
//! - `Variant`: classic rules or the block/remove variant
//! - `BotConfig`: which bot answers for a computer-controlled seat
//! - `GameConfig`: combines both
//!
//! Configs are plain serde values, so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::action::Action;
use crate::bot::BotConfig;
use crate::error::CodecError;

/// Rule variant for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Normal moves only.
    #[default]
    Classic,
    /// Normal moves plus the one-shot Block and Remove abilities.
    BlockRemove,
}

impl Variant {
    /// Check if this variant permits the given action.
    #[must_use]
    pub fn allows(self, action: &Action) -> bool {
        match self {
            Variant::Classic => !action.is_ability(),
            Variant::BlockRemove => true,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rule variant.
    pub variant: Variant,

    /// Bot settings for computer-controlled seats.
    pub bot: BotConfig,
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use plus_slash::core::{GameConfig, Variant};
    ///
    /// let config = GameConfig::from_json(r#"{ "variant": "BlockRemove" }"#).unwrap();
    /// assert_eq!(config.variant, Variant::BlockRemove);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the rule variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the bot settings.
    pub fn with_bot(mut self, bot: BotConfig) -> Self {
        self.bot = bot;
        self
    }
}
