//! # Game Configuration
//!
//! Optional TOML file tuning the interpreter. Every field has a default, and
//! [`GameConfig::default`] plays the reference game, so a file only needs the
//! parts it changes:
//!
//! ```toml
//! [game]
//! prompt = "> "
//! take_all = "every"
//!
//! [unlock]
//! room = "east hall south"
//! direction = "s"
//! destination = "outside"
//!
//! [teleport]
//! required_item = "regalia"
//! rooms = ["A-1342", "A-1374"]
//!
//! [victory]
//! room = "outside"
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game: GameSettings,
    pub unlock: UnlockConfig,
    pub teleport: TeleportConfig,
    pub victory: VictoryConfig,
}

/// General interpreter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Printed before reading each command.
    pub prompt: String,
    pub take_all: TakeAllPolicy,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            prompt: "Enter command: ".to_string(),
            take_all: TakeAllPolicy::First,
        }
    }
}

/// What `take all` picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TakeAllPolicy {
    /// Only the last item in the room.
    #[default]
    First,
    /// Every item in the room.
    Every,
}

/// The scripted event that opens a new exit once its trigger items meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnlockConfig {
    /// Items that must all lie in the same room. They are consumed.
    pub trigger_items: Vec<String>,
    /// Room that gains the new exit.
    pub room: String,
    pub direction: String,
    pub destination: String,
    /// Text replaced (last occurrence) in the room description.
    pub find: String,
    pub replace: String,
    pub narration: Vec<String>,
}

impl Default for UnlockConfig {
    fn default() -> Self {
        Self {
            trigger_items: vec!["bike".to_string(), "instructor".to_string()],
            room: "east hall south".to_string(),
            direction: "s".to_string(),
            destination: "outside".to_string(),
            find: " locked".to_string(),
            replace: " now unlocked".to_string(),
            narration: vec![
                "The instructor wakes up and gets on the bike.".to_string(),
                "Before you can ask him what's happening, he pedals off".to_string(),
                "and leaves the building going south from the east hall.".to_string(),
            ],
        }
    }
}

/// The easter-egg teleport between two fixed rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportConfig {
    /// Item the player must carry for the teleport to work.
    pub required_item: String,
    pub rooms: [String; 2],
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            required_item: "regalia".to_string(),
            rooms: ["A-1342".to_string(), "A-1374".to_string()],
        }
    }
}

/// Where the game is won.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VictoryConfig {
    /// Compared case-insensitively with the current room id.
    pub room: String,
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self {
            room: "outside".to_string(),
        }
    }
}

impl GameConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("reading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the interpreter cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unlock.trigger_items.is_empty() {
            return Err(ConfigError::Invalid(
                "unlock.trigger_items must name at least one item".to_string(),
            ));
        }
        for (at, name) in self.unlock.trigger_items.iter().enumerate() {
            if self.unlock.trigger_items[..at].contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "unlock.trigger_items lists '{}' more than once",
                    name
                )));
            }
        }
        if self.unlock.direction.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "unlock.direction must not be empty".to_string(),
            ));
        }
        if self.teleport.rooms[0] == self.teleport.rooms[1] {
            return Err(ConfigError::Invalid(format!(
                "teleport.rooms must differ, both are '{}'",
                self.teleport.rooms[0]
            )));
        }
        Ok(())
    }

    /// Check if `room_id` is the winning room.
    pub fn is_victory_room(&self, room_id: &str) -> bool {
        room_id.to_lowercase() == self.victory.room.to_lowercase()
    }
}
