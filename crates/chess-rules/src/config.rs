//! Rules configuration.
//!
//! A [`RulesConfig`] can be built in code or loaded from a TOML file:
//!
//! ```toml
//! starting_player = "black"
//! en_passant = "persistent"
//! ```

use chess_core::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How long a pawn stays capturable en passant after a double step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnPassantWindow {
    /// Only on the opponent's immediately following move.
    #[default]
    NextTurn,
    /// Until the pawn moves again.
    Persistent,
}

/// Rule options for a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Player to move first. Defaults to White.
    #[serde(default = "default_starting_player")]
    pub starting_player: Player,
    /// En passant window. Defaults to the next turn only.
    #[serde(default)]
    pub en_passant: EnPassantWindow,
}

fn default_starting_player() -> Player {
    Player::White
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            starting_player: default_starting_player(),
            en_passant: EnPassantWindow::default(),
        }
    }
}

impl RulesConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration file, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!(path = %path.display(), "no rules config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Sets the player to move first.
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Sets the en passant window.
    pub fn with_en_passant(mut self, window: EnPassantWindow) -> Self {
        self.en_passant = window;
        self
    }
}
