//! Player setup done before a game starts: names and colours come from the
//! user, are checked here, and only then become engine [`Player`] tokens.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::game::{PieceColor, Player, Seat};

/// One player as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: PieceColor,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        PlayerConfig {
            name: name.into(),
            color,
        }
    }
}

/// Both players of a game, first to move listed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialPlayerSetup")]
pub struct PlayerSetup {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
}

impl Default for PlayerSetup {
    fn default() -> Self {
        PlayerSetup {
            first: PlayerConfig::new("Player 1", PieceColor::Red),
            second: PlayerConfig::new("Player 2", PieceColor::Yellow),
        }
    }
}

/// A player section as written in a config file; missing fields fall back
/// to the seat's default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialPlayerConfig {
    name: Option<String>,
    color: Option<PieceColor>,
}

impl PartialPlayerConfig {
    fn or(self, fallback: PlayerConfig) -> PlayerConfig {
        PlayerConfig {
            name: self.name.unwrap_or(fallback.name),
            color: self.color.unwrap_or(fallback.color),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialPlayerSetup {
    first: PartialPlayerConfig,
    second: PartialPlayerConfig,
}

impl From<PartialPlayerSetup> for PlayerSetup {
    fn from(partial: PartialPlayerSetup) -> Self {
        let defaults = PlayerSetup::default();
        PlayerSetup {
            first: partial.first.or(defaults.first),
            second: partial.second.or(defaults.second),
        }
    }
}

impl PlayerSetup {
    /// Both names must be non-blank and different from each other.
    pub fn validate(&self) -> Result<(), SetupError> {
        let first = self.first.name.trim();
        let second = self.second.name.trim();
        if first.is_empty() {
            return Err(SetupError::EmptyName(Seat::First));
        }
        if second.is_empty() {
            return Err(SetupError::EmptyName(Seat::Second));
        }
        if first == second {
            return Err(SetupError::DuplicateName(first.to_string()));
        }
        Ok(())
    }

    /// Validate and build the two player tokens, names trimmed.
    pub fn players(&self) -> Result<(Player, Player), SetupError> {
        self.validate()?;
        Ok((
            Player::new(self.first.name.trim(), self.first.color),
            Player::new(self.second.name.trim(), self.second.color),
        ))
    }
}
