use std::path::PathBuf;

use crate::game::Seat;

/// Errors raised while creating a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board {width}x{height} is too small for four in a row (minimum 4x4)")]
    InvalidDimension { width: usize, height: usize },
}

/// Errors in the players supplied for a new game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{} player needs a name", seat_label(.0))]
    EmptyName(Seat),

    #[error("both players are named '{0}'")]
    DuplicateName(String),
}

fn seat_label(seat: &Seat) -> &'static str {
    match seat {
        Seat::First => "first",
        Seat::Second => "second",
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid players: {0}")]
    Setup(#[from] SetupError),
}
