use serde::{Deserialize, Serialize};

/// Which of the two players a piece or turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Display colour of a player's pieces. The engine never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
}

impl PieceColor {
    pub const ALL: [PieceColor; 6] = [
        PieceColor::Red,
        PieceColor::Yellow,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Magenta,
        PieceColor::Cyan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Yellow => "yellow",
            PieceColor::Blue => "blue",
            PieceColor::Green => "green",
            PieceColor::Magenta => "magenta",
            PieceColor::Cyan => "cyan",
        }
    }
}

impl std::str::FromStr for PieceColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color '{s}'"))
    }
}

/// A participant in a game: a name and a piece colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    color: PieceColor,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Player {
            name: name.into(),
            color,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }
}
