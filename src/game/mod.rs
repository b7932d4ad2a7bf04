//! Core Connect Four rules: the board, player tokens, and the game engine
//! that applies moves and detects wins and ties.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DropError, MIN_DIMENSION, WIN_LENGTH};
pub use engine::{GameEngine, GameStatus, IgnoreReason, MoveOutcome, MoveResult, Position};
pub use player::{PieceColor, Player, Seat};
