use tracing::{debug, info};

use super::board::DropError;
use super::{Board, Cell, Player, Seat};
use crate::error::GameError;

/// Where a piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

/// Why `apply_move` left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    GameOver,
    ColumnFull,
    InvalidColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored(IgnoreReason),
    /// The mover completed four in a row. Play stops.
    Win(Player),
    /// The mover filled the last empty cell without winning.
    Tie,
    /// The move stood; carries the player whose turn it is now.
    Continue(Player),
}

/// Result of one `apply_move` call. `landing` is `None` exactly when the
/// move was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub outcome: MoveOutcome,
    pub landing: Option<Position>,
}

impl MoveResult {
    fn ignored(reason: IgnoreReason) -> Self {
        MoveResult {
            outcome: MoveOutcome::Ignored(reason),
            landing: None,
        }
    }

    /// Did a piece land on the board
    pub fn is_applied(&self) -> bool {
        self.landing.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Won(Player),
    Tied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOutcome {
    Winner(Seat),
    Draw,
}

/// Owns one game: the board, both players, whose turn it is and whether
/// the game has ended. All changes go through [`GameEngine::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    active: Seat,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    /// Start a game on an empty `width x height` board with `first` to move.
    pub fn new(width: usize, height: usize, first: Player, second: Player) -> Result<Self, GameError> {
        let board = Board::new(width, height)?;
        info!(
            width,
            height,
            first = first.name(),
            second = second.name(),
            "new game"
        );
        Ok(GameEngine {
            board,
            players: [first, second],
            active: Seat::First,
            outcome: None,
        })
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of a cell, `None` when the position is off the board
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.height() && column < self.width()).then(|| self.board.get(row, column))
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// The player to move, or the winner once the game is won
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            None => GameStatus::InProgress(self.active_player().clone()),
            Some(GameOutcome::Winner(seat)) => GameStatus::Won(self.player(seat).clone()),
            Some(GameOutcome::Draw) => GameStatus::Tied,
        }
    }

    /// Lowest empty row of `column`, `None` when it is full
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        self.board.landing_row(column)
    }

    /// Columns that would accept a piece right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// A finished game, a full column and an unknown column are reported as
    /// [`MoveOutcome::Ignored`] and change nothing. Otherwise the piece lands,
    /// then a win is checked before a tie; only a non-terminal move passes
    /// the turn.
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        if self.is_over() {
            debug!(column, "move ignored: game already over");
            return MoveResult::ignored(IgnoreReason::GameOver);
        }

        let row = match self.board.drop_piece(column, self.active) {
            Ok(row) => row,
            Err(err) => {
                let reason = match err {
                    DropError::ColumnFull => IgnoreReason::ColumnFull,
                    DropError::InvalidColumn => IgnoreReason::InvalidColumn,
                };
                debug!(column, ?reason, "move ignored");
                return MoveResult::ignored(reason);
            }
        };
        debug!(row, column, player = self.active_player().name(), "piece placed");

        let outcome = if self.board.has_four_in_a_row(self.active) {
            self.outcome = Some(GameOutcome::Winner(self.active));
            info!(winner = self.active_player().name(), "game won");
            MoveOutcome::Win(self.active_player().clone())
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!("game tied");
            MoveOutcome::Tie
        } else {
            self.active = self.active.other();
            MoveOutcome::Continue(self.active_player().clone())
        };

        MoveResult {
            outcome,
            landing: Some(Position { row, column }),
        }
    }
}
