use super::Seat;
use crate::error::GameError;

/// Smallest width or height on which four in a row can fit.
pub const MIN_DIMENSION: usize = 4;
/// Number of pieces in a winning run.
pub const WIN_LENGTH: usize = 4;

/// Row/column steps of the four run shapes anchored at a cell:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Seat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// Rectangular grid of cells, row 0 at the top. Dimensions are fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board, rejecting dimensions below 4x4
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GameError::InvalidDimension { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        row * self.width + col
    }

    /// Lowest empty row in a column, or `None` if the column is full or
    /// does not exist
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<usize, DropError> {
        if col >= self.width {
            return Err(DropError::InvalidColumn);
        }
        let row = self.landing_row(col).ok_or(DropError::ColumnFull)?;
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Taken(seat);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check the whole board for a run of four owned by `seat`.
    ///
    /// Every cell is tried as the anchor of each run shape, not only the
    /// neighbourhood of the last move.
    pub fn has_four_in_a_row(&self, seat: Seat) -> bool {
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                RUN_DIRECTIONS
                    .iter()
                    .any(|&step| self.run_is_owned(row, col, step, seat))
            })
        })
    }

    /// All cells of the run must be on the board and taken by `seat`
    fn run_is_owned(&self, row: usize, col: usize, (dr, dc): (isize, isize), seat: Seat) -> bool {
        (0..WIN_LENGTH as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            self.contains(r, c) && self.get(r as usize, c as usize) == Cell::Taken(seat)
        })
    }

    fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }
}
