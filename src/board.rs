//! The game grid and gravity-drop mechanics
//!
//! Moves are applied in three steps: validate the column with
//! [`Board::is_valid_move`], locate the landing row with
//! [`Board::next_open_row`] and write the piece with [`Board::drop_piece`].
//! [`Board::play_checked`] bundles the three for callers that take untrusted
//! input.

use anyhow::{anyhow, Result};
use log::trace;

use std::fmt;

use crate::{error::MoveError, HEIGHT, WIDTH};

/// The contents of a single grid cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The cell state left behind by this player's pieces
    pub fn piece(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A 7x6 Connect 4 grid
///
/// Row 0 is the bottom row. Pieces only ever enter through
/// [`drop_piece`](Board::drop_piece) at the row given by
/// [`next_open_row`](Board::next_open_row), so every column is filled
/// contiguously from the bottom.
///
/// `Board` is `Copy`: the search takes private copies for every candidate
/// move and never touches the caller's board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a string of 0-indexed column digits
    ///
    /// Players alternate starting with [`Player::PlayerOne`]. Wins along the
    /// way are not checked, so fixtures can contain finished games.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    board.play_checked(column as usize, player)?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Returns the state of the cell at `row` (counted from the bottom) and `column`
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// Returns whether a piece can be dropped into `column`
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.cell(HEIGHT - 1, column).is_empty()
    }

    /// Returns the lowest empty row of `column`, or `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cell(row, column).is_empty())
    }

    /// Places `player`'s piece at (`row`, `column`) without any checks
    ///
    /// Callers must have validated the column and located the row first.
    pub fn drop_piece(&mut self, row: usize, column: usize, player: Player) {
        self.cells[column + WIDTH * row] = player.piece();
    }

    /// Returns the playable columns in ascending order
    ///
    /// An empty list means the board is full.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.is_valid_move(column)).collect()
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.is_valid_move(column))
    }

    /// Validates, locates and drops in one step, returning the landing row
    pub fn play_checked(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let row = match self.next_open_row(column) {
            Some(row) => row,
            None => return Err(MoveError::ColumnFull { column }),
        };
        self.drop_piece(row, column, player);
        trace!("{:?} dropped into column {} at row {}", player, column, row);
        Ok(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Prints the grid top row first, `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let symbol = match self.cell(row, column) {
                    Cell::Empty => '.',
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
