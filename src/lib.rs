//! A minimax agent for playing the board game 'Connect 4'
//!
//! The engine is split into four layers: the [`board`] with gravity-drop
//! mechanics, the [`detector`] for wins and terminal positions, a heuristic
//! [`evaluation`] of positions and a depth-limited alpha-beta [`search`]
//! that picks the computer's move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Player}, detector, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.play_checked(3, Player::PlayerOne)?;
//!
//! let mut searcher = Searcher::new(Player::PlayerTwo);
//! let (column, _value) = searcher.choose_move(&board).expect("game is not over");
//! board.play_checked(column, Player::PlayerTwo)?;
//!
//! assert!(!detector::is_terminal(&board));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod detector;

pub mod error;

pub mod evaluation;

pub mod search;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The column favoured by the position evaluator
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// The number of aligned pieces needed to win
pub const CONNECT: usize = 4;

// a line of four must fit both horizontally and vertically
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);
const_assert!(CENTER_COLUMN == 3);
