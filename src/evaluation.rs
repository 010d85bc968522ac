//! Heuristic scoring of non-terminal positions
//!
//! A position is scored by sliding a four-cell window over every line of the
//! board and summing the value of each window, plus a bonus for pieces in the
//! center column.
//!
//! # Window Scoring
//! | window contents            | score  |
//! |----------------------------|--------|
//! | four own pieces            | +10000 |
//! | three own pieces, one gap  | +5     |
//! | two own pieces, two gaps   | +2     |
//! | three opponent pieces, gap | -50    |
//! | anything else              | 0      |

use crate::{
    board::{Board, Cell, Player},
    CENTER_COLUMN, CONNECT, HEIGHT, WIDTH,
};

/// Four consecutive cells along a row, column or diagonal
pub type Window = [Cell; CONNECT];

pub const FOUR_SCORE: i64 = 10_000;
pub const THREE_SCORE: i64 = 5;
pub const TWO_SCORE: i64 = 2;
pub const OPPONENT_THREE_SCORE: i64 = -50;
/// Bonus per own piece in the center column
pub const CENTER_SCORE: i64 = 4;

/// Scores a single window from `player`'s perspective
pub fn score_window(window: &Window, player: Player) -> i64 {
    let (mut own, mut opponent, mut empty) = (0, 0, 0);
    for &cell in window {
        match cell {
            Cell::Empty => empty += 1,
            cell if cell == player.piece() => own += 1,
            _ => opponent += 1,
        }
    }

    match (own, opponent, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_SCORE,
        _ => 0,
    }
}

/// Collects every window on the board: rows, columns, rising then falling diagonals
pub fn windows(board: &Board) -> Vec<Window> {
    let window = |row: usize, column: usize, dy: isize, dx: isize| -> Window {
        let mut cells = [Cell::Empty; CONNECT];
        for (i, cell) in cells.iter_mut().enumerate() {
            let r = (row as isize + dy * i as isize) as usize;
            let c = (column as isize + dx * i as isize) as usize;
            *cell = board.cell(r, c);
        }
        cells
    };

    let mut windows = Vec::with_capacity(69);
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            windows.push(window(row, column, 0, 1));
        }
    }
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            windows.push(window(row, column, 1, 0));
        }
    }
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            windows.push(window(row, column, 1, 1));
        }
    }
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            windows.push(window(row + CONNECT - 1, column, -1, 1));
        }
    }
    windows
}

/// Returns the heuristic value of `board` for `player`, higher is better
pub fn score(board: &Board, player: Player) -> i64 {
    let center = (0..HEIGHT)
        .filter(|&row| board.cell(row, CENTER_COLUMN) == player.piece())
        .count() as i64
        * CENTER_SCORE;

    center
        + windows(board)
            .iter()
            .map(|window| score_window(window, player))
            .sum::<i64>()
}
