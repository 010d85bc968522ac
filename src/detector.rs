//! Win and end-of-game detection

use crate::{
    board::{Board, Player},
    CONNECT, HEIGHT, WIDTH,
};

/// The overall status of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// Returns whether `player` has four pieces in a line anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    let piece = player.piece();
    let line = |row: usize, column: usize, dy: isize, dx: isize| {
        (0..CONNECT as isize).all(|i| {
            let r = (row as isize + dy * i) as usize;
            let c = (column as isize + dx * i) as usize;
            board.cell(r, c) == piece
        })
    };

    // horizontal
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            if line(row, column, 0, 1) {
                return true;
            }
        }
    }

    // vertical
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            if line(row, column, 1, 0) {
                return true;
            }
        }
    }

    // rising diagonals
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            if line(row, column, 1, 1) {
                return true;
            }
        }
    }

    // falling diagonals
    for row in CONNECT - 1..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            if line(row, column, -1, 1) {
                return true;
            }
        }
    }

    false
}

/// Returns the player with a line of four, if any
pub fn winner(board: &Board) -> Option<Player> {
    [Player::PlayerOne, Player::PlayerTwo]
        .iter()
        .copied()
        .find(|&player| has_won(board, player))
}

/// Returns whether the game is over, by a win for either side or a full board
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::PlayerOne) || has_won(board, Player::PlayerTwo) || board.is_full()
}

pub fn state(board: &Board) -> GameState {
    match winner(board) {
        Some(Player::PlayerOne) => GameState::PlayerOneWin,
        Some(Player::PlayerTwo) => GameState::PlayerTwoWin,
        None if board.is_full() => GameState::Draw,
        None => GameState::Playing,
    }
}
