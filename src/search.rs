//! An agent to choose the computer's move in Connect 4

use log::{debug, trace};

use crate::{
    board::{Board, Player},
    detector::{has_won, is_terminal},
    evaluation::score,
    HEIGHT, WIDTH,
};

/// The value of a position the computer has won
pub const WIN_SCORE: i64 = 100_000_000_000_000;
/// The value of a position the computer has lost
pub const LOSS_SCORE: i64 = -WIN_SCORE;
/// The number of plies searched for every computer move
pub const SEARCH_DEPTH: usize = 6;
/// No game lasts longer than this many plies
pub const MAX_DEPTH: usize = WIDTH * HEIGHT;

/// A depth-limited minimax agent with alpha-beta pruning
///
/// # Notes
/// The agent always plays for a fixed side, the maximizing player. Every
/// value it reports is from that side's perspective, including the leaf
/// heuristic, which is applied from the computer's point of view whichever
/// side would be on move.
///
/// # Position Values
/// A position where the computer has four in a row is worth [`WIN_SCORE`],
/// one where its opponent has four in a row is worth [`LOSS_SCORE`] and a
/// full board without a line is worth 0. Anything else reached at the depth
/// limit gets the heuristic score from [`evaluation`](crate::evaluation).
///
/// # Tie-breaks
/// Columns are tried in ascending order and a column only replaces the best
/// one found so far when its value is strictly better, so equally valued
/// moves resolve to the lowest column.
#[derive(Clone, Debug)]
pub struct Searcher {
    computer: Player,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` maximizing for `computer`
    pub fn new(computer: Player) -> Self {
        Self {
            computer,
            node_count: 0,
        }
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Performs minimax search to `depth` plies within the (`alpha`, `beta`) window
    ///
    /// Returns the best column for the side on move (`None` at terminal and
    /// depth-limit nodes) and the value of the position.
    ///
    /// `maximizing` is true when the computer is on move.
    pub fn best_move(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        self.node_count += 1;
        debug_assert!(depth <= MAX_DEPTH, "search depth {} exceeds {}", depth, MAX_DEPTH);

        let valid_moves = board.valid_moves();

        if is_terminal(board) {
            let value = if has_won(board, self.computer) {
                WIN_SCORE
            } else if has_won(board, self.computer.opponent()) {
                LOSS_SCORE
            } else {
                0
            };
            return (None, value);
        }

        if depth == 0 {
            return (None, score(board, self.computer));
        }

        // any valid column, the first strictly better value replaces it
        let mut best = valid_moves[0];

        if maximizing {
            let mut value = i64::MIN;
            for &column in &valid_moves {
                let next = Self::child(board, column, self.computer);
                let (_, child_value) = self.best_move(&next, depth - 1, alpha, beta, false);
                if child_value > value {
                    value = child_value;
                    best = column;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    trace!("beta cutoff at column {} (depth {})", column, depth);
                    break;
                }
            }
            (Some(best), value)
        } else {
            let mut value = i64::MAX;
            for &column in &valid_moves {
                let next = Self::child(board, column, self.computer.opponent());
                let (_, child_value) = self.best_move(&next, depth - 1, alpha, beta, true);
                if child_value < value {
                    value = child_value;
                    best = column;
                }
                beta = beta.min(value);
                if alpha >= beta {
                    trace!("alpha cutoff at column {} (depth {})", column, depth);
                    break;
                }
            }
            (Some(best), value)
        }
    }

    /// Copies `board` with `player`'s piece dropped into `column`
    fn child(board: &Board, column: usize, player: Player) -> Board {
        let mut next = *board;
        // columns come from valid_moves so there is always an open row
        if let Some(row) = next.next_open_row(column) {
            next.drop_piece(row, column, player);
        }
        next
    }

    /// Chooses the computer's move with a full-window search of [`SEARCH_DEPTH`] plies
    ///
    /// Returns the column and its value, or `None` if the game is already over.
    pub fn choose_move(&mut self, board: &Board) -> Option<(usize, i64)> {
        if is_terminal(board) {
            return None;
        }

        let start = self.node_count;
        let (column, value) = self.best_move(board, SEARCH_DEPTH, i64::MIN, i64::MAX, true);
        debug!(
            "{:?} chose column {:?} with value {} after {} nodes",
            self.computer,
            column,
            value,
            self.node_count - start
        );
        column.map(|column| (column, value))
    }
}
