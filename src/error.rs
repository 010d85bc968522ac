use thiserror::Error;

/// Reasons a requested move cannot be played
///
/// Columns are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range")]
    ColumnOutOfRange { column: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },
}
