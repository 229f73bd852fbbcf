//! Error types for board setup and move submission.

use absorb_core::{Color, LayoutError, Square, MAX_BOARD_SIZE};
use thiserror::Error;

/// Reason a submitted move was rejected.
///
/// A rejection never changes the board, the turn, or the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    /// The target square is not on the board.
    #[error("square {0} is off the board")]
    OutOfBounds(Square),
    /// No live piece with that id, or no piece on the origin square.
    #[error("no piece at the origin")]
    NoPieceAtOrigin,
    /// The piece belongs to the side not on move.
    #[error("it is not that player's turn")]
    NotPlayersTurn,
    /// The game ended in checkmate or stalemate.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The piece cannot move there (geometry, blocked path, own piece on target).
    #[error("illegal move")]
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    #[error("move would leave the king in check")]
    SelfCheck,
}

/// Errors raised while building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {0} is not supported, expected 1 to {MAX_BOARD_SIZE}")]
    InvalidSize(u8),

    #[error("board size {0} is too small for the standard layout, expected at least 8")]
    TooSmallForStandardLayout(u8),

    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("square {0} is already occupied")]
    Occupied(Square),
}

/// Errors raised while setting up a game from a custom position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("invalid diagram: {0}")]
    Layout(#[from] LayoutError),

    #[error("{0} has more than one king")]
    DuplicateKing(Color),

    #[error("{0} is in check but not on move")]
    OpponentInCheck(Color),
}
