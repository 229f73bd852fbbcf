//! Read-only views of a game for renderers.

use crate::{GameOutcome, Variant};
use absorb_core::{Color, Piece, PieceId, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// The most recently completed move.
///
/// Hosts use it to animate the move that produced the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The piece that moved.
    pub piece: PieceId,
    /// Where it came from.
    pub from: Square,
    /// Where it landed.
    pub to: Square,
    /// The piece it captured, as it was just before the capture.
    pub captured: Option<Piece>,
    /// The mover's new kind, if the capture changed it.
    pub became: Option<PieceKind>,
}

/// An owned copy of the game state between two moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Edge length of the board.
    pub size: u8,
    /// Variant being played.
    pub variant: Variant,
    /// Every live piece in id order.
    pub pieces: Vec<Piece>,
    /// Side to move.
    pub turn: Color,
    /// Status after the last completed move.
    pub outcome: GameOutcome,
    /// The last completed move, if any.
    pub last_move: Option<AppliedMove>,
}

impl Snapshot {
    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    /// Returns the piece with the given id, if it is still live.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color == color)
    }
}
