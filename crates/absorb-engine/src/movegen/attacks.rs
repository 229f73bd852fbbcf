//! Check detection.

use super::is_legal_move;
use crate::Board;
use absorb_core::{Color, Piece, PieceId, Square};

/// Returns true if `color`'s king is attacked by any enemy piece.
///
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_of(color) {
        Some(king) => attackers(board, king.square, color.opposite())
            .next()
            .is_some(),
        None => false,
    }
}

/// Returns the ids of the enemy pieces giving check to `color`'s king.
pub fn checkers(board: &Board, color: Color) -> Vec<PieceId> {
    match board.king_of(color) {
        Some(king) => attackers(board, king.square, color.opposite())
            .map(|p| p.id)
            .collect(),
        None => Vec::new(),
    }
}

// Pieces of `by` that could legally move onto the occupied square `target`.
// A pawn's forward step needs an empty square, so on an occupied target only
// its diagonal captures count.
fn attackers<'a>(
    board: &'a Board,
    target: Square,
    by: Color,
) -> impl Iterator<Item = &'a Piece> + 'a {
    board
        .pieces_of(by)
        .filter(move |p| is_legal_move(board, p, target))
}
