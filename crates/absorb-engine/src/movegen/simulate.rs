//! Trial moves for the self-check test.
//!
//! A [`Trial`] applies a move to the board in place and undoes it when
//! dropped, so the board is restored on every path out of the trial,
//! unwinding included. It holds the board mutably for its whole life, which
//! keeps any other reader from seeing the board mid-trial.

use super::is_in_check;
use crate::Board;
use absorb_core::{Color, Piece, PieceId, Square};

/// Returns true if moving `piece` to `to` would leave `color`'s king in check.
///
/// The board is identical before and after the call.
pub fn would_leave_self_in_check(
    board: &mut Board,
    piece: PieceId,
    to: Square,
    color: Color,
) -> bool {
    let Some(origin) = board.piece(piece).map(|p| p.square) else {
        return is_in_check(board, color);
    };
    let trial = Trial::begin(board, piece, origin, to);
    is_in_check(trial.board(), color)
}

struct Trial<'a> {
    board: &'a mut Board,
    piece: PieceId,
    origin: Square,
    displaced: Option<Piece>,
}

impl<'a> Trial<'a> {
    fn begin(board: &'a mut Board, piece: PieceId, origin: Square, to: Square) -> Self {
        let displaced = board
            .piece_at(to)
            .map(|p| p.id)
            .filter(|&id| id != piece)
            .and_then(|id| board.remove(id));
        board.place_or_move(piece, to);
        Trial {
            board,
            piece,
            origin,
            displaced,
        }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.place_or_move(self.piece, self.origin);
        if let Some(piece) = self.displaced.take() {
            self.board.reinsert(piece);
        }
    }
}
