//! Plain captures, still without castling, en passant or promotion.

use super::RuleSet;
use absorb_core::PieceKind;

/// Classic captures: the capturing piece keeps its kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicChess;

impl RuleSet for ClassicChess {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn capture_result(&self, mover: PieceKind, _captured: PieceKind) -> PieceKind {
        mover
    }
}
