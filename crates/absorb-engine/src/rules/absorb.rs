//! The absorb rule: a capturing piece becomes what it captured.

use super::RuleSet;
use absorb_core::PieceKind;

/// Absorb chess.
///
/// A capturing piece takes on the kind of the piece it captured and keeps its
/// own color. Kings are exempt and stay kings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsorbChess;

impl RuleSet for AbsorbChess {
    fn name(&self) -> &'static str {
        "absorb"
    }

    fn capture_result(&self, mover: PieceKind, captured: PieceKind) -> PieceKind {
        match mover {
            PieceKind::King => PieceKind::King,
            _ => captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturer_takes_captured_kind() {
        assert_eq!(
            AbsorbChess.capture_result(PieceKind::Pawn, PieceKind::Knight),
            PieceKind::Knight
        );
        assert_eq!(
            AbsorbChess.capture_result(PieceKind::Queen, PieceKind::Pawn),
            PieceKind::Pawn
        );
    }

    #[test]
    fn king_is_exempt() {
        for captured in PieceKind::ALL {
            assert_eq!(
                AbsorbChess.capture_result(PieceKind::King, captured),
                PieceKind::King
            );
        }
    }
}
