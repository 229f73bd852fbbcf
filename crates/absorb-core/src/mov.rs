//! Move representation.

use crate::{PieceId, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move of one piece from its current square to a target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The moving piece.
    pub piece: PieceId,
    /// The square the piece stands on.
    pub from: Square,
    /// The square the piece moves to.
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(piece: PieceId, from: Square, to: Square) -> Self {
        Move { piece, from, to }
    }

    /// Returns the move as a coordinate pair such as `"e2e4"`.
    pub fn to_coordinates(self, size: u8) -> String {
        format!(
            "{}{}",
            self.from.to_algebraic(size),
            self.to.to_algebraic(size)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates() {
        let m = Move::new(PieceId(12), Square::new(4, 6), Square::new(4, 4));
        assert_eq!(m.to_coordinates(8), "e2e4");
    }

    #[test]
    fn display() {
        let m = Move::new(PieceId(3), Square::new(1, 7), Square::new(2, 5));
        assert_eq!(m.to_string(), "#3 (1, 7) -> (2, 5)");
    }
}
