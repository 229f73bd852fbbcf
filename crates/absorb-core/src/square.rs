//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board edge, one file per letter `a`..`z`.
pub const MAX_BOARD_SIZE: u8 = 26;

/// A square on a square board of some size, as `(file, rank)`.
///
/// Rank 0 is Black's back rank. Coordinate names count ranks from White's
/// side, so on an 8x8 board `a1` is `(0, 7)` and `h8` is `(7, 0)`.
///
/// A `Square` carries no board size; whether it lies on a particular board is
/// decided by the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Square { file, rank }
    }

    /// Returns the file (column) index.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the rank (row) index.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns true if this square lies on a board of `size` x `size`.
    #[inline]
    pub const fn is_within(self, size: u8) -> bool {
        self.file < size && self.rank < size
    }

    /// Returns the square displaced by `(df, dr)`, or `None` if either
    /// coordinate would leave the `u8` range.
    pub fn offset(self, df: i16, dr: i16) -> Option<Square> {
        let file = u8::try_from(self.file as i16 + df).ok()?;
        let rank = u8::try_from(self.rank as i16 + dr).ok()?;
        Some(Square { file, rank })
    }

    /// Returns the signed `(file, rank)` displacement from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i16, i16) {
        (
            to.file as i16 - self.file as i16,
            to.rank as i16 - self.rank as i16,
        )
    }

    /// Parses a coordinate name such as `"e4"` on a board of `size`.
    pub fn from_algebraic(s: &str, size: u8) -> Option<Self> {
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let file = letter as u8 - b'a';
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u8 = digits.parse().ok()?;
        if file >= size || number == 0 || number > size {
            return None;
        }
        Some(Square::new(file, size - number))
    }

    /// Returns the coordinate name of this square on a board of `size`.
    pub fn to_algebraic(self, size: u8) -> String {
        debug_assert!(self.is_within(size));
        format!("{}{}", (b'a' + self.file) as char, size - self.rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.file, self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let sq = Square::new(4, 3);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 3);
        assert!(sq.is_within(8));
        assert!(!Square::new(8, 0).is_within(8));
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1", 8), Some(Square::new(0, 7)));
        assert_eq!(Square::from_algebraic("e8", 8), Some(Square::new(4, 0)));
        assert_eq!(Square::from_algebraic("H4", 8), Some(Square::new(7, 4)));
        assert_eq!(Square::from_algebraic("j10", 10), Some(Square::new(9, 0)));
        assert_eq!(Square::from_algebraic("i1", 8), None);
        assert_eq!(Square::from_algebraic("a9", 8), None);
        assert_eq!(Square::from_algebraic("a0", 8), None);
        assert_eq!(Square::from_algebraic("a", 8), None);
        assert_eq!(Square::from_algebraic("", 8), None);
        assert_eq!(Square::from_algebraic("4e", 8), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 7).to_algebraic(8), "a1");
        assert_eq!(Square::new(7, 0).to_algebraic(8), "h8");
        assert_eq!(Square::new(4, 4).to_algebraic(8), "e4");
    }

    #[test]
    fn offset_and_delta() {
        let sq = Square::new(1, 1);
        assert_eq!(sq.offset(-1, 2), Some(Square::new(0, 3)));
        assert_eq!(sq.offset(-2, 0), None);
        assert_eq!(sq.delta(Square::new(3, 0)), (2, -1));
    }
}
