//! Board diagrams: a FEN-style piece placement for square boards of any size.
//!
//! Rows are separated by `/` and listed from rank 0 (Black's side) down to
//! White's back rank. Letters are pieces (uppercase White), digit runs count
//! empty squares and may span several digits on wide boards.

use crate::{Color, PieceKind, Square, MAX_BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("empty diagram")]
    Empty,

    #[error("board size {0} is not supported, expected 1 to {MAX_BOARD_SIZE}")]
    InvalidSize(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: usize },

    #[error("rank {rank} has {width} squares, expected {expected}")]
    RankWidth {
        rank: usize,
        width: usize,
        expected: usize,
    },
}

/// A parsed board diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: u8,
    placements: Vec<(Square, PieceKind, Color)>,
}

impl Layout {
    /// The standard 8x8 starting diagram.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a layout from explicit placements.
    pub fn new(size: u8, placements: Vec<(Square, PieceKind, Color)>) -> Self {
        Layout { size, placements }
    }

    /// Parses a diagram. The board is square, so the rank count sets the size.
    pub fn parse(diagram: &str) -> Result<Self, LayoutError> {
        let diagram = diagram.trim();
        if diagram.is_empty() {
            return Err(LayoutError::Empty);
        }

        let ranks: Vec<&str> = diagram.split('/').collect();
        let size = ranks.len();
        if size > MAX_BOARD_SIZE as usize {
            return Err(LayoutError::InvalidSize(size));
        }

        let mut placements = Vec::new();
        for (rank, row) in ranks.iter().enumerate() {
            let mut width = 0usize;
            let mut run = 0usize;
            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    run = run * 10 + digit as usize;
                    if run > size {
                        return Err(LayoutError::RankWidth {
                            rank,
                            width: width + run,
                            expected: size,
                        });
                    }
                    continue;
                }
                width += run;
                run = 0;
                let (kind, color) =
                    PieceKind::from_char(ch).ok_or(LayoutError::InvalidCharacter { ch, rank })?;
                if width < size {
                    placements.push((Square::new(width as u8, rank as u8), kind, color));
                }
                width += 1;
            }
            width += run;
            if width != size {
                return Err(LayoutError::RankWidth {
                    rank,
                    width,
                    expected: size,
                });
            }
        }

        Ok(Layout {
            size: size as u8,
            placements,
        })
    }

    /// Returns the board size.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the pieces placed by this diagram, in reading order.
    #[inline]
    pub fn placements(&self) -> &[(Square, PieceKind, Color)] {
        &self.placements
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size as usize;
        let mut grid = vec![None; size * size];
        for &(sq, kind, color) in &self.placements {
            if sq.is_within(self.size) {
                grid[sq.rank() as usize * size + sq.file() as usize] = Some(kind.to_char(color));
            }
        }

        for rank in 0..size {
            if rank > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0;
            for cell in &grid[rank * size..(rank + 1) * size] {
                match cell {
                    Some(ch) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", ch)?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_standard() {
        let layout = Layout::parse(Layout::STANDARD).unwrap();
        assert_eq!(layout.size(), 8);
        assert_eq!(layout.placements().len(), 32);
        assert_eq!(
            layout.placements()[4],
            (Square::new(4, 0), PieceKind::King, Color::Black)
        );
        assert!(layout
            .placements()
            .contains(&(Square::new(3, 7), PieceKind::Queen, Color::White)));
    }

    #[test]
    fn standard_prints_back() {
        let layout = Layout::parse(Layout::STANDARD).unwrap();
        assert_eq!(layout.to_string(), Layout::STANDARD);
    }

    #[test]
    fn parse_multi_digit_runs() {
        let diagram = format!("k9/{}/9K", vec!["10"; 8].join("/"));
        let layout = Layout::parse(&diagram).unwrap();
        assert_eq!(layout.size(), 10);
        assert_eq!(
            layout.placements(),
            &[
                (Square::new(0, 0), PieceKind::King, Color::Black),
                (Square::new(9, 9), PieceKind::King, Color::White),
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Layout::parse("   "), Err(LayoutError::Empty));
        assert_eq!(
            Layout::parse("kx/2"),
            Err(LayoutError::InvalidCharacter { ch: 'x', rank: 0 })
        );
        assert_eq!(
            Layout::parse("k/2"),
            Err(LayoutError::RankWidth {
                rank: 0,
                width: 1,
                expected: 2
            })
        );
        assert!(matches!(
            Layout::parse("8/8/8"),
            Err(LayoutError::RankWidth { rank: 0, .. })
        ));
        let too_big = vec!["27"; 27].join("/");
        assert_eq!(Layout::parse(&too_big), Err(LayoutError::InvalidSize(27)));
    }

    proptest! {
        #[test]
        fn parse_never_panics(diagram in "[pnbrqkPNBRQK0-9/x]{0,40}") {
            let _ = Layout::parse(&diagram);
        }

        #[test]
        fn placements_stay_on_board(diagram in "[pnbrqkPNBRQK1-4/]{1,24}") {
            if let Ok(layout) = Layout::parse(&diagram) {
                for (sq, _, _) in layout.placements() {
                    prop_assert!(sq.is_within(layout.size()));
                }
            }
        }
    }
}
