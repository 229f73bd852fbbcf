//! Board state: the owner of every live piece.
//!
//! The board answers occupancy queries and is the only place pieces are
//! mutated. It has no knowledge of turns or rules. Operations trust their
//! input; a call that would put two pieces on one square is a bug in the
//! caller and panics.

use std::collections::BTreeMap;

use absorb_core::{Color, Layout, Piece, PieceId, PieceKind, Square, MAX_BOARD_SIZE};

use crate::{BoardError, SetupError};

/// Width of the standard back-rank formation.
const STANDARD_WIDTH: u8 = PieceKind::BACK_RANK.len() as u8;

/// A square board with its live pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Edge length of the board.
    size: u8,
    /// Occupant of each square, indexed `rank * size + file`.
    squares: Vec<Option<PieceId>>,
    /// Live pieces by id.
    pieces: BTreeMap<PieceId, Piece>,
    /// Id handed to the next added piece.
    next_id: u16,
}

impl Board {
    /// Creates an empty board of `size` x `size` squares.
    pub fn empty(size: u8) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let cells = size as usize * size as usize;
        Ok(Board {
            size,
            squares: vec![None; cells],
            pieces: BTreeMap::new(),
            next_id: 0,
        })
    }

    /// Creates a board with the standard starting formation.
    ///
    /// Boards wider than 8 keep the 8-file formation centered.
    pub fn standard(size: u8) -> Result<Self, BoardError> {
        let mut board = Board::empty(size)?;
        if size < STANDARD_WIDTH {
            return Err(BoardError::TooSmallForStandardLayout(size));
        }

        let offset = (size - STANDARD_WIDTH) / 2;
        for color in [Color::Black, Color::White] {
            for (i, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
                let file = offset + i as u8;
                board.add(kind, color, Square::new(file, color.back_rank(size)))?;
                board.add(
                    PieceKind::Pawn,
                    color,
                    Square::new(file, color.pawn_rank(size)),
                )?;
            }
        }
        Ok(board)
    }

    /// Creates a board from a diagram such as [`Layout::STANDARD`].
    pub fn from_layout(diagram: &str) -> Result<Self, SetupError> {
        let layout = Layout::parse(diagram)?;
        let mut board = Board::empty(layout.size())?;
        for &(square, kind, color) in layout.placements() {
            board.add(kind, color, square)?;
        }
        Ok(board)
    }

    /// Returns the board as a diagram.
    pub fn to_layout(&self) -> String {
        let placements = self
            .pieces
            .values()
            .map(|p| (p.square, p.kind, p.color))
            .collect();
        Layout::new(self.size, placements).to_string()
    }

    /// Returns the edge length of the board.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns true if the square lies on this board.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.is_within(self.size)
    }

    /// Iterates over every square, rank by rank.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size).flat_map(move |rank| (0..size).map(move |file| Square::new(file, rank)))
    }

    /// Adds a new piece and returns its id.
    pub fn add(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, BoardError> {
        if !self.contains(square) {
            return Err(BoardError::OutOfBounds(square));
        }
        let idx = self.index(square);
        if self.squares[idx].is_some() {
            return Err(BoardError::Occupied(square));
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.squares[idx] = Some(id);
        self.pieces.insert(
            id,
            Piece {
                id,
                kind,
                color,
                square,
            },
        );
        Ok(id)
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        if !self.contains(square) {
            return None;
        }
        self.squares[self.index(square)].and_then(|id| self.pieces.get(&id))
    }

    /// Returns the live piece with the given id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Iterates over all live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Iterates over the live pieces of one color in id order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.color == color)
    }

    /// Returns the king of the given color, if it has one.
    pub fn king_of(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Returns the number of live pieces.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Moves a live piece to `to`, keeping its identity.
    ///
    /// # Panics
    ///
    /// Panics if the piece is not on the board, if `to` is off the board, or
    /// if another piece occupies `to`. Captured pieces must be removed first.
    pub fn place_or_move(&mut self, id: PieceId, to: Square) {
        assert!(self.contains(to), "square {to} is off the board");
        let from = match self.pieces.get(&id) {
            Some(piece) => piece.square,
            None => panic!("piece {id} is not on the board"),
        };
        let to_idx = self.index(to);
        if let Some(occupant) = self.squares[to_idx] {
            assert_eq!(occupant, id, "square {to} is already occupied by {occupant}");
        }

        let from_idx = self.index(from);
        self.squares[from_idx] = None;
        self.squares[to_idx] = Some(id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.square = to;
        }
    }

    /// Removes a piece from the board and returns it.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        let idx = self.index(piece.square);
        debug_assert_eq!(self.squares[idx], Some(id));
        self.squares[idx] = None;
        Some(piece)
    }

    /// Puts a previously removed piece back on its square.
    ///
    /// # Panics
    ///
    /// Panics if the square is off the board or occupied, or if a piece with
    /// the same id is still live.
    pub fn reinsert(&mut self, piece: Piece) {
        assert!(
            self.contains(piece.square),
            "square {} is off the board",
            piece.square
        );
        let idx = self.index(piece.square);
        assert!(
            self.squares[idx].is_none(),
            "square {} is already occupied",
            piece.square
        );
        assert!(
            !self.pieces.contains_key(&piece.id),
            "piece {} is already on the board",
            piece.id
        );

        self.squares[idx] = Some(piece.id);
        self.pieces.insert(piece.id, piece);
    }

    /// Changes the kind of a live piece, returning its previous kind.
    pub fn set_kind(&mut self, id: PieceId, kind: PieceKind) -> Option<PieceKind> {
        let piece = self.pieces.get_mut(&id)?;
        Some(std::mem::replace(&mut piece.kind, kind))
    }

    #[inline]
    fn index(&self, square: Square) -> usize {
        debug_assert!(self.contains(square));
        square.rank() as usize * self.size as usize + square.file() as usize
    }
}
