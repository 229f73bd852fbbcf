//! Core types for absorb chess.
//!
//! This crate provides the fundamental types shared by the engine and its hosts:
//! - [`PieceKind`], [`Piece`], [`PieceId`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates on boards of any supported size
//! - [`Move`] for move representation
//! - [`Layout`] for parsing and printing board diagrams

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use mov::Move;
pub use piece::{Piece, PieceId, PieceKind};
pub use square::{Square, MAX_BOARD_SIZE};
