//! Rule engine for absorb chess.
//!
//! Absorb chess plays like chess without castling, en passant or promotion,
//! except that a piece which captures takes on the kind of the piece it
//! captured. Kings are exempt and stay kings.
//!
//! This crate provides:
//! - [`Board`] - square-indexed piece placement on boards up to 26x26
//! - [`Game`] - turn and outcome tracking with move validation
//! - [`SharedGame`] - a lock-protected game handle for multi-threaded hosts
//! - [`RuleSet`] - the capture rule seam, with [`AbsorbChess`] and [`ClassicChess`]
//! - Move legality, check detection and self-check simulation in [`movegen`]
//!
//! # Example
//!
//! ```
//! use absorb_core::{Color, PieceKind, Square};
//! use absorb_engine::{Game, GameOutcome, Variant};
//!
//! // White pawn on f3 takes the black knight on e4 and becomes a knight.
//! let mut game = Game::from_layout("k7/8/8/8/4n3/5P2/8/K7", Color::White, Variant::Absorb)?;
//! let f3 = Square::from_algebraic("f3", 8).unwrap();
//! let e4 = Square::from_algebraic("e4", 8).unwrap();
//!
//! let state = game.submit_move_from(f3, e4)?;
//! assert_eq!(state.turn, Color::Black);
//! assert_eq!(state.outcome, GameOutcome::InProgress);
//! assert_eq!(game.board().piece_at(e4).map(|p| p.kind), Some(PieceKind::Knight));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod board;
mod config;
mod error;
mod game;
pub mod movegen;
pub mod rules;
mod shared;
mod snapshot;

pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardError, MoveRejected, SetupError};
pub use game::{Game, GameOutcome, TurnState};
pub use movegen::{
    checkers, has_safe_move, is_in_check, is_legal_move, safe_moves, safe_targets,
    would_leave_self_in_check,
};
pub use rules::{AbsorbChess, ClassicChess, RuleSet, UnknownVariant, Variant};
pub use shared::SharedGame;
pub use snapshot::{AppliedMove, Snapshot};
