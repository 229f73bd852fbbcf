//! Turn and outcome state machine.
//!
//! [`Game`] is the single entry point for hosts. Every submitted move goes
//! through the same sequence:
//! 1. reject if the game is over, the piece is unknown, the target is off the
//!    board, or the piece belongs to the side not on move
//! 2. reject if the move breaks the piece's geometry
//! 3. reject if the move would leave the mover's king in check
//! 4. apply the capture and the variant's capture rule, then move the piece
//! 5. hand the turn to the other side
//! 6. recompute the outcome for the new side to move
//!
//! Steps 1-3 only read the board, so a rejected move changes nothing.

use crate::movegen::{
    checkers, has_safe_move, is_in_check, is_legal_move, safe_moves, safe_targets,
    would_leave_self_in_check,
};
use crate::snapshot::{AppliedMove, Snapshot};
use crate::{Board, GameConfig, MoveRejected, SetupError, Variant};
use absorb_core::{Color, Move, Piece, PieceId, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a game after a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "color", rename_all = "lowercase")]
pub enum GameOutcome {
    /// The side to move has a safe move and is not in check.
    InProgress,
    /// The given side to move is in check but can escape.
    Check(Color),
    /// The side to move is checkmated; the given color wins.
    Checkmate(Color),
    /// The side to move is not in check and has no safe move.
    Stalemate,
}

impl GameOutcome {
    /// Returns true if no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameOutcome::Checkmate(_) | GameOutcome::Stalemate)
    }

    /// Returns the winner, if the game was decided.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Check(color) => write!(f, "{} is in check", color),
            GameOutcome::Checkmate(winner) => write!(f, "checkmate, {} wins", winner),
            GameOutcome::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Side to move and status, returned for every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub turn: Color,
    pub outcome: GameOutcome,
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    outcome: GameOutcome,
    variant: Variant,
    last_move: Option<AppliedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a standard 8x8 absorb game with White to move.
    pub fn new() -> Self {
        Self::new_game(8).expect("8x8 fits the standard layout")
    }

    /// Creates a standard game on a `size` x `size` board.
    pub fn new_game(size: u8) -> Result<Self, SetupError> {
        Self::with_config(&GameConfig {
            board_size: size,
            ..GameConfig::default()
        })
    }

    /// Creates a standard game from configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, SetupError> {
        let board = Board::standard(config.board_size)?;
        Self::from_board(board, Color::White, config.variant)
    }

    /// Creates a game from a custom position.
    ///
    /// Rejects positions with two kings of one color, and positions where the
    /// side not on move is in check, since its king could then be captured.
    pub fn from_board(board: Board, turn: Color, variant: Variant) -> Result<Self, SetupError> {
        for color in Color::ALL {
            let kings = board
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if kings > 1 {
                return Err(SetupError::DuplicateKing(color));
            }
        }
        if is_in_check(&board, turn.opposite()) {
            return Err(SetupError::OpponentInCheck(turn.opposite()));
        }

        let mut game = Game {
            board,
            turn,
            outcome: GameOutcome::InProgress,
            variant,
            last_move: None,
        };
        game.outcome = evaluate(&mut game.board, turn);
        tracing::debug!(
            size = game.board.size(),
            %variant,
            %turn,
            outcome = %game.outcome,
            "game created"
        );
        Ok(game)
    }

    /// Creates a game from a diagram such as [`absorb_core::Layout::STANDARD`].
    pub fn from_layout(diagram: &str, turn: Color, variant: Variant) -> Result<Self, SetupError> {
        Self::from_board(Board::from_layout(diagram)?, turn, variant)
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the status after the last completed move.
    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the side to move together with the status.
    #[inline]
    pub fn turn_state(&self) -> TurnState {
        TurnState {
            turn: self.turn,
            outcome: self.outcome,
        }
    }

    /// Returns the variant being played.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the last completed move.
    #[inline]
    pub fn last_move(&self) -> Option<&AppliedMove> {
        self.last_move.as_ref()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    /// Returns true if the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns every safe move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        safe_moves(&mut scratch, self.turn)
    }

    /// Returns the squares the given piece can safely move to this turn.
    pub fn legal_targets(&self, piece: PieceId) -> Vec<Square> {
        match self.board.piece(piece) {
            Some(p) if p.color == self.turn && !self.is_over() => {
                let mut scratch = self.board.clone();
                safe_targets(&mut scratch, piece)
            }
            _ => Vec::new(),
        }
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.board.size(),
            variant: self.variant,
            pieces: self.board.pieces().copied().collect(),
            turn: self.turn,
            outcome: self.outcome,
            last_move: self.last_move,
        }
    }

    /// Submits a move of `piece` to `to`.
    ///
    /// On success the turn has passed to the other side and the returned
    /// state holds the new outcome. On rejection nothing has changed.
    pub fn submit_move(&mut self, piece: PieceId, to: Square) -> Result<TurnState, MoveRejected> {
        match self.validate(piece, to) {
            Ok(mover) => Ok(self.apply(mover, to)),
            Err(reason) => {
                tracing::debug!(%piece, %to, %reason, "move rejected");
                Err(reason)
            }
        }
    }

    /// Submits a move of whatever piece stands on `from`.
    pub fn submit_move_from(&mut self, from: Square, to: Square) -> Result<TurnState, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameAlreadyOver);
        }
        let Some(piece) = self.board.piece_at(from).map(|p| p.id) else {
            tracing::debug!(%from, %to, "move rejected: empty origin");
            return Err(MoveRejected::NoPieceAtOrigin);
        };
        self.submit_move(piece, to)
    }

    /// Checks a move without changing the game. The trial move in the
    /// self-check test is undone before this returns.
    fn validate(&mut self, piece: PieceId, to: Square) -> Result<Piece, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameAlreadyOver);
        }
        let mover = *self
            .board
            .piece(piece)
            .ok_or(MoveRejected::NoPieceAtOrigin)?;
        if !self.board.contains(to) {
            return Err(MoveRejected::OutOfBounds(to));
        }
        if mover.color != self.turn {
            return Err(MoveRejected::NotPlayersTurn);
        }
        if !is_legal_move(&self.board, &mover, to) {
            return Err(MoveRejected::IllegalMove);
        }
        if would_leave_self_in_check(&mut self.board, piece, to, mover.color) {
            return Err(MoveRejected::SelfCheck);
        }
        Ok(mover)
    }

    fn apply(&mut self, mover: Piece, to: Square) -> TurnState {
        let captured = self.board.piece_at(to).copied();
        let mut became = None;
        if let Some(victim) = captured {
            self.board.remove(victim.id);
            let kind = self
                .variant
                .rules()
                .capture_result(mover.kind, victim.kind);
            if kind != mover.kind {
                self.board.set_kind(mover.id, kind);
                became = Some(kind);
            }
        }
        self.board.place_or_move(mover.id, to);

        self.last_move = Some(AppliedMove {
            piece: mover.id,
            from: mover.square,
            to,
            captured,
            became,
        });
        self.turn = self.turn.opposite();
        self.outcome = evaluate(&mut self.board, self.turn);

        tracing::debug!(
            piece = %mover.id,
            from = %mover.square,
            %to,
            captured = ?captured.map(|p| p.kind),
            became = ?became,
            outcome = %self.outcome,
            "move applied"
        );
        if self.is_check() {
            tracing::debug!(
                checkers = ?checkers(&self.board, self.turn),
                king = %self.turn,
                "king in check"
            );
        }
        if self.outcome.is_terminal() {
            tracing::info!(outcome = %self.outcome, "game over");
        }
        self.turn_state()
    }
}

/// Classifies the position for `turn`, the side about to move.
fn evaluate(board: &mut Board, turn: Color) -> GameOutcome {
    let in_check = is_in_check(board, turn);
    let can_move = has_safe_move(board, turn);
    tracing::trace!(%turn, in_check, can_move, "outcome evaluated");

    match (in_check, can_move) {
        (true, true) => GameOutcome::Check(turn),
        (false, true) => GameOutcome::InProgress,
        (true, false) => GameOutcome::Checkmate(turn.opposite()),
        (false, false) => GameOutcome::Stalemate,
    }
}
