//! Move legality.
//!
//! [`is_legal_move`] holds the per-kind geometry: step patterns, path
//! blocking for sliders, and the rule that a piece never lands on its own
//! color. It ignores check entirely. Check detection lives in [`attacks`]
//! and the self-check filter in [`simulate`].

mod attacks;
mod simulate;

use crate::Board;
use absorb_core::{Color, Move, Piece, PieceId, PieceKind, Square};

pub use attacks::{checkers, is_in_check};
pub use simulate::would_leave_self_in_check;

/// Returns true if `piece` may move to `to` on `board`, ignoring check.
///
/// Kings are not treated specially as targets, so this doubles as the
/// attack test used for check detection.
pub fn is_legal_move(board: &Board, piece: &Piece, to: Square) -> bool {
    if !board.contains(to) || to == piece.square {
        return false;
    }
    if let Some(occupant) = board.piece_at(to) {
        if occupant.color == piece.color {
            return false;
        }
    }

    let from = piece.square;
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to),
        PieceKind::Knight => knight_move(from, to),
        PieceKind::Bishop => bishop_move(board, from, to),
        PieceKind::Rook => rook_move(board, from, to),
        PieceKind::Queen => bishop_move(board, from, to) || rook_move(board, from, to),
        PieceKind::King => king_move(from, to),
    }
}

/// Pawns step forward onto empty squares, two steps from their starting
/// rank, and capture one step diagonally forward.
fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction() as i16;
    let (df, dr) = from.delta(to);
    let target = board.piece_at(to);

    if df == 0 && dr == dir {
        return target.is_none();
    }
    if df == 0 && dr == 2 * dir && from.rank() == color.pawn_rank(board.size()) {
        let Some(front) = from.offset(0, dir) else {
            return false;
        };
        return target.is_none() && board.piece_at(front).is_none();
    }
    if df.abs() == 1 && dr == dir {
        return target.is_some_and(|p| p.color != color);
    }
    false
}

fn knight_move(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    matches!((df.abs(), dr.abs()), (1, 2) | (2, 1))
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() == dr.abs() && path_is_clear(board, from, to)
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    (df == 0 || dr == 0) && path_is_clear(board, from, to)
}

fn king_move(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df.abs() <= 1 && dr.abs() <= 1
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a file, rank, or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let (step_f, step_r) = (df.signum(), dr.signum());

    let mut current = from;
    loop {
        current = match current.offset(step_f, step_r) {
            Some(sq) => sq,
            None => return false,
        };
        if current == to {
            return true;
        }
        if board.piece_at(current).is_some() {
            return false;
        }
    }
}

/// Returns every move of `color` that is legal and does not leave its own
/// king in check.
///
/// Each candidate is simulated on `board`; the board is unchanged on return.
pub fn safe_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let movers: Vec<Piece> = board.pieces_of(color).copied().collect();
    scan(board, &movers, usize::MAX)
}

/// Returns the squares the given piece can safely move to.
pub fn safe_targets(board: &mut Board, piece: PieceId) -> Vec<Square> {
    let Some(mover) = board.piece(piece).copied() else {
        return Vec::new();
    };
    scan(board, &[mover], usize::MAX)
        .into_iter()
        .map(|m| m.to)
        .collect()
}

/// Returns true if `color` has at least one safe move.
pub fn has_safe_move(board: &mut Board, color: Color) -> bool {
    let movers: Vec<Piece> = board.pieces_of(color).copied().collect();
    !scan(board, &movers, 1).is_empty()
}

/// Tries every (piece, square) pair, stopping after `limit` safe moves.
fn scan(board: &mut Board, movers: &[Piece], limit: usize) -> Vec<Move> {
    let squares: Vec<Square> = board.squares().collect();
    let mut moves = Vec::new();

    for mover in movers {
        for &to in &squares {
            if is_legal_move(board, mover, to)
                && !would_leave_self_in_check(board, mover.id, to, mover.color)
            {
                moves.push(Move::new(mover.id, mover.square, to));
                if moves.len() >= limit {
                    return moves;
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_on(board: &Board, file: u8, rank: u8) -> Piece {
        *board.piece_at(Square::new(file, rank)).unwrap()
    }

    fn targets(board: &Board, piece: &Piece) -> Vec<Square> {
        board
            .squares()
            .filter(|&sq| is_legal_move(board, piece, sq))
            .collect()
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = Board::standard(8).unwrap();
        let pawn = piece_on(&board, 4, 6);
        assert_eq!(targets(&board, &pawn), vec![Square::new(4, 4), Square::new(4, 5)]);

        let black = piece_on(&board, 3, 1);
        assert_eq!(targets(&board, &black), vec![Square::new(3, 2), Square::new(3, 3)]);
    }

    #[test]
    fn pawn_double_step_needs_clear_path() {
        // Blocker on the intermediate square.
        let board = Board::from_layout("8/8/8/8/8/4n3/4P3/8").unwrap();
        let pawn = piece_on(&board, 4, 6);
        assert!(!is_legal_move(&board, &pawn, Square::new(4, 4)));
        assert!(!is_legal_move(&board, &pawn, Square::new(4, 5)));

        // Blocker on the destination square.
        let board = Board::from_layout("8/8/8/8/4n3/8/4P3/8").unwrap();
        let pawn = piece_on(&board, 4, 6);
        assert!(!is_legal_move(&board, &pawn, Square::new(4, 4)));
        assert!(is_legal_move(&board, &pawn, Square::new(4, 5)));
    }

    #[test]
    fn pawn_double_step_only_from_start_rank() {
        let board = Board::from_layout("8/8/8/8/8/4P3/8/8").unwrap();
        let pawn = piece_on(&board, 4, 5);
        assert_eq!(targets(&board, &pawn), vec![Square::new(4, 4)]);
    }

    #[test]
    fn pawn_captures_only_diagonally() {
        let board = Board::from_layout("8/8/8/8/3nnN2/4P3/8/8").unwrap();
        let pawn = piece_on(&board, 4, 5);
        // Straight ahead is blocked, own knight on f4 cannot be taken.
        assert_eq!(targets(&board, &pawn), vec![Square::new(3, 4)]);
    }

    #[test]
    fn pawn_never_moves_sideways_or_back() {
        let board = Board::from_layout("8/8/8/8/8/3pPp2/8/8").unwrap();
        let pawn = piece_on(&board, 4, 5);
        assert!(!is_legal_move(&board, &pawn, Square::new(3, 5)));
        assert!(!is_legal_move(&board, &pawn, Square::new(5, 5)));
        assert!(!is_legal_move(&board, &pawn, Square::new(4, 6)));
        assert!(!is_legal_move(&board, &pawn, Square::new(3, 6)));
    }

    #[test]
    fn knight_jumps() {
        let board = Board::standard(8).unwrap();
        let knight = piece_on(&board, 1, 7);
        assert_eq!(targets(&board, &knight), vec![Square::new(0, 5), Square::new(2, 5)]);
    }

    #[test]
    fn rook_is_blocked_by_either_color() {
        let board = Board::from_layout("8/8/8/8/1P1R1p2/8/8/8").unwrap();
        let rook = piece_on(&board, 3, 4);
        assert!(is_legal_move(&board, &rook, Square::new(2, 4)));
        assert!(!is_legal_move(&board, &rook, Square::new(1, 4)));
        assert!(!is_legal_move(&board, &rook, Square::new(0, 4)));
        assert!(is_legal_move(&board, &rook, Square::new(5, 4)));
        assert!(!is_legal_move(&board, &rook, Square::new(6, 4)));
        assert!(is_legal_move(&board, &rook, Square::new(3, 0)));
        assert!(!is_legal_move(&board, &rook, Square::new(4, 3)));
    }

    #[test]
    fn bishop_stops_at_first_enemy() {
        let board = Board::from_layout("8/8/5p2/8/3B4/8/8/8").unwrap();
        let bishop = piece_on(&board, 3, 4);
        assert!(is_legal_move(&board, &bishop, Square::new(4, 3)));
        assert!(is_legal_move(&board, &bishop, Square::new(5, 2)));
        assert!(!is_legal_move(&board, &bishop, Square::new(6, 1)));
        assert!(is_legal_move(&board, &bishop, Square::new(0, 7)));
        assert!(!is_legal_move(&board, &bishop, Square::new(3, 2)));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = Board::from_layout("8/8/8/8/3Q4/8/8/8").unwrap();
        let queen = piece_on(&board, 3, 4);
        assert_eq!(targets(&board, &queen).len(), 27);
        assert!(!is_legal_move(&board, &queen, Square::new(4, 6)));
    }

    #[test]
    fn king_steps_once() {
        let board = Board::from_layout("8/8/8/8/3K4/8/8/8").unwrap();
        let king = piece_on(&board, 3, 4);
        assert_eq!(targets(&board, &king).len(), 8);
        assert!(!is_legal_move(&board, &king, Square::new(5, 4)));
    }

    #[test]
    fn no_move_in_place_or_off_board() {
        let board = Board::from_layout("8/8/8/8/3Q4/8/8/8").unwrap();
        let queen = piece_on(&board, 3, 4);
        assert!(!is_legal_move(&board, &queen, Square::new(3, 4)));
        assert!(!is_legal_move(&board, &queen, Square::new(3, 8)));
    }

    #[test]
    fn enemy_king_is_an_ordinary_target() {
        let board = Board::from_layout("8/8/8/8/3Rk3/8/8/8").unwrap();
        let rook = piece_on(&board, 3, 4);
        assert!(is_legal_move(&board, &rook, Square::new(4, 4)));
    }

    #[test]
    fn twenty_safe_moves_at_start() {
        let mut board = Board::standard(8).unwrap();
        let before = board.clone();
        assert_eq!(safe_moves(&mut board, Color::White).len(), 20);
        assert_eq!(safe_moves(&mut board, Color::Black).len(), 20);
        assert!(has_safe_move(&mut board, Color::White));
        assert_eq!(board, before);
    }

    #[test]
    fn safe_targets_respect_pins() {
        // The knight on e2 shields its king from the rook on e8.
        let mut board = Board::from_layout("4r3/8/8/8/8/8/4N3/4K3").unwrap();
        let knight = piece_on(&board, 4, 6).id;
        assert!(safe_targets(&mut board, knight).is_empty());
        assert!(safe_targets(&mut board, PieceId(42)).is_empty());
    }
}
