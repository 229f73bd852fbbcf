//! Text and JSON rendering of game snapshots.

use absorb_core::Square;
use absorb_engine::{GameOutcome, Snapshot};
use std::fmt::Write;

/// Renders the board as a letter diagram, White at the bottom.
///
/// Empty squares are dots. Ranks touched by the last move end in `*`.
pub fn board(snapshot: &Snapshot) -> String {
    let size = snapshot.size;
    let label_width = size.to_string().len();
    let mut out = String::new();

    for rank in 0..size {
        let _ = write!(out, "{:>width$} ", size - rank, width = label_width);
        for file in 0..size {
            let ch = snapshot
                .piece_at(Square::new(file, rank))
                .map_or('.', |p| p.to_char());
            out.push(' ');
            out.push(ch);
        }
        if snapshot
            .last_move
            .is_some_and(|m| m.from.rank() == rank || m.to.rank() == rank)
        {
            out.push_str("  *");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:>width$} ", "", width = label_width);
    for file in 0..size {
        out.push(' ');
        out.push((b'a' + file) as char);
    }
    out.push('\n');
    out
}

/// Renders the side to move and any check or final result.
pub fn status(snapshot: &Snapshot) -> String {
    match snapshot.outcome {
        GameOutcome::InProgress => format!("{} to move", snapshot.turn),
        GameOutcome::Check(color) => format!("{} to move, check!", color),
        GameOutcome::Checkmate(winner) => format!("Checkmate! {} wins!", winner),
        GameOutcome::Stalemate => "Stalemate!".to_string(),
    }
}

/// Describes the last move in coordinates, such as `f3e4 (takes Knight, becomes Knight)`.
pub fn last_move(snapshot: &Snapshot) -> Option<String> {
    let m = snapshot.last_move?;
    let coords = format!(
        "{}{}",
        m.from.to_algebraic(snapshot.size),
        m.to.to_algebraic(snapshot.size)
    );
    let Some(captured) = m.captured else {
        return Some(coords);
    };
    Some(match m.became {
        Some(kind) => format!("{} (takes {}, becomes {})", coords, captured.kind, kind),
        None => format!("{} (takes {})", coords, captured.kind),
    })
}

/// Renders the snapshot as a single JSON line.
pub fn json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use absorb_core::Color;
    use absorb_engine::{Game, Variant};

    #[test]
    fn test_board_diagram() {
        let game = Game::new();
        let text = board(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn test_wide_board_labels() {
        let game = Game::new_game(10).unwrap();
        let text = board(&game.snapshot());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("10  . r n"));
        assert!(lines[9].starts_with(" 1  . R N"));
        assert!(lines[10].ends_with("i j"));
    }

    #[test]
    fn test_last_move_marker_and_description() {
        let mut game =
            Game::from_layout("k7/8/8/8/4n3/5P2/8/K7", Color::White, Variant::Absorb).unwrap();
        let f3 = Square::from_algebraic("f3", 8).unwrap();
        let e4 = Square::from_algebraic("e4", 8).unwrap();
        game.submit_move_from(f3, e4).unwrap();

        let snapshot = game.snapshot();
        let text = board(&snapshot);
        assert!(text.lines().nth(4).unwrap().ends_with("*"));
        assert!(text.lines().nth(5).unwrap().ends_with("*"));
        assert_eq!(
            last_move(&snapshot).unwrap(),
            "f3e4 (takes Knight, becomes Knight)"
        );
    }

    #[test]
    fn test_status_lines() {
        let mut game = Game::new();
        assert_eq!(status(&game.snapshot()), "White to move");
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            game.submit_move_from(
                Square::from_algebraic(from, 8).unwrap(),
                Square::from_algebraic(to, 8).unwrap(),
            )
            .unwrap();
        }
        assert_eq!(status(&game.snapshot()), "Checkmate! Black wins!");
    }

    #[test]
    fn test_json_line() {
        let game = Game::new();
        let line = json(&game.snapshot()).unwrap();
        assert!(!line.contains('\n'));
        let back: Snapshot = serde_json::from_str(&line).unwrap();
        assert_eq!(back, game.snapshot());
    }
}
