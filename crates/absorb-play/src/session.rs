//! The stdin line protocol.
//!
//! Each input line is one command:
//! - `e2e4` or `e2 e4` moves the piece on the first square to the second
//! - `moves` lists the safe moves of the side to move
//! - `board` prints the position again
//! - `quit` ends the session

use crate::render;
use absorb_core::Square;
use absorb_engine::{checkers, Game};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Square, to: Square },
    Moves,
    Board,
    Quit,
}

/// Errors that can occur when parsing an input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("'{0}' is not a square on this board")]
    BadSquare(String),
    #[error("unknown command '{0}', expected a move like e2e4, 'moves', 'board' or 'quit'")]
    Unknown(String),
}

impl Command {
    /// Parses one line for a board of `size`.
    pub fn parse(line: &str, size: u8) -> Result<Self, CommandError> {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "moves" => return Ok(Command::Moves),
            "board" => return Ok(Command::Board),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let (from, to) = match parts.as_slice() {
            [from, to] => (*from, *to),
            [joined] => split_coordinates(joined)
                .ok_or_else(|| CommandError::Unknown(line.to_string()))?,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(Command::Move {
            from: square(from, size)?,
            to: square(to, size)?,
        })
    }
}

fn square(name: &str, size: u8) -> Result<Square, CommandError> {
    Square::from_algebraic(name, size).ok_or_else(|| CommandError::BadSquare(name.to_string()))
}

/// Splits `e2e4` or `j10j9` after the first square's digits.
fn split_coordinates(joined: &str) -> Option<(&str, &str)> {
    let bytes = joined.as_bytes();
    let split = (1..bytes.len())
        .find(|&i| bytes[i].is_ascii_alphabetic() && bytes[i - 1].is_ascii_digit())?;
    Some(joined.split_at(split))
}

/// A game driven by text commands.
pub struct Session {
    game: Game,
    json: bool,
}

impl Session {
    pub fn new(game: Game, json: bool) -> Self {
        Session { game, json }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit`, end of input, or the end of the game.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        self.print_position(&mut out)?;
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line, self.game.board().size()) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Board => self.print_position(&mut out)?,
                Command::Moves => self.print_moves(&mut out)?,
                Command::Move { from, to } => match self.game.submit_move_from(from, to) {
                    Ok(_) => {
                        self.print_position(&mut out)?;
                        if self.game.is_over() {
                            break;
                        }
                    }
                    Err(reason) => writeln!(out, "Rejected: {}", reason)?,
                },
            }
        }
        out.flush()
    }

    fn print_position<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snapshot = self.game.snapshot();
        if self.json {
            let line = render::json(&snapshot).map_err(io::Error::other)?;
            return writeln!(out, "{}", line);
        }
        if let Some(description) = render::last_move(&snapshot) {
            writeln!(out, "Last move: {}", description)?;
        }
        write!(out, "{}", render::board(&snapshot))?;
        writeln!(out, "{}", render::status(&snapshot))?;
        if !snapshot.outcome.is_terminal() {
            let size = snapshot.size;
            let from: Vec<String> = checkers(self.game.board(), snapshot.turn)
                .into_iter()
                .filter_map(|id| snapshot.piece(id))
                .map(|p| p.square.to_algebraic(size))
                .collect();
            if !from.is_empty() {
                writeln!(out, "Check from {}", from.join(", "))?;
            }
        }
        Ok(())
    }

    fn print_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let size = self.game.board().size();
        let moves: Vec<String> = self
            .game
            .legal_moves()
            .into_iter()
            .map(|m| m.to_coordinates(size))
            .collect();
        if moves.is_empty() {
            return writeln!(out, "No moves");
        }
        writeln!(out, "{}", moves.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use absorb_core::Color;
    use absorb_engine::{GameOutcome, Variant};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name, 8).unwrap()
    }

    fn run(game: Game, json: bool, input: &str) -> (Session, String) {
        let mut session = Session::new(game, json);
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("e2e4", 8),
            Ok(Command::Move { from: sq("e2"), to: sq("e4") })
        );
        assert_eq!(
            Command::parse("  E2 e4 ", 8),
            Ok(Command::Move { from: sq("e2"), to: sq("e4") })
        );
        assert_eq!(Command::parse("moves", 8), Ok(Command::Moves));
        assert_eq!(Command::parse("Board", 8), Ok(Command::Board));
        assert_eq!(Command::parse("quit", 8), Ok(Command::Quit));
        assert_eq!(Command::parse("   ", 8), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("e2e9", 8),
            Err(CommandError::BadSquare("e9".to_string()))
        );
        assert_eq!(
            Command::parse("castle", 8),
            Err(CommandError::Unknown("castle".to_string()))
        );
    }

    #[test]
    fn test_parse_multi_digit_ranks() {
        assert_eq!(
            Command::parse("j10j9", 10),
            Ok(Command::Move {
                from: Square::new(9, 0),
                to: Square::new(9, 1),
            })
        );
    }

    #[test]
    fn test_session_plays_to_checkmate() {
        let (session, out) = run(Game::new(), false, "f2f3\ne7e5\ng2 g4\nd8h4\na2a3\n");
        assert_eq!(session.game().outcome(), GameOutcome::Checkmate(Color::Black));
        assert!(out.trim_end().ends_with("Checkmate! Black wins!"));
        assert!(out.contains("Last move: d8h4"));
    }

    #[test]
    fn test_session_reports_rejections() {
        let (session, out) = run(Game::new(), false, "e7e5\ne2e5\nh9h1\nquit\ne2e4\n");
        assert!(out.contains("Rejected: it is not that player's turn"));
        assert!(out.contains("Rejected: illegal move"));
        assert!(out.contains("'h9' is not a square on this board"));
        assert_eq!(session.game().turn(), Color::White);
        assert!(session.game().last_move().is_none());
    }

    #[test]
    fn test_session_names_checking_pieces() {
        let (_, out) = run(Game::new(), false, "e2e4\nf7f6\nd1h5\n");
        assert!(out.contains("Black to move, check!"));
        assert!(out.trim_end().ends_with("Check from h5"));
    }

    #[test]
    fn test_session_stalemate() {
        let game =
            Game::from_layout("8/8/8/8/8/3q4/2k5/K7", Color::Black, Variant::Absorb).unwrap();
        let (_, out) = run(game, false, "d3b3\n");
        assert!(out.trim_end().ends_with("Stalemate!"));
    }

    #[test]
    fn test_session_lists_moves() {
        let (_, out) = run(Game::new(), false, "moves\n");
        let listing = out.lines().last().unwrap();
        assert_eq!(listing.split(' ').count(), 20);
        assert!(listing.contains("e2e4"));
        assert!(listing.contains("g1f3"));
    }

    #[test]
    fn test_session_json_output() {
        let (_, out) = run(Game::new(), true, "e2e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(value["turn"], "black");
        assert_eq!(value["last_move"]["to"]["rank"], 4);
    }
}
