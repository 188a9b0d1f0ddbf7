//! The console loop: reads one command per line, answers with a verdict,
//! and keeps the session state across commands.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use tracing::debug;

use arbiter_core::{Color, MoveError, Session};

use crate::command::{Command, parse_command};
use crate::error::ProtoError;

const HELP_TEXT: &str = "\nCommands:\n  \
    move <from><to>        - Play a move (e.g. 'move e2e4')\n  \
    move <from><to><promo> - Play a promotion move (e.g. 'move e7e8q')\n  \
    fen <string>           - Set the position from a FEN string\n  \
    fen                    - Show the current FEN\n  \
    reset                  - Reset to the starting position\n  \
    legal                  - List all legal moves\n  \
    help                   - Show this help\n  \
    quit                   - Exit the program\n";

const MOVE_FORMAT_HINT: &str =
    "Invalid move format. Use 'move <from><to>' or 'move <from><to><promo>'";

/// The interpreter's answer to one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Text to print before the next prompt.
    Message(String),
    /// Nothing to print (blank input).
    Silence,
    /// Print a farewell and stop reading.
    Goodbye,
}

/// Drives a [`Session`] from a line-oriented text stream.
pub struct Interpreter {
    session: Session,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// Create an interpreter with a fresh session at the starting position.
    pub fn new() -> Interpreter {
        Interpreter {
            session: Session::new(),
        }
    }

    /// Run the read-answer loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output stream.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ProtoError> {
        writeln!(output, "Chess move arbiter. Type 'help' for commands.")?;
        writeln!(output, "{}", self.status_block())?;

        let mut lines = input.lines();
        loop {
            write!(output, "\n> ")?;
            output.flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;
            match self.handle_line(&line) {
                Reply::Message(text) => writeln!(output, "{text}")?,
                Reply::Silence => {}
                Reply::Goodbye => {
                    writeln!(output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Handle one input line and produce the reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let cmd = parse_command(line);
        debug!(?cmd, "received command");
        match cmd {
            Command::Empty => Reply::Silence,
            Command::Quit => Reply::Goodbye,
            Command::Help => Reply::Message(HELP_TEXT.to_string()),
            Command::MalformedMove => Reply::Message(MOVE_FORMAT_HINT.to_string()),
            Command::Move(text) => Reply::Message(self.play(&text)),
            Command::Fen(fen) if fen.is_empty() => {
                Reply::Message(format!("FEN: {}", self.session.fen()))
            }
            Command::Fen(fen) => Reply::Message(match self.session.set_position(&fen) {
                Ok(()) => format!("Position set from FEN\n{}", self.status_block()),
                Err(err) => format!("Invalid FEN string: {err}"),
            }),
            Command::Reset => {
                self.session.reset();
                Reply::Message(format!(
                    "Board reset to starting position\n{}",
                    self.status_block()
                ))
            }
            Command::Legal => {
                let moves = self.session.legal_moves();
                let list = moves
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                Reply::Message(format!("Legal moves ({}): {list}", moves.len()))
            }
            Command::Unknown(_) => {
                Reply::Message("Unknown command. Type 'help' for available commands.".to_string())
            }
        }
    }

    fn play(&mut self, text: &str) -> String {
        match self.session.attempt_move(text) {
            Ok(outcome) => format!("Move played: {}\n{}", outcome.mv, self.status_block()),
            Err(MoveError::MalformedMove { .. }) => MOVE_FORMAT_HINT.to_string(),
            Err(err) => format!("Invalid move: {text} ({err})"),
        }
    }

    /// Board grid, FEN, side to move, and any check or game-over verdict.
    fn status_block(&self) -> String {
        let position = self.session.position();
        let side = position.side_to_move();
        let mut block = String::new();
        let _ = write!(
            block,
            "\n{}\n\nFEN: {}\nSide to move: {}",
            position.pretty(),
            position,
            side_name(side),
        );

        let in_check = position.in_check(side);
        if position.is_checkmate() {
            let _ = write!(
                block,
                "\nCHECK!\nCHECKMATE! {} wins!",
                side_name(side.flip())
            );
        } else if position.is_stalemate() {
            let _ = write!(block, "\nSTALEMATE! Draw.");
        } else {
            if in_check {
                let _ = write!(block, "\nCHECK!");
            }
            if position.is_fifty_move_draw() {
                let _ = write!(block, "\nDRAW! Fifty-move rule.");
            }
        }
        block
    }
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}
