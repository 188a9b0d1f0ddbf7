//! Console command parsing.

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `move <from><to>[promo]` -- attempt a move in coordinate notation.
    Move(String),
    /// `move` with missing or too-short arguments.
    MalformedMove,
    /// `fen <string>` -- set the position from a FEN string.
    Fen(String),
    /// `reset` -- return to the starting position.
    Reset,
    /// `legal` -- list every legal move.
    Legal,
    /// `help` -- show the command summary.
    Help,
    /// `quit` -- exit the program.
    Quit,
    /// A blank line; ignored.
    Empty,
    /// Unrecognized command word.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
///
/// The move argument is carried verbatim; whether it names a legal move is
/// the session's decision, not the parser's. Only the bare shape (at least
/// four characters) is checked here.
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "move" => {
            if rest.len() < 4 {
                Command::MalformedMove
            } else {
                Command::Move(rest.to_string())
            }
        }
        "fen" => Command::Fen(rest.to_string()),
        "reset" => Command::Reset,
        "legal" => Command::Legal,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}
