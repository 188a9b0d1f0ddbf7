//! A stateful game session: one position plus the operations a frontend
//! needs to drive it. All rule knowledge stays in [`Position`]; the session
//! only sequences it and keeps the current state consistent.

use tracing::{debug, warn};

use crate::chess_move::Move;
use crate::error::{FenError, MoveError};
use crate::position::Position;

/// The result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as it was applied.
    pub mv: Move,
    /// Whether the opponent is now in check.
    pub gives_check: bool,
}

/// A running game. Owns the current position; every mutation goes through
/// full legality checking, so the position can never become inconsistent.
#[derive(Debug, Clone)]
pub struct Session {
    position: Position,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// Start a session from the standard starting position.
    pub fn new() -> Session {
        Session {
            position: Position::starting(),
        }
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Replace the current position with one parsed from FEN.
    ///
    /// # Errors
    ///
    /// Returns the parse failure and leaves the current position untouched.
    pub fn set_position(&mut self, fen: &str) -> Result<(), FenError> {
        match fen.parse::<Position>() {
            Ok(position) => {
                debug!(%position, "position set from fen");
                self.position = position;
                Ok(())
            }
            Err(err) => {
                warn!(%err, fen, "rejected fen");
                Err(err)
            }
        }
    }

    /// Reset to the standard starting position.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.position = Position::starting();
    }

    /// Parse and play a move given in coordinate notation.
    ///
    /// # Errors
    ///
    /// `MalformedMove` when the text is not coordinate notation; otherwise
    /// whatever [`Position::validate_move`] rejects the move with. The
    /// position is unchanged on any error.
    pub fn attempt_move(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        let mv = Move::from_text(text).ok_or_else(|| MoveError::MalformedMove {
            text: text.to_string(),
        })?;
        let verified = self.position.validate_move(mv)?;
        let next = self.position.apply_move(&verified);
        let gives_check = next.in_check(next.side_to_move());
        debug!(%mv, gives_check, "move played");
        self.position = next;
        Ok(MoveOutcome { mv, gives_check })
    }

    /// Every legal move in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves()
    }

    /// The current position in FEN.
    pub fn fen(&self) -> String {
        self.position.to_string()
    }
}
