//! Error types for FEN parsing, position validation, and move rejection.

use crate::chess_move::Move;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
///
/// A malformed FEN is an input error: it prevents the string from taking
/// effect but is never fatal to a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed placement fails structural validation.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying validation error.
        #[from]
        source: PositionError,
    },
}

/// Errors from structural validation of a parsed [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Reasons a move is rejected.
///
/// Every variant is a non-fatal rejection: the position is left unchanged
/// and the session keeps accepting commands. The variants exist so the
/// caller can report *why* a move was refused, not to vary control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move text is not coordinate notation (e.g. "e2e4", "g7g8q").
    #[error("malformed move text: \"{text}\"")]
    MalformedMove {
        /// The text that failed to parse.
        text: String,
    },
    /// The origin square is empty.
    #[error("no piece on {square}")]
    NoPieceAtOrigin {
        /// The empty origin square.
        square: Square,
    },
    /// The origin square holds a piece of the side not to move.
    #[error("piece on {square} belongs to the opponent")]
    WrongSideToMove {
        /// The origin square.
        square: Square,
    },
    /// The destination is unreachable by the piece's movement rules,
    /// including blocked sliding paths.
    #[error("{mv} is not a pseudo-legal move")]
    NotPseudoLegal {
        /// The rejected move.
        mv: Move,
    },
    /// The move is pseudo-legal but leaves the mover's own king attacked.
    #[error("{mv} would leave the king in check")]
    ExposesOwnKing {
        /// The rejected move.
        mv: Move,
    },
    /// Castling rights, path, or safety requirements are violated.
    #[error("{mv} is not a legal castling move")]
    IllegalCastling {
        /// The rejected move.
        mv: Move,
    },
    /// The en passant window has closed or never opened for this square.
    #[error("{mv} is not a legal en passant capture")]
    IllegalEnPassant {
        /// The rejected move.
        mv: Move,
    },
    /// A promotion piece is missing on a promoting move, or present on a
    /// move that does not promote.
    #[error("{mv} has a missing or spurious promotion piece")]
    IllegalPromotion {
        /// The rejected move.
        mv: Move,
    },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError, PositionError};
    use crate::chess_move::Move;

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(err.to_string(), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn fen_error_from_position_error() {
        let err: FenError = PositionError::PawnsOnBackRank.into();
        assert!(matches!(err, FenError::InvalidPosition { .. }));
        assert_eq!(err.to_string(), "invalid position: pawns found on back rank");
    }

    #[test]
    fn move_error_display_names_the_move() {
        let mv = Move::from_text("e1e3").unwrap();
        let err = MoveError::NotPseudoLegal { mv };
        assert_eq!(err.to_string(), "e1e3 is not a pseudo-legal move");
    }
}
