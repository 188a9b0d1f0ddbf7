//! The position: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::error::PositionError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::{File, Rank, Square};

/// Complete chess position state.
///
/// The board itself is a mailbox: one `Option<Piece>` per square, indexed
/// by [`Square::index`]. A position is only ever replaced wholesale — FEN
/// parsing builds a fresh one, and move application is copy-make — so a
/// caller can never observe a half-updated position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// One piece-or-empty per square, A1 first.
    squares: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
    /// En passant target square, valid only for the very next move.
    en_passant: Option<Square>,
    /// Halfmove clock for the fifty-move rule, in plies.
    halfmove_clock: u16,
    /// Fullmove number (starts at 1, incremented after Black moves).
    fullmove_number: u16,
}

impl Position {
    /// An empty board with White to move. Used as the FEN parsing scratchpad;
    /// not a valid position until pieces are placed and it is validated.
    pub(crate) fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the standard starting position.
    pub fn starting() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut pos = Position::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            pos.set(Square::new(file, Rank::R1), Some(Piece::new(kind, Color::White)));
            pos.set(
                Square::new(file, Rank::R2),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            pos.set(
                Square::new(file, Rank::R7),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            pos.set(Square::new(file, Rank::R8), Some(Piece::new(kind, Color::Black)));
        }
        pos.castling = CastleRights::ALL;
        pos
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.squares[sq.index()].map(|p| p.color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put a piece on (or clear) a square.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the position has no king for the given color. Validation
    /// on FEN load guarantees one king per side for every reachable position.
    pub fn king_square(&self, color: Color) -> Square {
        Square::all()
            .find(|&sq| self.piece_on(sq) == Some(Piece::new(PieceKind::King, color)))
            .expect("position must have a king for each side")
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Return the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Validate the structural integrity of the placement: exactly one king
    /// per side, and no pawns on either back rank. Checked once on load;
    /// move application preserves both properties.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = Square::all().filter(|&sq| self.piece_on(sq) == Some(king)).count();
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(PositionError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        let back_rank_pawn = Square::all().any(|sq| {
            matches!(sq.rank(), Rank::R1 | Rank::R8)
                && self.piece_on(sq).is_some_and(|p| p.kind == PieceKind::Pawn)
        });
        if back_rank_pawn {
            return Err(PositionError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper rendering an ASCII board grid.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} |", rank)?;
            for file in File::ALL {
                let c = match self.0.piece_on(Square::new(file, rank)) {
                    Some(piece) => piece.fen_char(),
                    None => ' ',
                };
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
