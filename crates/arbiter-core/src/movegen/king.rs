use crate::attacks::KING_STEPS;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::{File, Rank, Square};

/// Single-step king destinations. Castling is handled separately as a
/// compound move.
pub(crate) fn step_destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    KING_STEPS
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&to| pos.color_on(to) != Some(color))
        .collect()
}

/// The king's home rank for a color.
pub(crate) fn home_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

/// The king move that realizes castling for a color and side.
pub(crate) fn castle_move(color: Color, side: CastleSide) -> Move {
    let rank = home_rank(color);
    let to_file = match side {
        CastleSide::KingSide => File::G,
        CastleSide::QueenSide => File::C,
    };
    Move::new(Square::new(File::E, rank), Square::new(to_file, rank))
}

/// Check every castling condition for the side to move:
///
/// 1. the right for this side has not been revoked;
/// 2. king and rook stand on their home squares;
/// 3. every square between them is empty;
/// 4. the king's start, transit, and destination squares are not attacked
///    by the opponent.
///
/// The rook's path may pass through an attacked square (only the king's
/// squares matter), and on the queenside b1/b8 must be empty but need not
/// be safe.
pub(crate) fn castle_is_legal(pos: &Position, side: CastleSide) -> bool {
    let us = pos.side_to_move();
    if !pos.castling().has(us, side) {
        return false;
    }

    let rank = home_rank(us);
    let king_from = Square::new(File::E, rank);
    let (rook_file, between, king_path): (File, &[File], [File; 3]) = match side {
        CastleSide::KingSide => (File::H, &[File::F, File::G], [File::E, File::F, File::G]),
        CastleSide::QueenSide => (
            File::A,
            &[File::B, File::C, File::D],
            [File::E, File::D, File::C],
        ),
    };

    if pos.piece_on(king_from) != Some(Piece::new(PieceKind::King, us))
        || pos.piece_on(Square::new(rook_file, rank)) != Some(Piece::new(PieceKind::Rook, us))
    {
        return false;
    }
    if between.iter().any(|&f| pos.is_occupied(Square::new(f, rank))) {
        return false;
    }
    let them = us.flip();
    !king_path
        .iter()
        .any(|&f| pos.is_square_attacked(Square::new(f, rank), them))
}
