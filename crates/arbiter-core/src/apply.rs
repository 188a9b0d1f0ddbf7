//! Copy-make move application. A [`VerifiedMove`] proves legality, so
//! application never fails; it returns the successor position and leaves
//! the original untouched.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::legality::{MoveFlavor, VerifiedMove};
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::{File, Square};

/// Castling-right bits revoked when a move touches a square. Indexing by
/// both the origin and the destination covers king moves, rook moves, and
/// rook captures with one lookup each.
fn rights_revoked_at(sq: Square) -> CastleRights {
    match sq {
        Square::A1 => CastleRights::WHITE_QUEEN,
        Square::E1 => CastleRights::WHITE_BOTH,
        Square::H1 => CastleRights::WHITE_KING,
        Square::A8 => CastleRights::BLACK_QUEEN,
        Square::E8 => CastleRights::BLACK_BOTH,
        Square::H8 => CastleRights::BLACK_KING,
        _ => CastleRights::NONE,
    }
}

impl Position {
    /// Apply a verified move, producing the successor position.
    ///
    /// Handles every bookkeeping rule in one place: piece movement
    /// (including the rook in castling and the removed pawn in en passant),
    /// promotion, castling-right revocation, the one-ply en passant window,
    /// the halfmove clock, the fullmove number, and the side to move.
    pub fn apply_move(&self, verified: &VerifiedMove) -> Position {
        let mv = verified.mv;
        let us = self.side_to_move();
        let mut next = *self;

        let piece = self
            .piece_on(mv.from)
            .expect("verified move has a piece at its origin");
        let is_capture = self.is_occupied(mv.to) || verified.flavor == MoveFlavor::EnPassant;

        next.set(mv.from, None);
        match verified.flavor {
            MoveFlavor::Normal => {
                let placed = match mv.promotion {
                    Some(promo) => Piece::new(promo.to_piece_kind(), us),
                    None => piece,
                };
                next.set(mv.to, Some(placed));
            }
            MoveFlavor::EnPassant => {
                next.set(mv.to, Some(piece));
                // The captured pawn sits on the mover's origin rank, behind
                // the target square.
                let captured = Square::new(mv.to.file(), mv.from.rank());
                next.set(captured, None);
            }
            MoveFlavor::Castle(side) => {
                next.set(mv.to, Some(piece));
                let rank = mv.from.rank();
                let (rook_from, rook_to) = match side {
                    CastleSide::KingSide => (File::H, File::F),
                    CastleSide::QueenSide => (File::A, File::D),
                };
                next.set(Square::new(rook_from, rank), None);
                next.set(
                    Square::new(rook_to, rank),
                    Some(Piece::new(PieceKind::Rook, us)),
                );
            }
        }

        next.set_castling(
            self.castling()
                .remove(rights_revoked_at(mv.from))
                .remove(rights_revoked_at(mv.to)),
        );

        // The en passant window lasts exactly one ply: set it on a double
        // pawn push, clear it otherwise.
        let double_push = piece.kind == PieceKind::Pawn
            && (mv.from.rank().index() as i8 - mv.to.rank().index() as i8).abs() == 2;
        next.set_en_passant(if double_push {
            mv.from.offset(0, us.forward())
        } else {
            None
        });

        if piece.kind == PieceKind::Pawn || is_capture {
            next.set_halfmove_clock(0);
        } else {
            next.set_halfmove_clock(self.halfmove_clock() + 1);
        }
        if us == Color::Black {
            next.set_fullmove_number(self.fullmove_number() + 1);
        }
        next.set_side_to_move(us.flip());
        next
    }
}
