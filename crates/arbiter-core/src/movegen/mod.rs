//! Pseudo-legal move generation and full legal move enumeration.

pub(crate) mod king;
pub(crate) mod knights;
pub(crate) mod pawns;
pub(crate) mod sliders;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::legality::VerifiedMove;
use crate::piece::{Color, Piece, PieceKind, PromotionPiece};
use crate::position::Position;
use crate::square::{Rank, Square};

impl Position {
    /// Enumerate the destinations reachable by the piece at `origin`,
    /// ignoring whether the mover's own king ends up in check.
    ///
    /// Sliding pieces stop at the first occupied square along each ray and
    /// include it only when it can be captured; knights and kings use fixed
    /// offset sets; pawns get pushes, double pushes, captures, and the en
    /// passant target. Castling destinations are *not* included here — they
    /// are a compound move validated separately.
    ///
    /// # Errors
    ///
    /// `NoPieceAtOrigin` when `origin` is empty, `WrongSideToMove` when it
    /// holds an opponent's piece.
    pub fn pseudo_legal_from(&self, origin: Square) -> Result<Vec<Square>, MoveError> {
        let piece = self
            .piece_on(origin)
            .ok_or(MoveError::NoPieceAtOrigin { square: origin })?;
        if piece.color != self.side_to_move() {
            return Err(MoveError::WrongSideToMove { square: origin });
        }
        Ok(destinations(self, origin, piece))
    }

    /// Enumerate every legal move for the side to move.
    ///
    /// Promotion destinations expand into four moves, one per promotion
    /// piece. Castling is appended when its composite conditions hold.
    /// Every candidate is filtered through a scratch application so that no
    /// returned move leaves the mover's own king attacked.
    pub fn legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move();
        let promo_rank = match us {
            Color::White => Rank::R8,
            Color::Black => Rank::R1,
        };
        let mut moves = Vec::new();

        for from in Square::all() {
            let piece = match self.piece_on(from) {
                Some(p) if p.color == us => p,
                _ => continue,
            };

            for to in destinations(self, from, piece) {
                if piece.kind == PieceKind::Pawn && to.rank() == promo_rank {
                    for promo in PromotionPiece::ALL {
                        moves.push(Move::promoting(from, to, promo));
                    }
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves.retain(|&mv| {
            let vm = VerifiedMove::classify_unchecked(self, mv);
            let next = self.apply_move(&vm);
            !next.is_square_attacked(next.king_square(us), us.flip())
        });

        // Castling candidates are fully validated by the composite check, so
        // they skip the scratch filter.
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if king::castle_is_legal(self, side) {
                moves.push(king::castle_move(us, side));
            }
        }

        moves
    }
}

/// Destination set for a piece, dispatched on its kind.
pub(crate) fn destinations(pos: &Position, origin: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawns::destinations(pos, origin, piece.color),
        PieceKind::Knight => knights::destinations(pos, origin, piece.color),
        PieceKind::Bishop => sliders::bishop_destinations(pos, origin, piece.color),
        PieceKind::Rook => sliders::rook_destinations(pos, origin, piece.color),
        PieceKind::Queen => sliders::queen_destinations(pos, origin, piece.color),
        PieceKind::King => king::step_destinations(pos, origin, piece.color),
    }
}
