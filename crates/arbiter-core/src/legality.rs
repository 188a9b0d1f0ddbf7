//! Full legality checking: classify a candidate move, reject it with the
//! most specific error that applies, or return a proof token that
//! [`Position::apply_move`](crate::position::Position) accepts.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::movegen::{self, king};
use crate::piece::{Color, PieceKind};
use crate::position::Position;
use crate::square::{File, Rank};

/// How a verified move is executed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveFlavor {
    /// Plain move or capture, including promotion.
    Normal,
    /// En passant capture; the captured pawn sits behind the destination.
    EnPassant,
    /// Castling; the rook moves together with the king.
    Castle(CastleSide),
}

/// A move that passed [`Position::validate_move`]. Holding one is the only
/// way to apply a move, so an applied move is always legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedMove {
    pub(crate) mv: Move,
    pub(crate) flavor: MoveFlavor,
}

impl VerifiedMove {
    /// The underlying move in coordinate form.
    pub fn as_move(&self) -> Move {
        self.mv
    }

    /// Classify a move without legality checks. Used internally on moves
    /// that came out of the generator, which only produces sound
    /// candidates.
    pub(crate) fn classify_unchecked(pos: &Position, mv: Move) -> VerifiedMove {
        let flavor = match pos.piece_on(mv.from).map(|p| p.kind) {
            Some(PieceKind::Pawn)
                if mv.from.file() != mv.to.file() && pos.en_passant() == Some(mv.to) =>
            {
                MoveFlavor::EnPassant
            }
            Some(PieceKind::King) if mv.from.file() == File::E => {
                castle_side(mv).map_or(MoveFlavor::Normal, MoveFlavor::Castle)
            }
            _ => MoveFlavor::Normal,
        };
        VerifiedMove { mv, flavor }
    }
}

/// The castle side a king move would realize, if its geometry matches one.
fn castle_side(mv: Move) -> Option<CastleSide> {
    if mv.from.rank() != mv.to.rank() {
        return None;
    }
    match mv.to.file() {
        File::G => Some(CastleSide::KingSide),
        File::C => Some(CastleSide::QueenSide),
        _ => None,
    }
}

impl Position {
    /// Validate a candidate move against the full rules of chess.
    ///
    /// Rejections carry the most specific applicable error: origin and
    /// side-to-move problems first, then promotion consistency, then the
    /// compound castling and en passant conditions, then plain reachability,
    /// and finally the self-check test on a scratch copy of the position.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] variant except `MalformedMove`, which belongs to
    /// text parsing.
    pub fn validate_move(&self, mv: Move) -> Result<VerifiedMove, MoveError> {
        let piece = self
            .piece_on(mv.from)
            .ok_or(MoveError::NoPieceAtOrigin { square: mv.from })?;
        let us = self.side_to_move();
        if piece.color != us {
            return Err(MoveError::WrongSideToMove { square: mv.from });
        }

        let promo_rank = match us {
            Color::White => Rank::R8,
            Color::Black => Rank::R1,
        };
        let needs_promotion = piece.kind == PieceKind::Pawn && mv.to.rank() == promo_rank;
        if needs_promotion != mv.promotion.is_some() {
            return Err(MoveError::IllegalPromotion { mv });
        }

        if piece.kind == PieceKind::King
            && mv.from == king::castle_move(us, CastleSide::KingSide).from
            && let Some(side) = castle_side(mv)
        {
            return if king::castle_is_legal(self, side) {
                Ok(VerifiedMove {
                    mv,
                    flavor: MoveFlavor::Castle(side),
                })
            } else {
                Err(MoveError::IllegalCastling { mv })
            };
        }

        let mut flavor = MoveFlavor::Normal;
        if piece.kind == PieceKind::Pawn
            && mv.from.file() != mv.to.file()
            && !self.is_occupied(mv.to)
        {
            if self.en_passant() == Some(mv.to) {
                flavor = MoveFlavor::EnPassant;
            } else {
                return Err(MoveError::IllegalEnPassant { mv });
            }
        }

        if !movegen::destinations(self, mv.from, piece).contains(&mv.to) {
            return Err(MoveError::NotPseudoLegal { mv });
        }

        let verified = VerifiedMove { mv, flavor };
        let next = self.apply_move(&verified);
        if next.is_square_attacked(next.king_square(us), us.flip()) {
            return Err(MoveError::ExposesOwnKing { mv });
        }
        Ok(verified)
    }

    /// The side to move is checkmated: in check with no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// The side to move is stalemated: not in check, but has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move()) && self.legal_moves().is_empty()
    }

    /// The fifty-move rule: a draw may be claimed once a hundred half-moves
    /// pass without a pawn move or capture.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PromotionPiece;
    use crate::square::Square;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(text: &str) -> Move {
        Move::from_text(text).unwrap()
    }

    #[test]
    fn ordinary_opening_move_is_legal() {
        let p = Position::starting();
        let vm = p.validate_move(mv("e2e4")).unwrap();
        assert_eq!(vm.as_move(), mv("e2e4"));
        assert_eq!(vm.flavor, MoveFlavor::Normal);
    }

    #[test]
    fn empty_origin_is_reported_first() {
        let p = Position::starting();
        assert!(matches!(
            p.validate_move(mv("e4e5")),
            Err(MoveError::NoPieceAtOrigin { square }) if square == sq("e4")
        ));
    }

    #[test]
    fn opponents_piece_cannot_be_moved() {
        let p = Position::starting();
        assert!(matches!(
            p.validate_move(mv("e7e5")),
            Err(MoveError::WrongSideToMove { .. })
        ));
    }

    #[test]
    fn unreachable_destination_is_not_pseudo_legal() {
        let p = Position::starting();
        assert!(matches!(
            p.validate_move(mv("e1e3")),
            Err(MoveError::NotPseudoLegal { .. })
        ));
    }

    #[test]
    fn pinned_piece_exposes_own_king() {
        // Knight on e2 shields the king from the rook on e8.
        let p = pos("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(matches!(
            p.validate_move(mv("e2c3")),
            Err(MoveError::ExposesOwnKing { .. })
        ));
    }

    #[test]
    fn castling_from_the_start_is_blocked() {
        let p = Position::starting();
        assert!(matches!(
            p.validate_move(mv("e1g1")),
            Err(MoveError::IllegalCastling { .. })
        ));
    }

    #[test]
    fn castling_with_clear_path_verifies() {
        let p = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1");
        let vm = p.validate_move(mv("e1g1")).unwrap();
        assert_eq!(vm.flavor, MoveFlavor::Castle(CastleSide::KingSide));
    }

    #[test]
    fn castling_through_check_is_rejected() {
        let p = pos("rnb1kbnr/pp1ppppp/8/q7/4P3/5N2/PPP2PPP/RNBQK2R w KQkq - 2 4");
        assert!(matches!(
            p.validate_move(mv("e1g1")),
            Err(MoveError::IllegalCastling { .. })
        ));
    }

    #[test]
    fn en_passant_inside_the_window() {
        let p = pos("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        let vm = p.validate_move(mv("e5d6")).unwrap();
        assert_eq!(vm.flavor, MoveFlavor::EnPassant);
    }

    #[test]
    fn en_passant_after_the_window_closes() {
        // Same structure, but the target square has expired.
        let p = pos("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 3");
        assert!(matches!(
            p.validate_move(mv("e5d6")),
            Err(MoveError::IllegalEnPassant { .. })
        ));
    }

    #[test]
    fn promotion_must_name_a_piece() {
        let p = pos("rnbqkbnr/ppppppPp/8/8/8/8/PPPPPPP1/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(
            p.validate_move(mv("g7h8")),
            Err(MoveError::IllegalPromotion { .. })
        ));
        let vm = p.validate_move(mv("g7h8q")).unwrap();
        assert_eq!(vm.as_move().promotion, Some(PromotionPiece::Queen));
    }

    #[test]
    fn spurious_promotion_is_rejected() {
        let p = Position::starting();
        assert!(matches!(
            p.validate_move(mv("e2e4q")),
            Err(MoveError::IllegalPromotion { .. })
        ));
        assert!(matches!(
            p.validate_move(mv("g1f3n")),
            Err(MoveError::IllegalPromotion { .. })
        ));
    }

    #[test]
    fn back_rank_checkmate() {
        let p = pos("6k1/5ppp/8/8/8/8/8/K3R3 b - - 0 1");
        assert!(!p.is_checkmate());
        let p = pos("4R1k1/5ppp/8/8/8/8/8/K7 b - - 0 1");
        assert!(p.is_checkmate());
        assert!(!p.is_stalemate());
    }

    #[test]
    fn classic_stalemate_corner() {
        let p = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(p.is_stalemate());
        assert!(!p.is_checkmate());
    }

    #[test]
    fn fifty_move_rule_counts_half_moves() {
        let p = pos("4k3/8/8/8/8/8/8/4K3 w - - 99 80");
        assert!(!p.is_fifty_move_draw());
        let p = pos("4k3/8/8/8/8/8/8/4K3 w - - 100 80");
        assert!(p.is_fifty_move_draw());
    }
}
