//! Move representation and coordinate-notation parsing.

use std::fmt;

use crate::piece::PromotionPiece;
use crate::square::Square;

/// A candidate move: origin, destination, and an optional promotion piece.
///
/// A `Move` is a pure value parsed from coordinate notation; it carries no
/// claim of legality and no reference to any position. Whether it is a
/// capture, a castle, or an en passant capture is determined against a
/// [`Position`](crate::Position) by
/// [`validate_move`](crate::Position::validate_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Promotion piece, present only for pawn moves onto the back rank.
    pub promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn promoting(from: Square, to: Square, promo: PromotionPiece) -> Move {
        Move {
            from,
            to,
            promotion: Some(promo),
        }
    }

    /// Parse coordinate notation: four characters (origin, destination),
    /// optionally followed by a promotion letter — `e2e4`, `g7g8q`.
    pub fn from_text(text: &str) -> Option<Move> {
        if text.len() != 4 && text.len() != 5 {
            return None;
        }
        let from = Square::from_algebraic(text.get(0..2)?)?;
        let to = Square::from_algebraic(text.get(2..4)?)?;
        let promotion = match text.get(4..5) {
            Some(s) => Some(PromotionPiece::from_notation_char(s.chars().next()?)?),
            None => None,
        };
        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.notation_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::piece::PromotionPiece;
    use crate::square::Square;

    #[test]
    fn parse_plain() {
        let mv = Move::from_text("e2e4").unwrap();
        assert_eq!(mv.from, Square::from_algebraic("e2").unwrap());
        assert_eq!(mv.to, Square::from_algebraic("e4").unwrap());
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn parse_promotion() {
        let mv = Move::from_text("g7g8q").unwrap();
        assert_eq!(mv.from, Square::from_algebraic("g7").unwrap());
        assert_eq!(mv.to, Square::G8);
        assert_eq!(mv.promotion, Some(PromotionPiece::Queen));

        assert_eq!(
            Move::from_text("a2a1n").unwrap().promotion,
            Some(PromotionPiece::Knight)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Move::from_text("").is_none());
        assert!(Move::from_text("e2").is_none());
        assert!(Move::from_text("e2e").is_none());
        assert!(Move::from_text("e2e9").is_none());
        assert!(Move::from_text("i2e4").is_none());
        assert!(Move::from_text("e2e4x").is_none());
        assert!(Move::from_text("e2e4qq").is_none());
    }

    #[test]
    fn display_roundtrip() {
        for text in ["e2e4", "a7a8r", "h7h8n", "e1g1"] {
            assert_eq!(Move::from_text(text).unwrap().to_string(), text);
        }
    }
}
