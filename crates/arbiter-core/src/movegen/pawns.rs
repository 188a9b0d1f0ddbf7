use crate::piece::Color;
use crate::position::Position;
use crate::square::{Rank, Square};

/// Pawn destinations: single push, double push from the start rank, diagonal
/// captures, and the en passant target square when it sits on a capture
/// diagonal. Promotion is not expanded here; callers expand last-rank
/// destinations into the four promotion moves.
pub(crate) fn destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    let mut dests = Vec::new();
    let fwd = color.forward();
    let start_rank = match color {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    };

    if let Some(one) = origin.offset(0, fwd)
        && !pos.is_occupied(one)
    {
        dests.push(one);
        if origin.rank() == start_rank
            && let Some(two) = one.offset(0, fwd)
            && !pos.is_occupied(two)
        {
            dests.push(two);
        }
    }

    for df in [-1, 1] {
        if let Some(target) = origin.offset(df, fwd) {
            if pos.color_on(target) == Some(color.flip()) || pos.en_passant() == Some(target) {
                dests.push(target);
            }
        }
    }

    dests
}
