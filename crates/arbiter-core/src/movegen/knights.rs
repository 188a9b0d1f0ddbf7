use crate::attacks::KNIGHT_JUMPS;
use crate::piece::Color;
use crate::position::Position;
use crate::square::Square;

/// Knight destinations: the eight L-shaped jumps, filtered to the board and
/// to squares not holding a friendly piece. Knights ignore blockers.
pub(crate) fn destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(df, dr)| origin.offset(df, dr))
        .filter(|&to| pos.color_on(to) != Some(color))
        .collect()
}
