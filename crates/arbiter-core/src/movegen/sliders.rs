use crate::attacks::{DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::piece::Color;
use crate::position::Position;
use crate::square::Square;

/// Walk each direction one square at a time, collecting empty squares until
/// the first occupied square. That square is included only when it holds an
/// enemy piece; the ray never continues past it.
fn slide(pos: &Position, origin: Square, color: Color, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut dests = Vec::new();
    for &(df, dr) in dirs {
        let mut current = origin;
        while let Some(next) = current.offset(df, dr) {
            match pos.color_on(next) {
                None => dests.push(next),
                Some(c) => {
                    if c != color {
                        dests.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
    dests
}

pub(crate) fn rook_destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    slide(pos, origin, color, &ORTHOGONAL_DIRS)
}

pub(crate) fn bishop_destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    slide(pos, origin, color, &DIAGONAL_DIRS)
}

pub(crate) fn queen_destinations(pos: &Position, origin: Square, color: Color) -> Vec<Square> {
    let mut dests = rook_destinations(pos, origin, color);
    dests.extend(bishop_destinations(pos, origin, color));
    dests
}
