//! Attack detection via reverse patterns cast from the target square.

use crate::piece::{Color, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// Rook and queen ray directions, as (file, rank) deltas.
pub(crate) const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop and queen ray directions.
pub(crate) const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Knight jump offsets.
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King step offsets (one square in every direction).
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Position {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Works by casting each attack pattern outward from the *target* square
    /// and checking what it lands on: a knight jump away must sit a knight,
    /// a king step away a king, and so on. Rays stop at the first occupied
    /// square, which is what makes blocked sliders non-attackers. Built
    /// directly on movement geometry, never on the legality filter, so
    /// castling-safety checks cannot recurse back into it.
    ///
    /// The king counts as an attacker of its adjacent squares even though it
    /// could never legally capture into check; that is exactly the behavior
    /// castling-transit and king-adjacency checks need.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        // Knights.
        for (df, dr) in KNIGHT_JUMPS {
            if let Some(from) = sq.offset(df, dr)
                && let Some(piece) = self.piece_on(from)
                && piece.color == by_color
                && piece.kind == PieceKind::Knight
            {
                return true;
            }
        }

        // Enemy king adjacency.
        for (df, dr) in KING_STEPS {
            if let Some(from) = sq.offset(df, dr)
                && let Some(piece) = self.piece_on(from)
                && piece.color == by_color
                && piece.kind == PieceKind::King
            {
                return true;
            }
        }

        // Pawns: a pawn of `by_color` attacks `sq` if it stands one step
        // diagonally *behind* it, from the pawn's point of view.
        let backward = -by_color.forward();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(df, backward)
                && let Some(piece) = self.piece_on(from)
                && piece.color == by_color
                && piece.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        // Orthogonal rays: rook or queen.
        if self.ray_hits(sq, by_color, &ORTHOGONAL_DIRS, PieceKind::Rook) {
            return true;
        }

        // Diagonal rays: bishop or queen.
        if self.ray_hits(sq, by_color, &DIAGONAL_DIRS, PieceKind::Bishop) {
            return true;
        }

        false
    }

    /// Walk each ray from `sq` until the first occupied square; return `true`
    /// when that square holds a `slider`-kind piece or queen of `by_color`.
    fn ray_hits(
        &self,
        sq: Square,
        by_color: Color,
        dirs: &[(i8, i8); 4],
        slider: PieceKind,
    ) -> bool {
        for &(df, dr) in dirs {
            let mut current = sq;
            while let Some(next) = current.offset(df, dr) {
                current = next;
                if let Some(piece) = self.piece_on(current) {
                    if piece.color == by_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break; // first occupied square blocks the ray
                }
            }
        }
        false
    }

    /// Return `true` if `color`'s king is attacked by the opponent.
    ///
    /// Computed on demand rather than cached; it must be re-evaluated after
    /// every move application anyway.
    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.flip())
    }
}
