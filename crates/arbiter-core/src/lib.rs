//! Chess rules core: position representation, move legality, and game state.

mod apply;
mod attacks;
mod castle_rights;
mod chess_move;
mod error;
mod fen;
mod legality;
mod movegen;
mod perft;
mod piece;
mod position;
mod session;
mod square;

pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use error::{FenError, MoveError, PositionError};
pub use fen::STARTING_FEN;
pub use legality::VerifiedMove;
pub use perft::{divide, perft};
pub use piece::{Color, Piece, PieceKind, PromotionPiece};
pub use position::{Position, PrettyPosition};
pub use session::{MoveOutcome, Session};
pub use square::{File, Rank, Square};
