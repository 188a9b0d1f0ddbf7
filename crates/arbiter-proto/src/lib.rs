//! Line-oriented console protocol for driving a game session: FEN in,
//! per-move legality verdicts out.

mod command;
mod error;
mod interpreter;

pub use command::{Command, parse_command};
pub use error::ProtoError;
pub use interpreter::{Interpreter, Reply};
