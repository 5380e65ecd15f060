pub mod board;
pub mod game;

pub use board::BoardGeometry;
pub use game::{Game, GameAction};
