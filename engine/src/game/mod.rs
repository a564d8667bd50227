mod board;
mod game_state;
mod stats;
mod types;

pub use board::{Board, LINES};
pub use game_state::{GameSnapshot, GameState};
pub use stats::SessionStats;
pub use types::{CELL_COUNT, FirstPlayerMode, GameStatus, Mark, Position, SIDE};
