pub mod bot;
pub mod config;
pub mod error;
pub mod game;
pub mod logger;
pub mod session;
mod session_rng;

pub use bot::{Bot, Difficulty, HardOpening};
pub use error::{EngineError, MoveError};
pub use game::{
    Board, FirstPlayerMode, GameSnapshot, GameState, GameStatus, Mark, Position, SessionStats,
};
pub use session::{
    GameBroadcaster, GameEnd, GameMode, HumanInput, MoveInput, Seat, Session, SessionSettings,
    TurnLoop,
};
pub use session_rng::SessionRng;
