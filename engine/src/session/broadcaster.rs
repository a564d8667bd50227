use crate::bot::Bot;
use crate::error::MoveError;
use crate::game::{GameSnapshot, GameStatus, Mark, SessionStats};

/// What a human seat answered when asked for a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HumanInput {
    Entered(String),
    /// The player gave up waiting, e.g. closed the input stream.
    Cancelled,
}

/// Source of moves for human seats. Blocks until the player answers.
pub trait MoveInput {
    fn read_move(&mut self, mark: Mark, snapshot: &GameSnapshot) -> HumanInput;

    fn reject(&mut self, mark: Mark, error: &MoveError);
}

/// Receives game progress for display.
pub trait GameBroadcaster {
    fn broadcast_state(&mut self, snapshot: &GameSnapshot);

    fn broadcast_bot_move(&mut self, bot: &Bot, index: usize);

    fn broadcast_game_over(&mut self, status: GameStatus, stats: &SessionStats);
}
