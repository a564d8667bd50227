use thiserror::Error;

/// Rejections of a single move. These are recoverable: the mover is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("'{0}' is not a board position")]
    InvalidInput(String),

    #[error("position {0} is off the board")]
    OutOfRange(usize),

    #[error("cell {0} is already taken")]
    OccupiedCell(usize),

    #[error("game is already over")]
    GameOver,

    #[error("it is not a human player's turn")]
    NotHumanTurn,
}

/// Setup failures and broken caller contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no available moves left on the board")]
    NoAvailableMoves,

    #[error("it is not a computer player's turn")]
    NotBotTurn,

    #[error("unknown difficulty '{0}', expected easy, medium or hard")]
    InvalidDifficulty(String),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}
