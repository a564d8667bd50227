use super::board::Board;
use super::types::{CELL_COUNT, GameStatus, Mark};
use crate::error::MoveError;

/// Read-only view of a game for rendering and status queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [Mark; CELL_COUNT],
    pub current_turn: Mark,
    pub is_terminal: bool,
    pub winner: Option<Mark>,
    pub last_move: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    winner: Option<Mark>,
    moves: Vec<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::First,
            winner: None,
            moves: Vec::with_capacity(CELL_COUNT),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<usize> {
        self.moves.last().copied()
    }

    /// Places the mark of the side to move. A winning or board-filling move
    /// ends the game and keeps `current_turn` on the mover.
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_turn;
        self.board.apply_move(index, mark)?;
        self.moves.push(index);

        if self.board.check_win(index, mark) {
            self.winner = Some(mark);
        } else if !self.board.is_full() {
            self.switch_turn();
        }

        Ok(self.status())
    }

    fn switch_turn(&mut self) {
        self.current_turn = match self.current_turn {
            Mark::First => Mark::Second,
            _ => Mark::First,
        };
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Tie,
            None => GameStatus::InProgress,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            current_turn: self.current_turn,
            is_terminal: self.is_terminal(),
            winner: self.winner,
            last_move: self.last_move(),
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::First;
        self.winner = None;
        self.moves.clear();
    }
}
