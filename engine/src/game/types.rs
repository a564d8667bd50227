use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Board side length.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    First,
    Second,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::First => Some(Mark::Second),
            Mark::Second => Some(Mark::First),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
            Mark::Empty => ' ',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Decides which seat holds the First mark in a game against the computer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

/// A cell on the board, stored as a 0-based index in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub fn from_index(index: usize) -> Result<Self, MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        Ok(Self(index))
    }

    /// Converts a user-facing position (1-9) into a board cell.
    pub fn from_one_based(position: usize) -> Result<Self, MoveError> {
        if position == 0 || position > CELL_COUNT {
            return Err(MoveError::OutOfRange(position));
        }
        Ok(Self(position - 1))
    }

    /// Parses user input such as `" 5\n"` as a 1-based position.
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let trimmed = input.trim();
        let position = trimmed
            .parse::<usize>()
            .map_err(|_| MoveError::InvalidInput(trimmed.to_string()))?;
        Self::from_one_based(position)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    pub fn row(&self) -> usize {
        self.0 / SIDE
    }

    pub fn col(&self) -> usize {
        self.0 % SIDE
    }
}
