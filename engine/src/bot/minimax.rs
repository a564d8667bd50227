//! Exhaustive minimax over the 3x3 board.
//!
//! Scores are from the searching side's point of view: `1` for a win, `-1`
//! for a loss and `0` for a tie. The search runs on a scratch copy of the
//! board and restores every hypothetical placement before returning.

use crate::game::{Board, CELL_COUNT, Mark};

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const TIE_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimaxMove {
    pub index: usize,
    pub score: i32,
}

/// Best move for `bot_mark`; ties go to the lowest index.
pub fn minimax_move(board: &Board, bot_mark: Mark) -> Option<MinimaxMove> {
    let mut scratch = *board;
    let mut best: Option<MinimaxMove> = None;

    for index in 0..CELL_COUNT {
        if scratch.get(index) != Some(Mark::Empty) {
            continue;
        }

        scratch.apply_move(index, bot_mark).ok()?;
        let score = minimax(&mut scratch, bot_mark, index, bot_mark);
        scratch.clear_cell(index);

        if best.is_none_or(|b| score > b.score) {
            best = Some(MinimaxMove { index, score });
        }
    }

    best
}

/// Minimax value of every empty-board opening, from the opener's side.
pub fn opening_values() -> [i32; CELL_COUNT] {
    let mut values = [TIE_SCORE; CELL_COUNT];
    for (index, value) in values.iter_mut().enumerate() {
        let mut board = Board::new();
        if board.apply_move(index, Mark::First).is_ok() {
            *value = minimax(&mut board, Mark::First, index, Mark::First);
        }
    }
    values
}

fn minimax(board: &mut Board, bot_mark: Mark, last_index: usize, last_mark: Mark) -> i32 {
    if board.check_win(last_index, last_mark) {
        return if last_mark == bot_mark {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
    }

    if board.is_full() {
        return TIE_SCORE;
    }

    let Some(mover) = last_mark.opponent() else {
        return TIE_SCORE;
    };
    let is_maximizing = mover == bot_mark;

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    for index in 0..CELL_COUNT {
        if board.get(index) != Some(Mark::Empty) {
            continue;
        }

        if board.apply_move(index, mover).is_err() {
            continue;
        }
        let score = minimax(board, bot_mark, index, mover);
        board.clear_cell(index);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
