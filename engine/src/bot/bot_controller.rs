use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::minimax::minimax_move;
use crate::error::EngineError;
use crate::game::{Board, CELL_COUNT, GameState, Mark};
use crate::log;
use crate::session_rng::SessionRng;

/// Cells Hard picks from when it opens on an empty board.
pub const OPENING_CELLS: [usize; 5] = [0, 2, 4, 6, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// How Hard plays its very first move on an empty board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardOpening {
    /// Uniform pick among the corners and the center.
    #[default]
    CornerOrCenter,
    /// Full minimax, same as every later move.
    Search,
}

/// Scratch copy of everything a strategy may look at.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_turn(),
        }
    }
}

/// A computer opponent bound to one mark for the length of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bot {
    difficulty: Difficulty,
    mark: Mark,
    hard_opening: HardOpening,
}

impl Bot {
    pub fn new(difficulty: Difficulty, mark: Mark) -> Self {
        Self {
            difficulty,
            mark,
            hard_opening: HardOpening::default(),
        }
    }

    pub fn with_hard_opening(mut self, hard_opening: HardOpening) -> Self {
        self.hard_opening = hard_opening;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn choose_move(&self, state: &GameState, rng: &mut SessionRng) -> Result<usize, EngineError> {
        let input = BotInput {
            board: *state.board(),
            bot_mark: self.mark,
        };
        calculate_move(self.difficulty, &input, self.hard_opening, rng)
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    hard_opening: HardOpening,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::NoAvailableMoves);
    }

    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_heuristic_move(input, &available_moves, rng),
        Difficulty::Hard => calculate_minimax_move(input, &available_moves, hard_opening, rng),
    };
    chosen.ok_or(EngineError::NoAvailableMoves)
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves)
}

fn calculate_heuristic_move(
    input: &BotInput,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    let mut board = input.board;
    let opponent_mark = input.bot_mark.opponent()?;

    if let Some(index) = find_winning_move(&mut board, input.bot_mark, available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&mut board, opponent_mark, available_moves) {
        return Some(index);
    }

    calculate_random_move(available_moves, rng)
}

fn calculate_minimax_move(
    input: &BotInput,
    available_moves: &[usize],
    hard_opening: HardOpening,
    rng: &mut SessionRng,
) -> Option<usize> {
    if available_moves.len() == CELL_COUNT && hard_opening == HardOpening::CornerOrCenter {
        return rng.choose(&OPENING_CELLS);
    }

    let best = minimax_move(&input.board, input.bot_mark)?;
    log!(
        "Minimax for {:?} picked cell {} with score {}",
        input.bot_mark,
        best.index,
        best.score
    );
    Some(best.index)
}

/// Lowest-indexed cell that would complete a line for `mark`.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        if board.apply_move(index, mark).is_err() {
            continue;
        }
        let wins = board.check_win(index, mark);
        board.clear_cell(index);

        if wins {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    const F: Mark = Mark::First;
    const S: Mark = Mark::Second;
    const E: Mark = Mark::Empty;

    fn state_from_moves(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            state.make_move(index).unwrap();
        }
        state
    }

    fn input(cells: [Mark; CELL_COUNT], bot_mark: Mark) -> BotInput {
        BotInput {
            board: Board::from_cells(cells),
            bot_mark,
        }
    }

    fn play_bots(first: Bot, second: Bot, rng: &mut SessionRng) -> GameStatus {
        let mut state = GameState::new();
        while !state.is_terminal() {
            let bot = if state.current_turn() == Mark::First {
                first
            } else {
                second
            };
            let index = bot.choose_move(&state, rng).unwrap();
            state.make_move(index).unwrap();
        }
        state.status()
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "impossible".parse::<Difficulty>(),
            Err(EngineError::InvalidDifficulty("impossible".to_string()))
        );
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_full_board_is_a_contract_violation() {
        let mut rng = SessionRng::new(1);
        let full = input([F, S, F, F, S, S, S, F, F], F);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                calculate_move(difficulty, &full, HardOpening::default(), &mut rng),
                Err(EngineError::NoAvailableMoves)
            );
        }
    }

    #[test]
    fn test_easy_only_picks_available_cells() {
        let mut rng = SessionRng::new(3);
        let bot_input = input([F, E, S, E, F, S, E, E, E], S);
        let available = bot_input.board.available_moves();
        let mut seen = [false; CELL_COUNT];

        for _ in 0..200 {
            let index =
                calculate_move(Difficulty::Easy, &bot_input, HardOpening::default(), &mut rng)
                    .unwrap();
            assert!(available.contains(&index));
            seen[index] = true;
        }
        assert!(available.iter().all(|&i| seen[i]));
    }

    #[test]
    fn test_medium_completes_diagonal() {
        let mut rng = SessionRng::new(5);
        let bot_input = input([F, E, E, E, F, E, E, E, E], F);
        for _ in 0..20 {
            let index =
                calculate_move(Difficulty::Medium, &bot_input, HardOpening::default(), &mut rng)
                    .unwrap();
            assert_eq!(index, 8);
        }
    }

    #[test]
    fn test_medium_blocks_row() {
        let mut rng = SessionRng::new(6);
        let bot_input = input([F, F, E, E, S, E, E, E, E], S);
        for _ in 0..20 {
            let index =
                calculate_move(Difficulty::Medium, &bot_input, HardOpening::default(), &mut rng)
                    .unwrap();
            assert_eq!(index, 2);
        }
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        let mut rng = SessionRng::new(7);
        // Second can block First at 2, but wins outright at 5.
        let bot_input = input([F, F, E, S, S, E, F, E, E], S);
        let index =
            calculate_move(Difficulty::Medium, &bot_input, HardOpening::default(), &mut rng)
                .unwrap();
        assert_eq!(index, 5);
    }

    #[test]
    fn test_medium_picks_lowest_winning_cell() {
        let mut rng = SessionRng::new(8);
        // First wins at 2 (top row) and at 6 (left column).
        let bot_input = input([F, F, E, F, S, E, E, S, S], F);
        let index =
            calculate_move(Difficulty::Medium, &bot_input, HardOpening::default(), &mut rng)
                .unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn test_hard_opening_uses_corner_or_center() {
        let mut rng = SessionRng::new(9);
        let bot = Bot::new(Difficulty::Hard, Mark::First);
        let mut seen = [false; CELL_COUNT];
        for _ in 0..100 {
            let index = bot.choose_move(&GameState::new(), &mut rng).unwrap();
            assert!(OPENING_CELLS.contains(&index));
            seen[index] = true;
        }
        assert!(OPENING_CELLS.iter().all(|&i| seen[i]));
    }

    #[test]
    fn test_hard_opening_search_is_deterministic() {
        let mut rng = SessionRng::new(10);
        let bot = Bot::new(Difficulty::Hard, Mark::First).with_hard_opening(HardOpening::Search);
        assert_eq!(bot.choose_move(&GameState::new(), &mut rng), Ok(0));
    }

    #[test]
    fn test_hard_answers_corner_with_center() {
        let mut rng = SessionRng::new(11);
        let state = state_from_moves(&[0]);
        let bot = Bot::new(Difficulty::Hard, Mark::Second);
        assert_eq!(bot.choose_move(&state, &mut rng), Ok(4));
    }

    #[test]
    fn test_bot_does_not_touch_real_state() {
        let mut rng = SessionRng::new(12);
        let state = state_from_moves(&[0, 4, 8]);
        let before = state.snapshot();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            Bot::new(difficulty, Mark::Second)
                .choose_move(&state, &mut rng)
                .unwrap();
            assert_eq!(state.snapshot(), before);
        }
    }

    #[test]
    fn test_bot_input_from_game_state() {
        let state = state_from_moves(&[4]);
        let bot_input = BotInput::from_game_state(&state);
        assert_eq!(bot_input.bot_mark, Mark::Second);
        assert_eq!(bot_input.board.get(4), Some(Mark::First));
    }

    #[test]
    fn test_hard_never_loses_to_easy_or_medium() {
        let mut rng = SessionRng::new(2024);
        for opponent in [Difficulty::Easy, Difficulty::Medium] {
            for game in 0..200 {
                let hard_first = game % 2 == 0;
                let (first, second) = if hard_first {
                    (
                        Bot::new(Difficulty::Hard, Mark::First),
                        Bot::new(opponent, Mark::Second),
                    )
                } else {
                    (
                        Bot::new(opponent, Mark::First),
                        Bot::new(Difficulty::Hard, Mark::Second),
                    )
                };
                let hard_mark = if hard_first { Mark::First } else { Mark::Second };
                let status = play_bots(first, second, &mut rng);
                assert_ne!(
                    status,
                    GameStatus::Won(hard_mark.opponent().unwrap()),
                    "hard lost to {opponent} in game {game}"
                );
            }
        }
    }

    #[test]
    fn test_hard_against_hard_always_ties() {
        let mut rng = SessionRng::new(77);
        for _ in 0..10 {
            let status = play_bots(
                Bot::new(Difficulty::Hard, Mark::First),
                Bot::new(Difficulty::Hard, Mark::Second),
                &mut rng,
            );
            assert_eq!(status, GameStatus::Tie);
        }
    }
}
