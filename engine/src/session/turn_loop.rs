use super::broadcaster::{GameBroadcaster, HumanInput, MoveInput};
use crate::bot::{Bot, Difficulty};
use crate::error::{EngineError, MoveError};
use crate::game::{GameSnapshot, GameState, GameStatus, Mark, Position, SessionStats};
use crate::log;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HumanVsAi(Difficulty),
    HumanVsHuman,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Bot(Bot),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameStatus),
    Cancelled,
}

/// Drives one game between two seats until it reaches a terminal state.
#[derive(Debug)]
pub struct TurnLoop {
    state: GameState,
    first: Seat,
    second: Seat,
    recorded: bool,
}

impl TurnLoop {
    pub fn new(first: Seat, second: Seat) -> Self {
        Self {
            state: GameState::new(),
            first,
            second,
            recorded: false,
        }
    }

    pub fn human_vs_human() -> Self {
        Self::new(Seat::Human, Seat::Human)
    }

    /// The human takes whichever mark the bot was not bound to.
    pub fn human_vs_bot(bot: Bot) -> Self {
        match bot.mark() {
            Mark::First => Self::new(Seat::Bot(bot), Seat::Human),
            _ => Self::new(Seat::Human, Seat::Bot(bot)),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn seat(&self, mark: Mark) -> Seat {
        match mark {
            Mark::Second => self.second,
            _ => self.first,
        }
    }

    pub fn current_seat(&self) -> Seat {
        self.seat(self.state.current_turn())
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_seat() == Seat::Human
    }

    /// Applies a human move given as a 1-based position.
    pub fn submit_move(&mut self, position: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_one_based(position)?;
        self.apply_human_move(position)
    }

    /// Parses and applies raw human input such as `"5"`.
    pub fn submit_input(&mut self, input: &str) -> Result<GameStatus, MoveError> {
        let position = Position::parse(input)?;
        self.apply_human_move(position)
    }

    fn apply_human_move(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotHumanTurn);
        }
        self.state.make_move(position.index())
    }

    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<usize, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::Move(MoveError::GameOver));
        }
        let Seat::Bot(bot) = self.current_seat() else {
            return Err(EngineError::NotBotTurn);
        };

        let index = bot.choose_move(&self.state, rng)?;
        self.state.make_move(index)?;
        log!(
            "Bot {} ({:?}) placed at position {}",
            bot.difficulty(),
            bot.mark(),
            index + 1
        );
        Ok(index)
    }

    /// Credits the finished game once; later calls and unfinished games are ignored.
    pub fn record_outcome(&mut self, stats: &mut SessionStats) -> bool {
        if self.recorded || !self.state.is_terminal() {
            return false;
        }
        self.recorded = stats.record(self.state.status());
        self.recorded
    }

    /// Abandons the game without touching statistics and leaves a fresh board.
    pub fn cancel(&mut self) {
        log!("Game cancelled after {} moves", self.state.moves().len());
        self.state.reset();
        self.recorded = false;
    }

    pub fn run<I, B>(
        &mut self,
        input: &mut I,
        broadcaster: &mut B,
        rng: &mut SessionRng,
        stats: &mut SessionStats,
    ) -> Result<GameEnd, EngineError>
    where
        I: MoveInput + ?Sized,
        B: GameBroadcaster + ?Sized,
    {
        broadcaster.broadcast_state(&self.snapshot());

        while !self.state.is_terminal() {
            match self.current_seat() {
                Seat::Bot(bot) => {
                    let index = self.play_bot_turn(rng)?;
                    broadcaster.broadcast_bot_move(&bot, index);
                }
                Seat::Human => {
                    let mark = self.state.current_turn();
                    match input.read_move(mark, &self.snapshot()) {
                        HumanInput::Cancelled => {
                            self.cancel();
                            return Ok(GameEnd::Cancelled);
                        }
                        HumanInput::Entered(text) => {
                            if let Err(e) = self.submit_input(&text) {
                                log!("Rejected move '{}' for {:?}: {}", text.trim(), mark, e);
                                input.reject(mark, &e);
                                continue;
                            }
                        }
                    }
                }
            }
            broadcaster.broadcast_state(&self.snapshot());
        }

        let status = self.state.status();
        self.record_outcome(stats);
        log!("Game over: {:?}", status);
        broadcaster.broadcast_game_over(status, stats);
        Ok(GameEnd::Finished(status))
    }
}
