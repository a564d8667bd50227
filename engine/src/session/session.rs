use super::broadcaster::{GameBroadcaster, MoveInput};
use super::turn_loop::{GameEnd, GameMode, TurnLoop};
use crate::bot::{Bot, HardOpening};
use crate::error::EngineError;
use crate::game::{FirstPlayerMode, Mark, SessionStats};
use crate::log;
use crate::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSettings {
    pub first_player: FirstPlayerMode,
    pub hard_opening: HardOpening,
    pub seed: Option<u64>,
}

/// Process-scoped owner of the statistics and the random source. Games come
/// and go; the session outlives all of them.
#[derive(Debug)]
pub struct Session {
    settings: SessionSettings,
    rng: SessionRng,
    stats: SessionStats,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        let rng = SessionRng::from_seed_or_random(settings.seed);
        log!("Session started with seed {}", rng.seed());
        Self {
            settings,
            rng,
            stats: SessionStats::new(),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn new_game(&mut self, mode: GameMode) -> TurnLoop {
        match mode {
            GameMode::HumanVsHuman => {
                log!("New game: two players");
                TurnLoop::human_vs_human()
            }
            GameMode::HumanVsAi(difficulty) => {
                let human_first = match self.settings.first_player {
                    FirstPlayerMode::Human => true,
                    FirstPlayerMode::Computer => false,
                    FirstPlayerMode::Random => self.rng.random_bool(),
                };
                let bot_mark = if human_first {
                    Mark::Second
                } else {
                    Mark::First
                };
                log!("New game: human vs {} computer playing {:?}", difficulty, bot_mark);
                let bot = Bot::new(difficulty, bot_mark).with_hard_opening(self.settings.hard_opening);
                TurnLoop::human_vs_bot(bot)
            }
        }
    }

    /// Runs `game` to completion or cancellation, crediting the statistics
    /// only for completed games.
    pub fn play<I, B>(
        &mut self,
        game: &mut TurnLoop,
        input: &mut I,
        broadcaster: &mut B,
    ) -> Result<GameEnd, EngineError>
    where
        I: MoveInput + ?Sized,
        B: GameBroadcaster + ?Sized,
    {
        game.run(input, broadcaster, &mut self.rng, &mut self.stats)
    }

    /// Lets a front end that drives moves itself ask the bot seat to play.
    pub fn play_bot_turn(&mut self, game: &mut TurnLoop) -> Result<usize, EngineError> {
        let index = game.play_bot_turn(&mut self.rng)?;
        self.finish_game(game);
        Ok(index)
    }

    /// Credits a terminal game exactly once.
    pub fn finish_game(&mut self, game: &mut TurnLoop) -> bool {
        game.record_outcome(&mut self.stats)
    }

    pub fn statistics(&self) -> &SessionStats {
        &self.stats
    }

    pub fn reset_statistics(&mut self) {
        log!(
            "Statistics reset after {} games",
            self.stats.games_played()
        );
        self.stats.reset();
    }
}
