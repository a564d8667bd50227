use super::types::{GameStatus, Mark};

/// Per-process tally of completed games. Lives with the session, never with
/// a single game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    games_played: u32,
    first_wins: u32,
    second_wins: u32,
    ties: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Returns `false` for a status that is not terminal.
    pub fn record(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::InProgress => return false,
            GameStatus::Won(Mark::First) => self.first_wins += 1,
            GameStatus::Won(Mark::Second) => self.second_wins += 1,
            GameStatus::Won(Mark::Empty) => return false,
            GameStatus::Tie => self.ties += 1,
        }
        self.games_played += 1;
        true
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::First => self.first_wins,
            Mark::Second => self.second_wins,
            Mark::Empty => 0,
        }
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Share of played games won by `mark`, in percent.
    pub fn win_rate(&self, mark: Mark) -> Option<f64> {
        if self.games_played == 0 {
            return None;
        }
        Some(f64::from(self.wins_for(mark)) * 100.0 / f64::from(self.games_played))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut stats = SessionStats::new();
        assert!(stats.record(GameStatus::Won(Mark::First)));
        assert!(stats.record(GameStatus::Won(Mark::Second)));
        assert!(stats.record(GameStatus::Won(Mark::Second)));
        assert!(stats.record(GameStatus::Tie));

        assert_eq!(stats.games_played(), 4);
        assert_eq!(stats.wins_for(Mark::First), 1);
        assert_eq!(stats.wins_for(Mark::Second), 2);
        assert_eq!(stats.ties(), 1);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut stats = SessionStats::new();
        assert!(!stats.record(GameStatus::InProgress));
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_win_rate() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.win_rate(Mark::First), None);

        stats.record(GameStatus::Won(Mark::First));
        stats.record(GameStatus::Tie);
        stats.record(GameStatus::Tie);
        stats.record(GameStatus::Won(Mark::Second));

        assert_eq!(stats.win_rate(Mark::First), Some(25.0));
        assert_eq!(stats.win_rate(Mark::Second), Some(25.0));
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = SessionStats::new();
        stats.record(GameStatus::Tie);
        stats.reset();
        assert_eq!(stats.games_played(), 0);
        assert_eq!(stats.ties(), 0);
    }
}
